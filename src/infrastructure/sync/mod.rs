//! Remote transfer implementations

mod process;
mod rsync;

pub use process::{run_with_deadline, Finished};
pub use rsync::RsyncTransfer;
