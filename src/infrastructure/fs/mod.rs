//! Filesystem helpers: home/config directory resolution and atomic writes.

mod atomic;
mod home;

pub use atomic::atomic_write;
pub use home::{
    display_with_tilde, expand_home, ezmd_config_dir, ezmd_home_dir, EZMD_CONFIG_DIR_VAR,
    EZMD_TEST_HOME_VAR,
};
