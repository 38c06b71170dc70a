use anyhow::Result;

use ezmd::presentation::{render, Session};

pub fn cmd_remotes_list(session: &Session) -> Result<()> {
    for line in render::remote_lines(&session.config.remotes) {
        println!("{}", line);
    }
    Ok(())
}
