use std::io;

use anyhow::Result;
use tracing::info;

use draughts_console::Console;

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();
    info!("draughts starting");

    let stdin = io::stdin();
    let stdout = io::stdout();
    Console::new().run(stdin.lock(), stdout.lock())?;
    Ok(())
}
