//! Pad subcommand handler

use anyhow::{bail, Result};

use mathpad::tui::PadApp;
use mathpad::Config;

/// Open the interactive pad and print the submitted value.
#[cfg(not(tarpaulin_include))]
pub fn handle(initial: &str) -> Result<()> {
    if !atty::is(atty::Stream::Stdin) || !atty::is(atty::Stream::Stdout) {
        bail!("The pad needs an interactive terminal; use `mathpad insert` in scripts");
    }

    let config = Config::load()?;
    let app = PadApp::new(&config, initial);
    if let Some(value) = app.run()? {
        println!("{}", value);
    }
    Ok(())
}
