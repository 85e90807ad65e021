//! Config subcommands handler

use anyhow::Result;

use mathpad::theme::current_theme;
use mathpad::Config;

/// Show current configuration as TOML.
pub fn handle_show() -> Result<()> {
    let config = Config::load()?;
    let toml_str = toml::to_string_pretty(&config)?;
    let theme = current_theme();
    println!("{}", theme.primary_text(&toml_str));
    Ok(())
}

/// Print the config file path.
pub fn handle_path() -> Result<()> {
    println!("{}", Config::config_path()?.display());
    Ok(())
}

/// Write the default config file.
///
/// An existing file is left alone unless `force` is set.
pub fn handle_init(force: bool) -> Result<()> {
    let theme = current_theme();
    let path = Config::config_path()?;

    if path.exists() && !force {
        println!(
            "{}",
            theme.secondary_text(&format!(
                "Config already exists at {} (use --force to overwrite)",
                path.display()
            ))
        );
        return Ok(());
    }

    let path = Config::default().save()?;
    println!(
        "{}",
        theme.success_text(&format!("Wrote default config to {}", path.display()))
    );
    Ok(())
}
