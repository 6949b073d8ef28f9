//! Handlers for `config show` and `config validate`.

use super::command::ConfigPathArg;
use super::load_config;

/// Print the effective configuration as TOML.
pub fn show(args: &ConfigPathArg) -> anyhow::Result<()> {
    let config = load_config(args)?;
    print!("{}", config.to_toml()?);
    Ok(())
}

/// Load and validate the configuration, reporting success.
pub fn validate(args: &ConfigPathArg) -> anyhow::Result<()> {
    let config = load_config(args)?;
    println!(
        "Configuration is valid (model {}, {}:{})",
        config.model.id, config.server.host, config.server.port
    );
    Ok(())
}
