//! config command - Get, set, or list configuration values

use std::path::PathBuf;

use anyhow::{bail, Context as _, Result};

use super::Context;
use crate::core::config::{AliasConfig, Config, LauncherConfig, NavigationConfig};
use crate::ui::output;

/// Keys accepted by `config get` and `config set`.
const KEYS: [&str; 6] = [
    "apps_dir",
    "interpreter",
    "entrypoint",
    "alias.name",
    "alias.profile",
    "navigation.back_to_root",
];

/// Get a configuration value, with defaults applied.
pub fn get(ctx: &Context, key: &str) -> Result<()> {
    let value = effective_value(&ctx.config, key)?;
    if !value.is_empty() {
        println!("{}", value);
    }
    Ok(())
}

/// Set a configuration value.
///
/// Writes back to the file the configuration was loaded from, or to
/// `~/.dagger/config.toml` when none was found.
pub fn set(ctx: &Context, key: &str, value: &str) -> Result<()> {
    let mut file = ctx.config.file.clone();
    apply(&mut file, key, value)?;
    file.validate().context("Invalid configuration value")?;

    let path = match ctx.config.loaded_from() {
        Some(path) => path.to_path_buf(),
        None => Config::config_path().context("Failed to locate config file")?,
    };
    Config::write_to(&path, &file).context("Failed to write config")?;

    output::print(format!("Set {} = {}", key, value), ctx.verbosity);
    Ok(())
}

/// List all configuration values.
pub fn list(ctx: &Context) -> Result<()> {
    match ctx.config.loaded_from() {
        Some(path) => println!("# Loaded from {}", path.display()),
        None => println!("# No config file found, showing defaults"),
    }

    for key in KEYS {
        let value = effective_value(&ctx.config, key)?;
        if value.is_empty() {
            println!("{} = (not set)", key);
        } else {
            println!("{} = {}", key, value);
        }
    }
    Ok(())
}

fn effective_value(config: &Config, key: &str) -> Result<String> {
    let value = match key {
        "apps_dir" => config
            .apps_dir(None)
            .context("Failed to resolve apps directory")?
            .display()
            .to_string(),
        "interpreter" => config.interpreter().to_string(),
        "entrypoint" => config.entrypoint().to_string(),
        "alias.name" => config.alias_name().to_string(),
        "alias.profile" => config
            .alias_profile()
            .map(|p| p.display().to_string())
            .unwrap_or_default(),
        "navigation.back_to_root" => config.back_to_root().to_string(),
        _ => bail!("Unknown configuration key: {}", key),
    };
    Ok(value)
}

fn apply(file: &mut LauncherConfig, key: &str, value: &str) -> Result<()> {
    match key {
        "apps_dir" => file.apps_dir = Some(PathBuf::from(value)),
        "interpreter" => file.interpreter = Some(value.to_string()),
        "entrypoint" => file.entrypoint = Some(value.to_string()),
        "alias.name" => {
            file.alias.get_or_insert_with(AliasConfig::default).name = Some(value.to_string())
        }
        "alias.profile" => {
            file.alias.get_or_insert_with(AliasConfig::default).profile =
                Some(PathBuf::from(value))
        }
        "navigation.back_to_root" => {
            let flag: bool = value
                .parse()
                .with_context(|| format!("Expected true or false, got '{}'", value))?;
            file.navigation
                .get_or_insert_with(NavigationConfig::default)
                .back_to_root = Some(flag);
        }
        _ => bail!("Unknown configuration key: {}", key),
    }
    Ok(())
}
