//! Config command handler

use crate::args::ConfigSubcommand;
use gpa_planner::config::Config;
use gpa_planner::{error, info};
use std::io::{self, Write};

/// Keys accepted by `config get|set|unset`
const KEYS: &[&str] = &[
    "level",
    "file",
    "verbose",
    "reports_dir",
    "summer_start_month",
    "fall_start_month",
];

/// Dispatch config subcommands
pub fn run(subcommand: Option<ConfigSubcommand>, config: &mut Config, defaults: &Config) {
    let result = match subcommand {
        None => handle_config_get(config, None),
        Some(ConfigSubcommand::Get { key }) => handle_config_get(config, key),
        Some(ConfigSubcommand::Set { key, value }) => handle_config_set(config, &key, &value),
        Some(ConfigSubcommand::Unset { key }) => handle_config_unset(config, defaults, &key),
        Some(ConfigSubcommand::Reset) => handle_config_reset(),
    };

    if let Err(err) = result {
        error!("Config command failed: {err}");
        eprintln!("✗ {err}");
        std::process::exit(1);
    }
}

/// Append the list of known keys to unknown-key errors
fn unknown_key(err: String) -> String {
    if err.starts_with("Unknown config key") {
        format!("{err} (known keys: {})", KEYS.join(", "))
    } else {
        err
    }
}

/// Handle the config get subcommand
pub fn handle_config_get(config: &Config, key: Option<String>) -> Result<(), String> {
    if let Some(k) = key {
        let value = config
            .get(&k)
            .ok_or_else(|| unknown_key(format!("Unknown config key: '{k}'")))?;
        println!("{value}");
    } else {
        println!("\n=== Configuration ===\n");
        print!("{config}");
        println!("\nFile: {}", Config::get_config_file_path().display());
    }
    Ok(())
}

/// Handle the config set subcommand
pub fn handle_config_set(config: &mut Config, key: &str, value: &str) -> Result<(), String> {
    config.set(key, value).map_err(unknown_key)?;
    config
        .save()
        .map_err(|e| format!("Failed to save config: {e}"))?;

    info!("Config key '{key}' set to '{value}'");
    println!("✓ Set {key} = {value}");
    Ok(())
}

/// Handle the config unset subcommand
pub fn handle_config_unset(config: &mut Config, defaults: &Config, key: &str) -> Result<(), String> {
    config.unset(key, defaults).map_err(unknown_key)?;
    config
        .save()
        .map_err(|e| format!("Failed to save config: {e}"))?;

    info!("Config key '{key}' reset to default");
    println!("✓ Reset {key} to default");
    Ok(())
}

/// Handle the config reset subcommand
pub fn handle_config_reset() -> Result<(), String> {
    if !Config::get_config_file_path().exists() {
        println!("✓ Config is already at defaults");
        return Ok(());
    }

    print!("Reset configuration to defaults? (y/n): ");
    io::stdout().flush().ok();

    let mut response = String::new();
    io::stdin().read_line(&mut response).ok();
    let answer = response.trim();

    if answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes") {
        Config::reset().map_err(|e| format!("Failed to remove config file: {e}"))?;
        println!("✓ Config reset to defaults");
    } else {
        println!("✗ Reset cancelled");
    }
    Ok(())
}
