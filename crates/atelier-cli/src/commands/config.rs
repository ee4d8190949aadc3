use anyhow::{Context, Result};

use crate::config::{self, Config};

/// Show the current effective configuration.
pub fn show_config(config: &Config) -> Result<()> {
    println!("Current Configuration");
    println!("=====================\n");

    println!("Config file: {}", config::config_file_path().display());

    let exists = config::config_file_path().exists();
    println!("File exists: {}\n", if exists { "yes" } else { "no (using defaults)" });

    println!("Settings:");
    println!("  data_path: {}", config.data_path.display());
    println!("  log_level: {}", config.log_level);
    println!("  case_sensitive.name: {}", config.case_sensitive.name);
    println!("  case_sensitive.genre: {}", config.case_sensitive.genre);
    println!("  case_sensitive.nationality: {}", config.case_sensitive.nationality);

    println!("\nPriority: CLI args > ENV vars (ATELIER_*) > Config file > Defaults");

    Ok(())
}

/// Look up one setting by its dotted key.
pub fn config_value(config: &Config, key: &str) -> Result<String> {
    let value = match key {
        "data_path" => config.data_path.display().to_string(),
        "log_level" => config.log_level.clone(),
        "case_sensitive.name" => config.case_sensitive.name.to_string(),
        "case_sensitive.genre" => config.case_sensitive.genre.to_string(),
        "case_sensitive.nationality" => config.case_sensitive.nationality.to_string(),
        _ => {
            anyhow::bail!(
                "Unknown config key: {}\n\nValid keys: data_path, log_level, \
                 case_sensitive.name, case_sensitive.genre, case_sensitive.nationality",
                key
            );
        }
    };
    Ok(value)
}

/// Get a specific config value.
pub fn get_config(config: &Config, key: Option<String>) -> Result<()> {
    if let Some(key) = key {
        println!("{}", config_value(config, &key)?);
    } else {
        // No key provided, show entire config file contents
        let config_path = config::config_file_path();

        if config_path.exists() {
            let contents =
                std::fs::read_to_string(&config_path).context("Failed to read config file")?;
            print!("{}", contents);
        } else {
            println!("Config file does not exist: {}", config_path.display());
            println!("\nRun 'atelier config init' to create it.");
        }
    }

    Ok(())
}

/// Show the config file path.
pub fn show_path() -> Result<()> {
    println!("{}", config::config_file_path().display());
    Ok(())
}

/// Show example configuration.
pub fn show_example() -> Result<()> {
    print!("{}", config::example_config());
    Ok(())
}

/// Initialize config file with defaults.
pub fn init_config() -> Result<()> {
    let created = config::ensure_config_file()?;
    let config_path = config::config_file_path();

    if created {
        println!("✓ Created config file: {}", config_path.display());
        println!("\nEdit this file to configure atelier.");
    } else {
        println!("Config file already exists: {}", config_path.display());
    }

    Ok(())
}
