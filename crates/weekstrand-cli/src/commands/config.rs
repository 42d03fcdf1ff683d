use clap::Subcommand;
use std::path::Path;
use weekstrand_core::StrandConfig;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get a config value
    Get {
        /// Config key (e.g. "work_day_start", "conflict_color")
        key: String,
    },
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// New value
        value: String,
    },
    /// List all config values
    List,
    /// Reset config to defaults
    Reset,
    /// Print the config file location
    Path,
}

pub fn run(action: ConfigAction, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Get { key } => {
            let config = StrandConfig::load(path)?;
            match config.get(&key) {
                Some(value) => println!("{value}"),
                None => return Err(format!("unknown key: {key}").into()),
            }
        }
        ConfigAction::Set { key, value } => {
            let mut config = StrandConfig::load(path)?;
            config.set(&key, &value)?;
            config.save(path)?;
            println!("ok");
        }
        ConfigAction::List => {
            let config = StrandConfig::load(path)?;
            let json = serde_json::to_string_pretty(&config)?;
            println!("{json}");
        }
        ConfigAction::Reset => {
            StrandConfig::default().save(path)?;
            println!("config reset to defaults");
        }
        ConfigAction::Path => {
            println!("{}", path.display());
        }
    }
    Ok(())
}
