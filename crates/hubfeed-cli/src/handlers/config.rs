use crate::config::{Config, resolve_config_path};
use anyhow::Result;
use std::path::Path;

pub fn handle(explicit_path: Option<&Path>, config: &Config) -> Result<()> {
    match resolve_config_path(explicit_path) {
        Some(path) => {
            let status = if path.exists() { "" } else { " (not found, using defaults)" };
            println!("# {}{}", path.display(), status);
        }
        None => println!("# no config directory available, using defaults"),
    }

    print!("{}", config.to_toml()?);
    Ok(())
}
