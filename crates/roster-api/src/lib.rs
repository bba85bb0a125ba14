use anyhow::{Result, anyhow};
use std::sync::OnceLock;

mod constants;
pub mod data;
mod persistence;
pub mod service;
#[cfg(test)]
mod tests;
pub mod util;

pub use persistence::DbContext;
pub use persistence::get_db_context;

#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: String,
    pub avatar_max_height: u32,
}

static CONFIG: OnceLock<Config> = OnceLock::new();

pub fn init(conf: Config) -> Result<()> {
    CONFIG
        .set(conf)
        .map_err(|e| anyhow!("Could not initialize contact API: {e:?}"))?;
    Ok(())
}

pub fn get_config() -> &'static Config {
    CONFIG.get().expect("Contact API is not initialized")
}
