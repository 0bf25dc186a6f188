use blurb_core::config as core_config;
use blurb_core::error::AppError;

#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub common: core_config::Config,
}

impl StoreConfig {
    pub fn load() -> Result<Self, AppError> {
        Ok(StoreConfig {
            common: core_config::Config::load()?,
        })
    }
}
