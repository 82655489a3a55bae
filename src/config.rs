use serde::Deserialize;

use crate::api::DEFAULT_BASE_URL;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub api: ApiConfig,
    pub checker: CheckerConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    /// Per-request timeout. None leaves a hung call pending indefinitely.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CheckerConfig {
    pub keys_file: String,
    pub max_concurrency: usize,
    pub request_delay_ms: u64,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();

        let config = config::Config::builder()
            .set_default("api.base_url", DEFAULT_BASE_URL)?
            .set_default("checker.keys_file", "keys.txt")?
            .set_default("checker.max_concurrency", 4)?
            .set_default("checker.request_delay_ms", 1000)?
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(
                config::Environment::with_prefix("PENGU")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?;

        let config: Config = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.checker.max_concurrency == 0 {
            anyhow::bail!("checker.max_concurrency must be at least 1");
        }
        if self.api.base_url.is_empty() {
            anyhow::bail!("api.base_url must not be empty");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_load_without_config_file() {
        let config = Config::load().expect("defaults should load");
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.checker.max_concurrency, 4);
        assert_eq!(config.checker.request_delay_ms, 1000);
        assert!(config.api.request_timeout_secs.is_none());
    }
}
