use serde::Deserialize;
use std::env;
use mercato_offer::SelectionPolicy;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub pricing: PricingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PricingConfig {
    /// How one promotion is chosen when several apply
    #[serde(default)]
    pub selection_policy: SelectionPolicy,
    /// Quantity used when a request leaves it out
    #[serde(default = "default_quantity")]
    pub default_quantity: i64,
    /// JSON snapshot used to seed commission rates and promotions at startup
    pub snapshot_path: Option<String>,
}

fn default_quantity() -> i64 { 1 }

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            selection_policy: SelectionPolicy::default(),
            default_quantity: default_quantity(),
            snapshot_path: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            // Per-environment overrides, optional
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Eg.. `MERCATO__PRICING__SELECTION_POLICY=first_match`
            .add_source(config::Environment::with_prefix("MERCATO").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
