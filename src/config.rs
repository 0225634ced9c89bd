use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub catalog: CatalogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub endpoint: String,
    pub preload_logos: bool,
    pub user_agent: Option<String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://catalog.example.com/api/v1/instances".to_string(),
            preload_logos: true,
            user_agent: Some(format!("flavor-sim/{}", env!("CARGO_PKG_VERSION"))),
        }
    }
}

impl AppConfig {
    /// Load configuration from defaults, an optional config file and the environment
    pub fn load() -> anyhow::Result<Self> {
        Self::load_with_prefix("FLAVOR_SIM")
    }

    fn load_with_prefix(prefix: &str) -> anyhow::Result<Self> {
        let mut config = config::Config::builder();

        // Add default configuration
        config = config.add_source(config::Config::try_from(&AppConfig::default())?);

        // Add config file if it exists
        config = config.add_source(config::File::with_name("flavor-sim").required(false));

        // Environment variables, e.g. FLAVOR_SIM_CATALOG__ENDPOINT
        config = config.add_source(
            config::Environment::with_prefix(prefix)
                .prefix_separator("_")
                .separator("__"),
        );

        let app_config: AppConfig = config.build()?.try_deserialize()?;
        Ok(app_config)
    }
}
