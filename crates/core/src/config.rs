use serde::Deserialize;

/// Root application configuration. Loaded from environment variables
/// with the prefix `LAUNCHGRID__`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub history: HistoryConfig,
    #[serde(default)]
    pub matrix: MatrixConfig,
    #[serde(default)]
    pub validation: ValidationConfig,
    #[serde(default)]
    pub autosave: AutosaveConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HistoryConfig {
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatrixConfig {
    /// Default soft ceiling on total ads for a new configuration.
    #[serde(default = "default_soft_limit")]
    pub soft_limit: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ValidationConfig {
    #[serde(default = "default_min_total_budget")]
    pub min_total_budget: f64,
    #[serde(default = "default_min_budget_per_ad_set")]
    pub min_budget_per_ad_set: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AutosaveConfig {
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

// Default functions
fn default_max_entries() -> usize {
    50
}
fn default_soft_limit() -> u32 {
    200
}
fn default_min_total_budget() -> f64 {
    5.0
}
fn default_min_budget_per_ad_set() -> f64 {
    5.0
}
fn default_debounce_ms() -> u64 {
    2000
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_entries: default_max_entries(),
        }
    }
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self {
            soft_limit: default_soft_limit(),
        }
    }
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_total_budget: default_min_total_budget(),
            min_budget_per_ad_set: default_min_budget_per_ad_set(),
        }
    }
}

impl Default for AutosaveConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder().add_source(
            config::Environment::with_prefix("LAUNCHGRID")
                .separator("__")
                .try_parsing(true)
                .list_separator(","),
        );

        let config = builder.build()?;
        config.try_deserialize()
    }
}
