pub mod settings;

use anyhow::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    /// Base URL of the project service.
    pub server_url: String,
    /// API key sent with every request; empty means unauthenticated.
    pub api_key: String,
    /// How many directory levels are expanded when a project is opened.
    pub default_expansion_depth: usize,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        settings::load_config(None)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_url: "http://localhost:3030".to_string(),
            api_key: String::new(),
            default_expansion_depth: 1,
        }
    }
}
