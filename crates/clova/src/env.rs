use serde::Deserialize;

fn default_api_base() -> String {
    crate::client::DEFAULT_API_BASE.to_string()
}

/// Service credentials, sourced from the environment (optionally via a
/// `.env` file). Never hardcoded.
#[derive(Debug, Clone, Deserialize)]
pub struct Env {
    pub clova_client_id: String,
    pub clova_client_secret: String,
    #[serde(default = "default_api_base")]
    pub clova_api_base: String,
}

impl Env {
    pub fn load() -> Result<Self, envy::Error> {
        let _ = dotenvy::dotenv();
        envy::from_env()
    }
}
