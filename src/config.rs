use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url_development: String,
    pub backend_url_production: String,
    pub environment: String,
    pub enable_logging: bool,
    pub network_timeout_seconds: u32,
    pub sync_config: SyncConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncConfig {
    /// Cadencia del health check (fija, sin backoff en esa capa)
    pub health_check_interval_secs: u32,
    /// Cadencia del refresco completo de datos
    pub data_sync_interval_secs: u32,
    /// Cadencia base del poll de balance (el backoff parte de aquí)
    pub balance_poll_base_ms: u32,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            health_check_interval_secs: 30,
            data_sync_interval_secs: 30,
            balance_poll_base_ms: 5_000,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url_development: "http://localhost:3000".to_string(),
            backend_url_production: "https://api.coinflow.example".to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            network_timeout_seconds: 10,
            sync_config: SyncConfig::default(),
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self {
            backend_url_development: option_env!("BACKEND_URL_DEVELOPMENT")
                .unwrap_or("http://localhost:3000").to_string(),
            backend_url_production: option_env!("BACKEND_URL_PRODUCTION")
                .unwrap_or("https://api.coinflow.example").to_string(),
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development").to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            network_timeout_seconds: option_env!("NETWORK_TIMEOUT_SECONDS")
                .unwrap_or("10").parse().unwrap_or(10),
            sync_config: SyncConfig {
                health_check_interval_secs: option_env!("HEALTH_CHECK_INTERVAL_SECS")
                    .unwrap_or("30").parse().unwrap_or(30),
                data_sync_interval_secs: option_env!("DATA_SYNC_INTERVAL_SECS")
                    .unwrap_or("30").parse().unwrap_or(30),
                balance_poll_base_ms: option_env!("BALANCE_POLL_BASE_MS")
                    .unwrap_or("5000").parse().unwrap_or(5_000),
            },
        }
    }

    /// Obtiene la URL del backend según el entorno actual
    pub fn backend_url(&self) -> &str {
        match self.environment.as_str() {
            "production" => &self.backend_url_production,
            _ => &self.backend_url_development,
        }
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
