use std::env;

/// Application configuration, environment-driven.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Maximum upload body size in bytes (default: 20 MB)
    pub max_upload_size: usize,

    /// JWT Secret Key (Required)
    pub jwt_secret: String,

    /// Allowed CORS Origins (comma separated; "*" allows any)
    pub allowed_origins: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            max_upload_size: 20 * 1024 * 1024, // 20 MB
            jwt_secret: "secret".to_string(),
            // More secure default: localhost only instead of wildcard
            allowed_origins: vec![
                "http://localhost:3000".to_string(),
                "http://localhost:5173".to_string(), // Vite default
                "http://127.0.0.1:3000".to_string(),
            ],
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let default = Self::default();

        Self {
            max_upload_size: env::var("MAX_UPLOAD_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.max_upload_size),

            jwt_secret: env::var("JWT_SECRET").unwrap_or(default.jwt_secret),

            allowed_origins: env::var("ALLOWED_ORIGINS")
                .ok()
                .map(|v| v.split(',').map(|s| s.trim().to_string()).collect())
                .unwrap_or(default.allowed_origins),
        }
    }

    /// Relaxed settings for local development and tests.
    pub fn development() -> Self {
        Self {
            jwt_secret: "dev-secret".to_string(),
            allowed_origins: vec!["*".to_string()],
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_limits() {
        let config = AppConfig::default();
        assert_eq!(config.max_upload_size, 20 * 1024 * 1024);
        assert!(!config.allowed_origins.is_empty());
    }

    #[test]
    fn development_allows_any_origin() {
        let config = AppConfig::development();
        assert_eq!(config.allowed_origins, vec!["*".to_string()]);
    }
}
