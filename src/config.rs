use std::env;
use std::sync::Arc;
use sea_orm::DatabaseConnection;
use tera::Tera;
use crate::utils::app_error::AppError;
use crate::utils::templates::default_templates_dir;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub database_url: String,
    pub templates_dir: String,
    pub seed_tags: bool,
}

#[derive(Clone, axum::extract::FromRef)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub templates: Arc<Tera>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, templates: Tera) -> Self {
        Self {
            db,
            templates: Arc::new(templates),
        }
    }
}

impl Config {
    pub fn init() -> Result<Config, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Config, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let server_host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let server_port = lookup("PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse::<u16>()
            .map_err(|e| AppError::Config(format!("PORT must be a port number: {}", e)))?;

        let database_url = lookup("DATABASE_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| AppError::Config("DATABASE_URL must be set".to_string()))?;

        let templates_dir = lookup("TEMPLATES_DIR").unwrap_or_else(default_templates_dir);

        let seed_tags = match lookup("SEED_TAGS").as_deref().map(str::trim) {
            None | Some("") | Some("0") | Some("false") => false,
            Some("1") | Some("true") => true,
            Some(other) => {
                return Err(AppError::Config(format!("SEED_TAGS must be true or false, got {:?}", other)));
            }
        };

        Ok(Config {
            server_host,
            server_port,
            database_url,
            templates_dir,
            seed_tags,
        })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config, AppError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_only_database_url_is_set() {
        let cfg = config_from(&[("DATABASE_URL", "sqlite::memory:")]).unwrap();
        assert_eq!(cfg.server_addr(), "0.0.0.0:3000");
        assert!(!cfg.seed_tags);
        assert_eq!(cfg.templates_dir, default_templates_dir());
    }

    #[test]
    fn database_url_is_required() {
        assert!(matches!(config_from(&[]), Err(AppError::Config(_))));
        assert!(matches!(config_from(&[("DATABASE_URL", " ")]), Err(AppError::Config(_))));
    }

    #[test]
    fn bad_port_is_rejected() {
        let err = config_from(&[("DATABASE_URL", "sqlite::memory:"), ("PORT", "eighty")]).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn seed_tags_flag_parses() {
        let cfg = config_from(&[("DATABASE_URL", "x"), ("SEED_TAGS", "true")]).unwrap();
        assert!(cfg.seed_tags);
        assert!(config_from(&[("DATABASE_URL", "x"), ("SEED_TAGS", "maybe")]).is_err());
    }
}
