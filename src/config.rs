use serde::Deserialize;

/// Runtime configuration, sourced from the environment (a `.env` file is
/// loaded first when present). Every field has a default so a bare
/// `cargo run` serves on port 5000 with the stock accounts.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default = "default_upload_dir")]
    pub upload_dir: String,
    #[serde(default = "default_secret_key")]
    pub secret_key: String,
    #[serde(default = "default_token_expires_in")]
    pub token_expires_in: String,
    #[serde(default = "default_cors_allow_origin")]
    pub cors_allow_origin: String,

    // Seeded privileged accounts. The defaults are for development; override
    // all four of each in deployment.
    #[serde(default = "default_superadmin_id")]
    pub superadmin_id: String,
    #[serde(default = "default_superadmin_name")]
    pub superadmin_name: String,
    #[serde(default = "default_superadmin_email")]
    pub superadmin_email: String,
    #[serde(default = "default_superadmin_password")]
    pub superadmin_password: String,
    #[serde(default = "default_admin_id")]
    pub admin_id: String,
    #[serde(default = "default_admin_name")]
    pub admin_name: String,
    #[serde(default = "default_admin_email")]
    pub admin_email: String,
    #[serde(default = "default_admin_password")]
    pub admin_password: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let config = config::Config::builder()
            .add_source(config::Environment::default())
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_data_dir() -> String {
    "data".to_string()
}

fn default_upload_dir() -> String {
    "uploads".to_string()
}

fn default_secret_key() -> String {
    "escore-dev-secret".to_string()
}

fn default_token_expires_in() -> String {
    "7d".to_string()
}

fn default_cors_allow_origin() -> String {
    "*".to_string()
}

fn default_superadmin_id() -> String {
    "superadmin-1".to_string()
}

fn default_superadmin_name() -> String {
    "Super Admin".to_string()
}

fn default_superadmin_email() -> String {
    "superadmin@mail.com".to_string()
}

fn default_superadmin_password() -> String {
    "admin123".to_string()
}

fn default_admin_id() -> String {
    "admin-1".to_string()
}

fn default_admin_name() -> String {
    "Admin".to_string()
}

fn default_admin_email() -> String {
    "admin@mail.com".to_string()
}

fn default_admin_password() -> String {
    "admin123".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config.port, 5000);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.data_dir, "data");
        assert_eq!(config.superadmin_email, "superadmin@mail.com");
        assert_eq!(config.admin_email, "admin@mail.com");
        assert_eq!(config.token_expires_in, "7d");
    }
}
