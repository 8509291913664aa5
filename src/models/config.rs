use actix_web::cookie::Key;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Password of the bootstrap admin when none is configured.
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

/// Runtime settings, read from `config/default.yaml` (optional) and
/// overridden by `APP__*` environment variables such as `APP__PORT`.
#[derive(Clone, Debug, Deserialize)]
pub struct ServerConfig {
    /// Interface the HTTP server binds to.
    pub bind_address: String,
    pub port: u16,
    /// Signing key for session cookies, at least 64 bytes.
    #[serde(default)]
    pub secret_key: Option<String>,
    /// Administrator account ensured at startup.
    pub admin_username: String,
    pub admin_password: String,
    /// Load the demo catalogue into the empty store on startup.
    pub seed_sample_data: bool,
    /// Mark the session cookie `Secure`; enable behind HTTPS.
    pub cookie_secure: bool,
}

impl ServerConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config/default")
    }

    /// Same as [`Self::load`] with an explicit base file (extension optional).
    pub fn load_from(path: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("bind_address", "127.0.0.1")?
            .set_default("port", 8080)?
            .set_default("admin_username", "admin")?
            .set_default("admin_password", DEFAULT_ADMIN_PASSWORD)?
            .set_default("seed_sample_data", true)?
            .set_default("cookie_secure", false)?
            .add_source(File::with_name(path).required(false))
            .add_source(
                Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Self>()?
            .validate()
    }

    /// Whether the bootstrap admin still uses the shipped password.
    pub fn uses_default_admin_password(&self) -> bool {
        self.admin_password == DEFAULT_ADMIN_PASSWORD
    }

    /// A deployment behind HTTPS must set its own admin password.
    fn validate(self) -> Result<Self, ConfigError> {
        if self.cookie_secure && self.uses_default_admin_password() {
            return Err(ConfigError::Message(
                "admin_password must be set (APP__ADMIN_PASSWORD) when cookie_secure is enabled"
                    .to_string(),
            ));
        }
        if self.uses_default_admin_password() {
            log::warn!(
                "Admin account '{}' uses the default password; set APP__ADMIN_PASSWORD",
                self.admin_username
            );
        }
        Ok(self)
    }

    /// Cookie signing key. Falls back to a random key, which invalidates
    /// sessions on every restart.
    pub fn session_key(&self) -> Key {
        match self.secret_key.as_deref().map(|s| Key::try_from(s.as_bytes())) {
            Some(Ok(key)) => key,
            Some(Err(e)) => {
                log::warn!("Configured secret_key is unusable ({e}); using a random key");
                Key::generate()
            }
            None => {
                log::warn!("No secret_key configured; using a random key");
                Key::generate()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_a_file() {
        let config = ServerConfig::load_from("config/does-not-exist").unwrap();
        assert_eq!(config.admin_username, "admin");
        assert!(config.seed_sample_data);
        assert!(config.port > 0);
    }

    fn config(admin_password: &str, cookie_secure: bool) -> ServerConfig {
        ServerConfig {
            bind_address: "127.0.0.1".into(),
            port: 8080,
            secret_key: Some("too-short".into()),
            admin_username: "admin".into(),
            admin_password: admin_password.into(),
            seed_sample_data: false,
            cookie_secure,
        }
    }

    #[test]
    fn default_admin_password_is_refused_behind_https() {
        let err = config(DEFAULT_ADMIN_PASSWORD, true).validate().unwrap_err();
        assert!(err.to_string().contains("APP__ADMIN_PASSWORD"));

        let config = config("s3cret-enough", true).validate().unwrap();
        assert!(!config.uses_default_admin_password());
    }

    #[test]
    fn default_admin_password_is_allowed_for_local_runs() {
        let config = config(DEFAULT_ADMIN_PASSWORD, false).validate().unwrap();
        assert!(config.uses_default_admin_password());
    }

    #[test]
    fn short_secret_falls_back_to_random_key() {
        let config = config("admin123", false);
        let first = config.session_key();
        let second = config.session_key();
        assert_ne!(first.master(), second.master());
    }
}
