//! Server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `MOCKUP_STUDIO_ADMIN_PASSWORD` - Administrator login password
//! - `GEMINI_API_KEY` - Google Gemini API key
//!
//! ## Optional
//! - `MOCKUP_STUDIO_HOST` - Bind address (default: 127.0.0.1)
//! - `MOCKUP_STUDIO_PORT` - Listen port (default: 3000)
//! - `MOCKUP_STUDIO_ADMIN_USERNAME` - Administrator login name (default: admin)
//! - `MOCKUP_STUDIO_SEED_USERNAME` / `MOCKUP_STUDIO_SEED_PASSWORD` - Initial
//!   regular-user account (both must be set together)
//! - `MOCKUP_STUDIO_STATIC_DIR` - Directory with the built frontend bundle
//! - `GEMINI_MODEL` - Gemini model ID (default: gemini-2.5-flash-image-preview)

use std::collections::HashMap;
use std::net::{IpAddr, SocketAddr};

use secrecy::SecretString;
use thiserror::Error;

const MIN_ENTROPY_BITS_PER_CHAR: f64 = 3.3;
const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash-image-preview";

/// Blocklist of common placeholder patterns (case-insensitive)
const PLACEHOLDER_PATTERNS: &[&str] = &[
    "your-",
    "changeme",
    "replace",
    "placeholder",
    "example",
    "xxx",
    "todo",
    "fixme",
    "insert",
    "enter-",
    "put-your",
    "add-your",
];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Insecure secret in {0}: {1}")]
    InsecureSecret(String, String),
}

/// Server application configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Administrator credentials (separate from the user roster)
    pub admin: AdminCredentials,
    /// Initial regular-user account, if any
    pub seed_user: Option<SeedUser>,
    /// Directory with the built frontend bundle (served at `/`)
    pub static_dir: Option<String>,
    /// Gemini image-generation configuration
    pub gemini: GeminiConfig,
}

/// Administrator login credentials.
///
/// The admin account lives outside the user roster; these credentials come
/// from the environment rather than a source-code literal.
/// Implements `Debug` manually to redact the password.
#[derive(Clone)]
pub struct AdminCredentials {
    /// Administrator login name
    pub username: String,
    /// Administrator password (plaintext compare; hashing is out of scope)
    pub password: SecretString,
}

impl std::fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Initial regular-user account added to the roster at startup.
///
/// Implements `Debug` manually to redact the password.
#[derive(Clone)]
pub struct SeedUser {
    /// Seed account username
    pub username: String,
    /// Seed account password
    pub password: String,
}

impl std::fmt::Debug for SeedUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeedUser")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Gemini image-generation API configuration.
///
/// Implements `Debug` manually to redact the API key.
#[derive(Clone)]
pub struct GeminiConfig {
    /// Google Gemini API key
    pub api_key: SecretString,
    /// Model ID (e.g. gemini-2.5-flash-image-preview)
    pub model: String,
}

impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .finish()
    }
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing, invalid, or
    /// if the API key fails validation (placeholder detection, entropy check).
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("MOCKUP_STUDIO_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("MOCKUP_STUDIO_HOST".to_string(), e.to_string())
            })?;
        let port = get_env_or_default("MOCKUP_STUDIO_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("MOCKUP_STUDIO_PORT".to_string(), e.to_string())
            })?;

        let admin = AdminCredentials::from_env()?;
        let seed_user = SeedUser::from_env()?;
        let static_dir = get_optional_env("MOCKUP_STUDIO_STATIC_DIR");
        let gemini = GeminiConfig::from_env()?;

        Ok(Self {
            host,
            port,
            admin,
            seed_user,
            static_dir,
            gemini,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Returns a reference to the Gemini configuration.
    #[must_use]
    pub const fn gemini(&self) -> &GeminiConfig {
        &self.gemini
    }
}

impl AdminCredentials {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            username: get_env_or_default("MOCKUP_STUDIO_ADMIN_USERNAME", "admin"),
            // A login password, not an API token: require presence, not entropy
            password: get_required_secret("MOCKUP_STUDIO_ADMIN_PASSWORD")?,
        })
    }
}

impl SeedUser {
    /// Load the seed account from environment.
    ///
    /// Returns `None` if neither variable is set (empty roster at startup).
    fn from_env() -> Result<Option<Self>, ConfigError> {
        let username = get_optional_env("MOCKUP_STUDIO_SEED_USERNAME");
        let password = get_optional_env("MOCKUP_STUDIO_SEED_PASSWORD");

        match (username, password) {
            (Some(username), Some(password)) => Ok(Some(Self { username, password })),
            (None, None) => Ok(None),
            _ => Err(ConfigError::InvalidEnvVar(
                "MOCKUP_STUDIO_SEED_*".to_string(),
                "Both MOCKUP_STUDIO_SEED_USERNAME and MOCKUP_STUDIO_SEED_PASSWORD must be set together"
                    .to_string(),
            )),
        }
    }
}

impl GeminiConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            api_key: get_validated_secret("GEMINI_API_KEY")?,
            model: get_env_or_default("GEMINI_MODEL", DEFAULT_GEMINI_MODEL),
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get a required environment variable as a secret.
fn get_required_secret(key: &str) -> Result<SecretString, ConfigError> {
    let value = get_required_env(key)?;
    if value.is_empty() {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            "must not be empty".to_string(),
        ));
    }
    Ok(SecretString::from(value))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Calculate Shannon entropy in bits per character.
fn shannon_entropy(s: &str) -> f64 {
    if s.is_empty() {
        return 0.0;
    }

    let mut freq: HashMap<char, usize> = HashMap::new();
    for c in s.chars() {
        *freq.entry(c).or_insert(0) += 1;
    }

    #[allow(clippy::cast_precision_loss)] // String length will never exceed f64 precision
    let len = s.len() as f64;
    freq.values()
        .map(|&count| {
            #[allow(clippy::cast_precision_loss)] // Character count will never exceed f64 precision
            let p = count as f64 / len;
            -p * p.log2()
        })
        .sum()
}

/// Validate that a secret is not a placeholder and has sufficient entropy.
fn validate_secret_strength(secret: &str, var_name: &str) -> Result<(), ConfigError> {
    let lower = secret.to_lowercase();

    // Check blocklist
    for pattern in PLACEHOLDER_PATTERNS {
        if lower.contains(pattern) {
            return Err(ConfigError::InsecureSecret(
                var_name.to_string(),
                format!("appears to be a placeholder (contains '{pattern}')"),
            ));
        }
    }

    // Check entropy (real API keys have high entropy)
    let entropy = shannon_entropy(secret);
    if entropy < MIN_ENTROPY_BITS_PER_CHAR {
        return Err(ConfigError::InsecureSecret(
            var_name.to_string(),
            format!(
                "entropy too low ({entropy:.2} bits/char, need >= {MIN_ENTROPY_BITS_PER_CHAR:.1}). Use a real API key."
            ),
        ));
    }

    Ok(())
}

/// Load and validate a secret from environment.
fn get_validated_secret(key: &str) -> Result<SecretString, ConfigError> {
    let value = get_required_env(key)?;
    validate_secret_strength(&value, key)?;
    Ok(SecretString::from(value))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_shannon_entropy_empty() {
        assert!((shannon_entropy("") - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_shannon_entropy_single_char() {
        // All same character = 0 entropy
        assert!((shannon_entropy("aaaaaaa") - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_shannon_entropy_two_chars() {
        // "ab" has entropy of 1 bit per char (50% a, 50% b)
        let entropy = shannon_entropy("ab");
        assert!((entropy - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_shannon_entropy_high() {
        // Random-looking string should have high entropy
        let entropy = shannon_entropy("aB3$xY9!mK2@nL5#");
        assert!(entropy > 3.3);
    }

    #[test]
    fn test_validate_secret_strength_placeholder() {
        let result = validate_secret_strength("your-api-key-here", "TEST_VAR");
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::InsecureSecret(_, _)));
    }

    #[test]
    fn test_validate_secret_strength_changeme() {
        let result = validate_secret_strength("changeme123", "TEST_VAR");
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_secret_strength_low_entropy() {
        let result = validate_secret_strength("aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa", "TEST_VAR");
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::InsecureSecret(_, _)));
    }

    #[test]
    fn test_validate_secret_strength_valid() {
        // High-entropy random string
        let result = validate_secret_strength("aB3$xY9!mK2@nL5#pQ7&rT0*uW4^zC6", "TEST_VAR");
        assert!(result.is_ok());
    }

    #[test]
    fn test_socket_addr() {
        let config = ServerConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            admin: AdminCredentials {
                username: "admin".to_string(),
                password: SecretString::from("password123"),
            },
            seed_user: None,
            static_dir: None,
            gemini: GeminiConfig {
                api_key: SecretString::from("AIzaTest"),
                model: DEFAULT_GEMINI_MODEL.to_string(),
            },
        };

        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 3000);
    }

    #[test]
    fn test_default_gemini_model() {
        assert_eq!(DEFAULT_GEMINI_MODEL, "gemini-2.5-flash-image-preview");
    }

    #[test]
    fn test_admin_credentials_debug_redacts_password() {
        let admin = AdminCredentials {
            username: "admin".to_string(),
            password: SecretString::from("super_secret_admin_password"),
        };

        let debug_output = format!("{admin:?}");

        assert!(debug_output.contains("admin"));
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("super_secret_admin_password"));
    }

    #[test]
    fn test_gemini_config_debug_redacts_secrets() {
        let config = GeminiConfig {
            api_key: SecretString::from("AIza-super-secret-key"),
            model: DEFAULT_GEMINI_MODEL.to_string(),
        };

        let debug_output = format!("{config:?}");

        // Public fields should be visible
        assert!(debug_output.contains(DEFAULT_GEMINI_MODEL));

        // Secret fields should be redacted
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("AIza-super-secret-key"));
    }
}
