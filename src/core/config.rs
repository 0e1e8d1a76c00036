use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
    pub swagger: SwaggerConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    pub max_request_body_size: usize,
    pub shutdown_grace: Duration,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout_secs: u64,
    pub idle_timeout_secs: u64,
    pub max_lifetime_secs: u64,
    /// Upper bound for a single repository call
    pub statement_timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            app: AppConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
            swagger: SwaggerConfig::from_env()?,
        })
    }
}

/// Read an env var and parse it, falling back to `default` when unset
fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> Result<T, String> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| format!("{} must be a valid number", key)),
        Err(_) => Ok(default),
    }
}

impl AppConfig {
    const DEFAULT_MAX_REQUEST_BODY_SIZE: usize = 1024 * 1024; // 1MB
    const DEFAULT_SHUTDOWN_GRACE_SECS: u64 = 10;

    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT: {}", e))?;

        let cors_allowed_origins = parse_origins(
            &env::var("CORS_ALLOWED_ORIGINS").unwrap_or_else(|_| "*".to_string()),
        );

        let max_request_body_size =
            parse_env("MAX_REQUEST_BODY_SIZE", Self::DEFAULT_MAX_REQUEST_BODY_SIZE)?;
        let shutdown_grace_secs =
            parse_env("SHUTDOWN_GRACE_SECS", Self::DEFAULT_SHUTDOWN_GRACE_SECS)?;

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
            max_request_body_size,
            shutdown_grace: Duration::from_secs(shutdown_grace_secs),
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Split a comma-separated origin list, dropping blanks
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

impl DatabaseConfig {
    // Default values for database connection pool (conservative defaults for small-medium apps)
    const DEFAULT_MAX_CONNECTIONS: u32 = 10;
    const DEFAULT_MIN_CONNECTIONS: u32 = 1;
    const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 5;
    const DEFAULT_IDLE_TIMEOUT_SECS: u64 = 600; // 10 minutes
    const DEFAULT_MAX_LIFETIME_SECS: u64 = 1800; // 30 minutes
    const DEFAULT_STATEMENT_TIMEOUT_SECS: u64 = 10;

    pub fn from_env() -> Result<Self, String> {
        // DATABASE_URL wins; otherwise build one from the discrete DB_* variables
        let url = match env::var("DATABASE_URL").ok().filter(|s| !s.is_empty()) {
            Some(url) => url,
            None => Self::compose_url(
                &env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string()),
                &env::var("DB_USER").unwrap_or_else(|_| "postgres".to_string()),
                &env::var("DB_PASSWORD").unwrap_or_default(),
                &env::var("DB_NAME").unwrap_or_else(|_| "postgres".to_string()),
                parse_env("DB_PORT", 5432u16)?,
            ),
        };

        let statement_timeout_secs = parse_env(
            "DB_STATEMENT_TIMEOUT_SECS",
            Self::DEFAULT_STATEMENT_TIMEOUT_SECS,
        )?;
        if statement_timeout_secs == 0 {
            return Err("DB_STATEMENT_TIMEOUT_SECS must be greater than zero".to_string());
        }

        Ok(Self {
            url,
            max_connections: parse_env("DB_MAX_CONNECTIONS", Self::DEFAULT_MAX_CONNECTIONS)?,
            min_connections: parse_env("DB_MIN_CONNECTIONS", Self::DEFAULT_MIN_CONNECTIONS)?,
            acquire_timeout_secs: parse_env(
                "DB_ACQUIRE_TIMEOUT_SECS",
                Self::DEFAULT_ACQUIRE_TIMEOUT_SECS,
            )?,
            idle_timeout_secs: parse_env("DB_IDLE_TIMEOUT_SECS", Self::DEFAULT_IDLE_TIMEOUT_SECS)?,
            max_lifetime_secs: parse_env("DB_MAX_LIFETIME_SECS", Self::DEFAULT_MAX_LIFETIME_SECS)?,
            statement_timeout: Duration::from_secs(statement_timeout_secs),
        })
    }

    /// Build a postgres URL from its parts. Credentials are percent-encoded.
    pub fn compose_url(host: &str, user: &str, password: &str, name: &str, port: u16) -> String {
        let credentials = if password.is_empty() {
            urlencoding::encode(user).into_owned()
        } else {
            format!(
                "{}:{}",
                urlencoding::encode(user),
                urlencoding::encode(password)
            )
        };

        format!(
            "postgres://{}@{}:{}/{}?sslmode=disable",
            credentials, host, port, name
        )
    }

    /// URL with the password masked, safe for logs
    pub fn redacted_url(&self) -> String {
        self.url
            .split('@')
            .next_back()
            .map(|rest| format!("postgres://***@{}", rest))
            .unwrap_or_else(|| "***".to_string())
    }
}

impl SwaggerConfig {
    pub fn from_env() -> Result<Self, String> {
        let title = env::var("SWAGGER_TITLE").unwrap_or_else(|_| "Observation API".to_string());
        let version = env::var("SWAGGER_VERSION").unwrap_or_else(|_| "0.1.0".to_string());
        let description = env::var("SWAGGER_DESCRIPTION")
            .unwrap_or_else(|_| "Model reports and observation periods".to_string());

        Ok(Self {
            title,
            version,
            description,
        })
    }
}
