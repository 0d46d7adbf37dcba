use std::env;

/// AppConfig
///
/// Holds the portal's entire configuration state. The struct is immutable once
/// loaded, and is pulled into handlers and the guard via FromRef on the shared
/// application state.
#[derive(Clone)]
pub struct AppConfig {
    // Base URL of the backend API that owns user sessions. The navigation
    // guard issues its session probe against `{backend_url}/api/`.
    pub backend_url: String,
    // Path the guard redirects to when a session probe denies or fails.
    pub login_path: String,
    // Runtime environment marker. Controls log output formatting.
    pub env: Env,
}

/// Env
///
/// Defines the runtime context, switching between human-readable local logging
/// and JSON production logging.
#[derive(Clone, PartialEq, Debug)]
pub enum Env {
    Local,
    Production,
}

impl Default for AppConfig {
    /// default
    ///
    /// Provides a safe, non-panicking AppConfig instance primarily used for
    /// test setup, without requiring any environment variables to be present.
    fn default() -> Self {
        Self {
            backend_url: "http://localhost:5000".to_string(),
            login_path: "/login".to_string(),
            env: Env::Local,
        }
    }
}

impl AppConfig {
    /// load
    ///
    /// The canonical function for initializing the configuration at startup.
    /// Reads all parameters from environment variables and fails fast when a
    /// variable required for the current runtime environment is missing.
    ///
    /// # Panics
    /// Panics if `BACKEND_URL` is unset in production. Starting the portal
    /// without a session backend would leave every guarded route unreachable.
    pub fn load() -> Self {
        let env_str = env::var("APP_ENV").unwrap_or_else(|_| "local".to_string());
        let env = match env_str.as_str() {
            "production" => Env::Production,
            _ => Env::Local,
        };

        // The backend is mandatory in production; local development falls back
        // to the conventional dev-server address.
        let backend_url = match env {
            Env::Production => {
                env::var("BACKEND_URL").expect("FATAL: BACKEND_URL required in production")
            }
            _ => env::var("BACKEND_URL").unwrap_or_else(|_| "http://localhost:5000".to_string()),
        };

        let login_path = env::var("LOGIN_PATH").unwrap_or_else(|_| "/login".to_string());

        Self {
            backend_url,
            login_path,
            env,
        }
    }
}
