use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;

use config::{Config, Environment, File};

use serde::Deserialize;
use serde_aux::prelude::*;

/// Runtime environment, either `Dev` for local development, or `Prod` for release
#[derive(Debug)]
pub enum Runtime {
    Dev,
    Prod,
}

impl Runtime {
    pub fn as_str(&self) -> &str {
        match self {
            Runtime::Dev => "dev",
            Runtime::Prod => "prod",
        }
    }
}

impl TryFrom<String> for Runtime {
    type Error = anyhow::Error;

    fn try_from(s: String) -> anyhow::Result<Self> {
        match s.to_lowercase().as_str() {
            "dev" => Ok(Self::Dev),
            "prod" => Ok(Self::Prod),
            other => anyhow::bail!("{} is not a valid runtime environment", other),
        }
    }
}

/// Application settings wrapper
#[derive(Debug, Deserialize)]
pub struct Settings {
    pub app: ApplicationSettings,
    pub contact: ContactSettings,
}

impl Settings {
    /// Load application settings from the settings directory
    pub fn load() -> anyhow::Result<Self> {
        // Get the path to the settings directory
        let path = env::current_dir()?.join("settings");
        // Get the current environment based on the `APP_ENV` environment variable, default to `Dev`
        let runtime: Runtime = env::var("APP_ENV")
            .unwrap_or_else(|_| "dev".into())
            .try_into()?;

        Self::load_from(runtime, &path)
    }

    /// Load application settings from a specified path and runtime
    pub fn load_from(runtime: Runtime, base_path: &Path) -> anyhow::Result<Self> {
        Config::builder()
            // Include the base settings
            .add_source(File::from(base_path.join("base")).required(true))
            // Include the runtime settings
            .add_source(File::from(base_path.join(runtime.as_str())).required(true))
            // Override/include any settings from environment variables
            // NOTE: Takes the form `APP_<settings category>__<setting name>`.
            .add_source(
                Environment::with_prefix("app")
                    .prefix_separator("_")
                    .separator("__"),
            )
            // Record which runtime the settings were loaded for
            .set_override("app.environment", runtime.as_str())?
            .build()?
            .try_deserialize()
            .context("Failed to load/deserialize settings")
    }
}

#[derive(Debug, Deserialize)]
pub struct ApplicationSettings {
    host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    port: u16,

    environment: String,
    static_dir: PathBuf,
}

impl ApplicationSettings {
    /// The application address to bind to
    pub fn addr(&self) -> (&str, u16) {
        (&self.host, self.port)
    }

    /// The runtime environment label, as reported by the health endpoint
    pub fn environment(&self) -> &str {
        &self.environment
    }

    /// Whether raw error details may be echoed back to clients
    pub fn expose_errors(&self) -> bool {
        self.environment != "prod"
    }

    /// The directory the landing page is served from
    pub fn static_dir(&self) -> &Path {
        &self.static_dir
    }
}

#[derive(Debug, Deserialize)]
pub struct ContactSettings {
    strict_validation: bool,
    rate_limiting: bool,

    #[serde(deserialize_with = "deserialize_number_from_string")]
    rate_limit_quota: u32,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    rate_limit_window_seconds: u64,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    notify_timeout_milliseconds: u64,
}

impl ContactSettings {
    /// Whether the contact endpoint reports every violated field rule
    /// instead of short-circuiting on the first missing one
    pub fn strict_validation(&self) -> bool {
        self.strict_validation
    }

    /// Whether submissions are throttled per client address
    pub fn rate_limiting(&self) -> bool {
        self.rate_limiting
    }

    /// Submissions allowed per client address per window
    pub fn rate_limit_quota(&self) -> u32 {
        self.rate_limit_quota
    }

    /// The throttling window duration
    pub fn rate_limit_window(&self) -> Duration {
        Duration::from_secs(self.rate_limit_window_seconds)
    }

    /// How long a submission notifier may run before it is abandoned
    pub fn notify_timeout(&self) -> Duration {
        Duration::from_millis(self.notify_timeout_milliseconds)
    }
}
