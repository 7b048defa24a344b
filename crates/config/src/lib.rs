//! Configuration for HLE service endpoints.
//!
//! Configuration is written in TOML. Every key is optional:
//!
//! ```toml
//! [service]
//! # Answer unknown and unimplemented commands with success.
//! auto_stub = false
//! # reject | ambiguous | first_wins | last_wins
//! duplicate_policy = "ambiguous"
//!
//! [logging]
//! # trace | debug | info | warn | error
//! level = "info"
//! ```

pub mod error;

use std::path::Path;

pub use error::{ConfigError, Result};
use hle_service::{DuplicatePolicy, ServiceOptions};
use serde::{Deserialize, Serialize};

/// Parsed configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
	/// Service endpoint behaviour.
	pub service: ServiceConfig,
	/// Log output settings.
	pub logging: LoggingConfig,
}

/// `[service]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServiceConfig {
	/// Answer unknown and unimplemented commands with success.
	pub auto_stub: bool,
	/// How rows sharing a command id are treated.
	pub duplicate_policy: DuplicatePolicy,
}

/// Matches the `hid:dbg` endpoint's own defaults, whose table keeps a
/// conflicting id as ambiguous.
impl Default for ServiceConfig {
	fn default() -> Self {
		Self {
			auto_stub: false,
			duplicate_policy: DuplicatePolicy::Ambiguous,
		}
	}
}

/// `[logging]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
	/// Maximum level emitted.
	pub level: LogLevel,
}

/// Log verbosity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
	/// Everything, including per-dispatch traces.
	Trace,
	/// Debug output.
	Debug,
	/// Informational output.
	#[default]
	Info,
	/// Warnings and errors.
	Warn,
	/// Errors only.
	Error,
}

impl From<LogLevel> for tracing::Level {
	fn from(level: LogLevel) -> Self {
		match level {
			LogLevel::Trace => tracing::Level::TRACE,
			LogLevel::Debug => tracing::Level::DEBUG,
			LogLevel::Info => tracing::Level::INFO,
			LogLevel::Warn => tracing::Level::WARN,
			LogLevel::Error => tracing::Level::ERROR,
		}
	}
}

impl Config {
	/// Parse a TOML string into a [`Config`].
	pub fn parse(input: &str) -> Result<Self> {
		Ok(toml::from_str(input)?)
	}

	/// Load and parse the file at `path`.
	pub fn load(path: &Path) -> Result<Self> {
		let input = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		let config = Self::parse(&input)?;
		tracing::debug!(path = %path.display(), "loaded config");
		Ok(config)
	}

	/// Like [`load`](Self::load), but a missing file yields the defaults.
	pub fn load_or_default(path: &Path) -> Result<Self> {
		match Self::load(path) {
			Err(ConfigError::Io { error, .. }) if error.kind() == std::io::ErrorKind::NotFound => {
				tracing::debug!(path = %path.display(), "config not found, using defaults");
				Ok(Self::default())
			}
			other => other,
		}
	}

	/// Returns the endpoint options described by the `[service]` section.
	pub fn service_options(&self) -> ServiceOptions {
		ServiceOptions {
			auto_stub: self.service.auto_stub,
			duplicate_policy: self.service.duplicate_policy,
		}
	}
}
