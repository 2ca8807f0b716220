//! Configuration for call factories.

use serde::Deserialize;
use url::Url;

use crate::message::Request;

/// Errors that can occur when loading a [`MockConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	/// The TOML document could not be parsed.
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	/// The placeholder method is empty.
	#[error("placeholder method must not be empty")]
	EmptyMethod,
}

/// Settings shared by the calls a [`Calls`](crate::Calls) factory produces.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MockConfig {
	/// Method of the request reported by calls without a response.
	pub placeholder_method: String,
	/// URL of the request reported by calls without a response.
	pub placeholder_url: Url,
}

impl Default for MockConfig {
	fn default() -> Self {
		let placeholder = Request::placeholder();
		Self {
			placeholder_method: placeholder.method().to_owned(),
			placeholder_url: placeholder.url().clone(),
		}
	}
}

impl MockConfig {
	/// Parses a configuration from a TOML document.
	///
	/// Missing keys take their default values.
	pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
		let config: Self = toml::from_str(input)?;
		if config.placeholder_method.trim().is_empty() {
			return Err(ConfigError::EmptyMethod);
		}
		Ok(config)
	}

	/// Returns the placeholder request described by this configuration.
	pub fn placeholder(&self) -> Request {
		Request::new(self.placeholder_method.clone(), self.placeholder_url.clone())
	}
}
