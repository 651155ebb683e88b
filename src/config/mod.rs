#![allow(
	missing_copy_implementations,
	reason = "configs won't be copied around"
)]

mod steam;
pub(crate) mod tracing;

use {
	color_eyre::{
		Section,
		eyre::{self, WrapErr},
	},
	serde::Deserialize,
	std::{fs, path::Path},
};

pub(crate) use self::{steam::SteamConfig, tracing::TracingConfig};

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub(crate) struct Config
{
	pub tracing: TracingConfig,
	pub steam: SteamConfig,
}

impl Config
{
	/// Where we look for a configuration file if none was specified explicitly.
	pub(crate) const DEFAULT_PATH: &'static str = "steam-resolver.toml";

	/// Loads the configuration from `path`, or from [`Config::DEFAULT_PATH`].
	///
	/// A missing file at the default path is not an error; defaults are used instead.
	pub(crate) fn load(path: Option<&Path>) -> eyre::Result<Self>
	{
		match path {
			Some(path) => Self::load_from_file(path),
			None if Path::new(Self::DEFAULT_PATH).exists() => {
				Self::load_from_file(Self::DEFAULT_PATH)
			},
			None => Ok(Self::default()),
		}
	}

	pub(crate) fn load_from_file(path: impl AsRef<Path>) -> eyre::Result<Self>
	{
		let file = fs::read_to_string(path.as_ref())
			.wrap_err_with(|| format!("failed to read configuration file at {:?}", path.as_ref()))
			.suggestion("create the file or run with `--config` to specify an alternative path")?;

		Self::parse(&file)
	}

	pub(crate) fn parse(source: &str) -> eyre::Result<Self>
	{
		toml::from_str(source).wrap_err("failed to parse configuration file")
	}
}

#[cfg(test)]
mod tests
{
	use super::*;

	#[test]
	fn empty_file_uses_defaults()
	{
		let Ok(config) = Config::parse("") else {
			panic!("empty config should parse");
		};

		assert!(config.steam.api_key().is_none());
		assert!(config.steam.api_url.is_none());
		assert!(config.tracing.stderr.enable);
		assert!(!config.tracing.files.enable);
	}

	#[test]
	fn example_file_parses()
	{
		let example = include_str!("../../steam-resolver.example.toml");

		assert!(Config::parse(example).is_ok());
	}

	#[test]
	fn full_file_parses()
	{
		let Ok(config) = Config::parse(
			r#"
			[tracing.stderr]
			enable = false

			[tracing.files]
			enable = true
			directory = "/tmp/steam-resolver-logs"

			[steam]
			api-key = "hunter2"
			api-url = "http://localhost:8080/"
			"#,
		) else {
			panic!("valid config should parse");
		};

		assert_eq!(config.steam.api_key().as_deref(), Some("hunter2"));
		assert_eq!(config.steam.api_url.as_ref().map(|url| url.as_str()), Some("http://localhost:8080/"));
		assert!(!config.tracing.stderr.enable);
		assert!(config.tracing.files.enable);
	}

	#[test]
	fn empty_api_key_counts_as_missing()
	{
		let Ok(config) = Config::parse("[steam]\napi-key = \"\"") else {
			panic!("valid config should parse");
		};

		assert!(config.steam.api_key().is_none());
	}

	#[test]
	fn unknown_fields_are_rejected()
	{
		assert!(Config::parse("[steam]\napi_key = \"hunter2\"").is_err());
		assert!(Config::parse("[discord]\ntoken = \"hunter2\"").is_err());
	}

	#[test]
	fn invalid_urls_are_rejected()
	{
		assert!(Config::parse("[steam]\napi-url = \"not a url\"").is_err());
	}

	#[test]
	fn missing_explicit_file_is_an_error()
	{
		assert!(Config::load(Some(Path::new("/nonexistent/steam-resolver.toml"))).is_err());
	}
}
