use {serde::Deserialize, std::sync::Arc, url::Url};

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub(crate) struct SteamConfig
{
	/// Steam Web API key; required for resolving vanity names.
	api_key: Option<Box<str>>,

	/// Overrides the Steam Web API base URL.
	pub api_url: Option<Url>,
}

impl SteamConfig
{
	/// Returns the configured API key, treating an empty key as no key.
	pub(crate) fn api_key(&self) -> Option<Arc<str>>
	{
		self.api_key.as_deref().filter(|key| !key.is_empty()).map(Arc::from)
	}
}
