use {
	super::{
		ResultCode,
		api::{self, ApiError, Client},
	},
	serde::{Deserialize, Deserializer},
	steam_id::SteamId,
};

const RESOLVE_VANITY_URL: &str = "ISteamUser/ResolveVanityURL/v0001/";

/// Resolves vanity names (custom profile URLs) to SteamIDs.
pub trait VanityLookup
{
	/// Looks up the SteamID behind `vanity_name`.
	async fn resolve_vanity_url(&self, vanity_name: &str) -> Result<SteamId, VanityError>;
}

/// Reasons a vanity name could not be resolved.
#[derive(Debug, Display, Error, From)]
pub enum VanityError
{
	#[display("vanity name is blank")]
	BlankName,

	#[display("no Steam Web API key configured")]
	MissingApiKey,

	#[from]
	#[display("Steam Web API request failed")]
	Api(ApiError),

	#[display("Steam did not resolve the vanity name: {result}")]
	NoMatch
	{
		result: ResultCode,
		message: Option<Box<str>>,
	},

	#[display("Steam reported success without a SteamID")]
	MissingSteamId,
}

impl VanityLookup for Client
{
	#[instrument(level = "debug", skip(self), ret(level = "debug"), err(level = "debug"))]
	async fn resolve_vanity_url(&self, vanity_name: &str) -> Result<SteamId, VanityError>
	{
		#[derive(serde::Serialize)]
		struct Query<'a>
		{
			#[serde(rename = "key")]
			api_key: &'a str,

			#[serde(rename = "vanityurl")]
			vanity_name: &'a str,
		}

		if vanity_name.trim().is_empty() {
			return Err(VanityError::BlankName);
		}

		let Some(api_key) = self.api_key() else {
			warn!(
				target: "steam_resolver::steam",
				"unable to resolve vanity URL: no Steam Web API key configured",
			);

			return Err(VanityError::MissingApiKey);
		};

		let request = self
			.as_ref()
			.get(self.url(RESOLVE_VANITY_URL))
			.query(&Query { api_key, vanity_name });

		let Response { success, steam_id, message } = api::send_request(request).await?;

		if !success.is_ok() {
			return Err(VanityError::NoMatch { result: success, message });
		}

		steam_id.ok_or(VanityError::MissingSteamId)
	}
}

#[derive(Debug, Deserialize)]
struct Response
{
	success: ResultCode,

	#[serde(default, rename = "steamid", deserialize_with = "deserialize_steam_id")]
	steam_id: Option<SteamId>,

	#[serde(default)]
	message: Option<Box<str>>,
}

fn deserialize_steam_id<'de, D>(deserializer: D) -> Result<Option<SteamId>, D::Error>
where
	D: Deserializer<'de>,
{
	SteamId::deserialize_u64_stringified(deserializer).map(Some)
}
