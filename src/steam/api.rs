use {
	bytes::Bytes,
	reqwest::{RequestBuilder, StatusCode},
	serde::Deserialize,
	std::{fmt, sync::Arc},
};

pub type Result<T> = std::result::Result<T, ApiError>;

/// Base URL of the public Steam Web API.
pub const DEFAULT_BASE_URL: &str = "https://api.steampowered.com";

#[derive(Debug, Display, Error, From)]
#[display("Steam API error: {_variant}")]
pub enum ApiError
{
	#[from]
	#[display("failed to make http request")]
	Http(reqwest::Error),

	#[display("failed to buffer response body")]
	BufferResponseBody
	{
		#[error(source)]
		error: reqwest::Error,
		status: StatusCode,
	},

	#[display("failed to deserialize response from Steam")]
	DeserializeResponse
	{
		#[error(source)]
		error: serde_json::Error,
		body: Bytes,
	},
}

/// A Steam Web API client.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct Client
{
	http_client: reqwest::Client,

	#[debug(skip)]
	api_key: Option<Arc<str>>,

	base_url: Arc<str>,
}

impl Client
{
	/// Creates a client for the public Steam Web API.
	///
	/// Without an API key, every request that requires one fails without touching the network.
	pub fn new(api_key: Option<Arc<str>>) -> Self
	{
		Self {
			http_client: reqwest::Client::default(),
			api_key: api_key.filter(|key| !key.is_empty()),
			base_url: Arc::from(DEFAULT_BASE_URL),
		}
	}

	/// Sends requests to `base_url` instead of the public Steam Web API.
	pub fn with_base_url(self, base_url: impl AsRef<str>) -> Self
	{
		Self { base_url: Arc::from(base_url.as_ref().trim_end_matches('/')), ..self }
	}

	pub(super) fn api_key(&self) -> Option<&str>
	{
		self.api_key.as_deref()
	}

	/// Returns the full URL for an API method path such as `ISteamUser/ResolveVanityURL/v0001/`.
	pub(super) fn url(&self, method: &str) -> String
	{
		format!("{}/{}", self.base_url, method)
	}
}

impl AsRef<reqwest::Client> for Client
{
	fn as_ref(&self) -> &reqwest::Client
	{
		&self.http_client
	}
}

/// Sends `request` and unwraps the `response` object Steam wraps every payload in.
#[instrument(level = "debug", skip(request), ret(level = "debug"), err(Debug, level = "debug"))]
pub(super) async fn send_request<T>(request: RequestBuilder) -> Result<T>
where
	T: fmt::Debug + for<'de> Deserialize<'de>,
{
	#[derive(Debug, serde::Deserialize)]
	struct ApiResponse<T>
	{
		response: T,
	}

	// request URLs carry the API key, so they must not end up in error messages
	let response = request.send().await.map_err(reqwest::Error::without_url)?;

	if let Err(error) = response.error_for_status_ref() {
		return Err(ApiError::Http(error.without_url()));
	}

	let status = response.status();
	let body = match response.bytes().await {
		Ok(body) => body,
		Err(error) => {
			return Err(ApiError::BufferResponseBody { error: error.without_url(), status });
		},
	};

	serde_json::from_slice(&body[..])
		.map(|ApiResponse { response }| response)
		.map_err(|error| ApiError::DeserializeResponse { error, body })
}
