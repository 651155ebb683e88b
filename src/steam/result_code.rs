use {serde::Deserialize, std::fmt};

/// A Steam result code (`EResult`).
///
/// Only the codes the Web API commonly returns have names; any other value is carried through
/// as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct ResultCode(i32);

impl ResultCode
{
	pub const OK: Self = Self(1);
	pub const FAIL: Self = Self(2);
	pub const NO_CONNECTION: Self = Self(3);
	pub const INVALID_PARAM: Self = Self(8);
	pub const FILE_NOT_FOUND: Self = Self(9);
	pub const BUSY: Self = Self(10);
	pub const ACCESS_DENIED: Self = Self(15);
	pub const TIMEOUT: Self = Self(16);
	pub const ACCOUNT_NOT_FOUND: Self = Self(18);
	pub const SERVICE_UNAVAILABLE: Self = Self(20);
	pub const LIMIT_EXCEEDED: Self = Self(25);
	pub const NO_MATCH: Self = Self(42);
	pub const RATE_LIMIT_EXCEEDED: Self = Self(84);

	pub const fn new(raw: i32) -> Self
	{
		Self(raw)
	}

	pub const fn raw(self) -> i32
	{
		self.0
	}

	pub const fn is_ok(self) -> bool
	{
		self.0 == Self::OK.0
	}

	/// Returns the name of this code, if it is one we know.
	pub const fn name(self) -> Option<&'static str>
	{
		Some(match self {
			Self::OK => "OK",
			Self::FAIL => "Fail",
			Self::NO_CONNECTION => "NoConnection",
			Self::INVALID_PARAM => "InvalidParam",
			Self::FILE_NOT_FOUND => "FileNotFound",
			Self::BUSY => "Busy",
			Self::ACCESS_DENIED => "AccessDenied",
			Self::TIMEOUT => "Timeout",
			Self::ACCOUNT_NOT_FOUND => "AccountNotFound",
			Self::SERVICE_UNAVAILABLE => "ServiceUnavailable",
			Self::LIMIT_EXCEEDED => "LimitExceeded",
			Self::NO_MATCH => "NoMatch",
			Self::RATE_LIMIT_EXCEEDED => "RateLimitExceeded",
			_ => return None,
		})
	}
}

impl fmt::Display for ResultCode
{
	fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		match self.name() {
			Some(name) => write!(fmt, "{name} ({})", self.0),
			None => write!(fmt, "{}", self.0),
		}
	}
}
