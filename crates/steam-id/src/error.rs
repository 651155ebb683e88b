use std::num::ParseIntError;

/// Error type for conversions from strings to [`SteamId`]
///
/// [`SteamId`]: crate::SteamId
#[allow(missing_copy_implementations)]
#[derive(Debug, Display, Error)]
#[display("failed to parse SteamID: unknown format")]
pub struct ParseSteamIdError(#[error(ignore)] ());

impl ParseSteamIdError
{
	pub(crate) const fn new() -> Self
	{
		Self(())
	}
}

/// Error type for parsing Steam2ID strings (`STEAM_X:Y:Z`)
#[derive(Debug, Display, Error)]
#[display("failed to parse Steam2ID: {_variant}")]
pub enum ParseSteam2IdError
{
	#[display("missing `STEAM_` prefix")]
	MissingPrefix,

	#[display("missing `X` segment")]
	MissingX,

	#[display("invalid `X` segment")]
	InvalidX,

	#[display("missing `Y` segment")]
	MissingY,

	#[display("invalid `Y` segment")]
	InvalidY,

	#[display("missing `Z` segment")]
	MissingZ,

	#[display("`Z` segment is not a decimal number")]
	InvalidZ,

	#[display("`Z` segment is out of range")]
	ZOutOfRange,
}

/// Error type for parsing Steam3ID strings (`[T:U:N]` or `[T:U:N:I]`)
#[derive(Debug, Display, Error)]
#[display("failed to parse Steam3ID: {_variant}")]
pub enum ParseSteam3IdError
{
	#[display("inconsistent brackets")]
	InconsistentBrackets,

	#[display("missing account type")]
	MissingAccountType,

	#[display("unknown account type letter")]
	UnknownAccountType,

	#[display("missing universe")]
	MissingUniverse,

	#[display("invalid universe: {_0}")]
	InvalidUniverse(ParseIntError),

	#[display("missing account number")]
	MissingAccountNumber,

	#[display("invalid account number: {_0}")]
	InvalidAccountNumber(ParseIntError),

	#[display("invalid instance: {_0}")]
	InvalidInstance(ParseIntError),

	#[display("instance is out of range")]
	InstanceOutOfRange,

	#[display("unexpected trailing segments")]
	TrailingSegments,
}
