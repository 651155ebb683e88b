//! Turns free-form user input into [`SteamId`]s.
//!
//! Inputs are tried against the following formats, in order:
//!
//! 1. the legacy Steam2 notation (`STEAM_X:Y:Z`, prefix matched case-insensitively)
//! 2. a raw 64-bit integer
//! 3. a vanity name, resolved through a [`VanityLookup`]

use {
	crate::steam::{VanityError, VanityLookup},
	steam_id::{AccountUniverse, ParseSteam2IdError, SteamId},
};

/// Steam2IDs do not encode their universe reliably, so they are always placed in this one.
const STEAM2_UNIVERSE: AccountUniverse = AccountUniverse::Public;

/// Reasons an input could not be resolved.
#[derive(Debug, Display, Error, From)]
pub enum ResolveError
{
	#[display("input is empty")]
	EmptyInput,

	#[from]
	#[display("input has a Steam2ID prefix but is not a valid Steam2ID")]
	InvalidSteam2Id(ParseSteam2IdError),

	#[from]
	#[display("failed to resolve vanity name")]
	Vanity(VanityError),
}

/// Resolves user input to [`SteamId`]s.
#[derive(Debug, Clone)]
pub struct Resolver<L>
{
	vanity_lookup: L,
}

impl<L> Resolver<L>
where
	L: VanityLookup,
{
	pub const fn new(vanity_lookup: L) -> Self
	{
		Self { vanity_lookup }
	}

	pub const fn vanity_lookup(&self) -> &L
	{
		&self.vanity_lookup
	}

	/// Resolves `input` to a [`SteamId`].
	///
	/// Steam2IDs and raw integers never cause a vanity lookup. A malformed Steam2ID is an error
	/// and is not retried as a vanity name. Raw integers may be padded with whitespace and are
	/// taken as-is, without checking [`SteamId::is_valid()`].
	#[instrument(level = "debug", skip(self), ret(level = "debug"), err(level = "debug"))]
	pub async fn try_resolve(&self, input: &str) -> Result<SteamId, ResolveError>
	{
		if input.is_empty() {
			return Err(ResolveError::EmptyInput);
		}

		if SteamId::has_steam2_prefix(input) {
			return SteamId::parse_id2(input, STEAM2_UNIVERSE).map_err(ResolveError::from);
		}

		if let Ok(raw) = input.trim().parse::<u64>() {
			return Ok(SteamId::from_u64(raw));
		}

		self.vanity_lookup
			.resolve_vanity_url(input)
			.await
			.map_err(ResolveError::from)
	}

	/// Resolves `input` to a [`SteamId`], if possible.
	///
	/// See [`Resolver::try_resolve()`] for details; the reason for a failure is logged at the
	/// `debug` level.
	pub async fn resolve(&self, input: &str) -> Option<SteamId>
	{
		self.try_resolve(input).await.ok()
	}
}
