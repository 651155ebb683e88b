#![doc = include_str!("../README.md")]

#[macro_use(Debug, Display, Error, FromStr)]
extern crate derive_more as _;

pub use self::{
	account_instance::AccountInstance,
	account_number::AccountNumber,
	account_type::{AccountType, InvalidAccountType},
	account_universe::{AccountUniverse, InvalidAccountUniverse},
	error::{ParseSteam2IdError, ParseSteam3IdError, ParseSteamIdError},
};
use std::{fmt, str::FromStr};

mod account_instance;
mod account_number;
mod account_type;
mod account_universe;
mod error;

#[cfg(feature = "serde")]
mod serde_impls;

/// A [SteamID]
///
/// Any 64-bit value can be stored; use [`SteamId::is_valid()`] to check whether it describes a
/// well-formed account.
///
/// [SteamID]: https://developer.valvesoftware.com/wiki/SteamID
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SteamId(u64);

impl SteamId
{
	/// Prefix of the Steam2 notation. Matched case-insensitively.
	pub const STEAM2_PREFIX: &'static str = "STEAM_";

	/// Creates a [`SteamId`] from its raw 64-bit representation.
	pub const fn from_u64(value: u64) -> Self
	{
		Self(value)
	}

	/// Returns the 64-bit representation of this [`SteamId`].
	pub const fn as_u64(&self) -> u64
	{
		self.0
	}

	/// Returns the raw universe bits.
	pub const fn universe_bits(&self) -> u8
	{
		AccountUniverse::bits_of(self.0)
	}

	/// Returns the universe of the account this SteamID belongs to.
	///
	/// Returns [`None`] if the universe bits do not name a known universe.
	pub const fn account_universe(&self) -> Option<AccountUniverse>
	{
		AccountUniverse::from_bits(self.0)
	}

	/// Returns the raw account type bits.
	pub const fn account_type_bits(&self) -> u8
	{
		AccountType::bits_of(self.0)
	}

	/// Returns the type of account this SteamID belongs to.
	///
	/// Returns [`None`] if the account type bits do not name a known account type.
	pub const fn account_type(&self) -> Option<AccountType>
	{
		AccountType::from_bits(self.0)
	}

	/// Returns the account instance this SteamID belongs to.
	pub const fn account_instance(&self) -> AccountInstance
	{
		AccountInstance::from_bits(self.0)
	}

	/// Returns the account number of the account this SteamID belongs to.
	pub const fn account_number(&self) -> AccountNumber
	{
		AccountNumber::from_bits(self.0)
	}

	/// Checks whether the bits describe a well-formed account.
	pub const fn is_valid(&self) -> bool
	{
		let account_type = match self.account_type() {
			None | Some(AccountType::Invalid) => return false,
			Some(account_type) => account_type,
		};

		match self.account_universe() {
			None | Some(AccountUniverse::Invalid) => return false,
			Some(_) => {},
		}

		let account_number = self.account_number().raw();
		let instance = self.account_instance().raw();

		match account_type {
			AccountType::Individual => {
				account_number != 0 && instance <= AccountInstance::WEB.raw()
			},
			AccountType::Clan => account_number != 0 && instance == AccountInstance::ALL.raw(),
			AccountType::GameServer => account_number != 0,
			_ => true,
		}
	}

	/// Checks whether `input` starts with the Steam2 prefix.
	pub fn has_steam2_prefix(input: &str) -> bool
	{
		input
			.get(..Self::STEAM2_PREFIX.len())
			.is_some_and(|prefix| prefix.eq_ignore_ascii_case(Self::STEAM2_PREFIX))
	}

	/// Parses a string assuming the Steam2 format (`STEAM_X:Y:Z`).
	///
	/// The `X` segment must be a universe digit but is otherwise ignored; the resulting ID is
	/// placed in `universe`. The resulting ID is always an [`Individual`] account on the
	/// [desktop instance].
	///
	/// [`Individual`]: AccountType::Individual
	/// [desktop instance]: AccountInstance::DESKTOP
	pub fn parse_id2(input: &str, universe: AccountUniverse) -> Result<Self, ParseSteam2IdError>
	{
		if !Self::has_steam2_prefix(input) {
			return Err(ParseSteam2IdError::MissingPrefix);
		}

		let mut segments = input[Self::STEAM2_PREFIX.len()..].splitn(3, ':');

		match segments.next() {
			Some("0" | "1" | "2" | "3" | "4") => {},
			Some("") | None => return Err(ParseSteam2IdError::MissingX),
			Some(_) => return Err(ParseSteam2IdError::InvalidX),
		}

		let y = match segments.next() {
			Some("0") => 0,
			Some("1") => 1,
			Some("") | None => return Err(ParseSteam2IdError::MissingY),
			Some(_) => return Err(ParseSteam2IdError::InvalidY),
		};

		let z = segments
			.next()
			.filter(|segment| !segment.is_empty())
			.ok_or(ParseSteam2IdError::MissingZ)?;

		// `u32::from_str` would also accept a leading `+`
		if !z.bytes().all(|byte| byte.is_ascii_digit()) {
			return Err(ParseSteam2IdError::InvalidZ);
		}

		let z = z
			.parse::<u32>()
			.ok()
			.filter(|&z| z <= (u32::MAX >> 1))
			.ok_or(ParseSteam2IdError::ZOutOfRange)?;

		Ok(Self::from_fields(
			universe as u8,
			AccountType::Individual,
			AccountInstance::DESKTOP,
			(z << 1) | y,
		))
	}

	/// Parses a string assuming the Steam3 format (`[T:U:N]` or `[T:U:N:I]`).
	///
	/// The surrounding brackets are optional, but must either both be present or both be
	/// absent.
	pub fn parse_id3(input: &str) -> Result<Self, ParseSteam3IdError>
	{
		let inner = match input.strip_prefix('[') {
			Some(rest) => rest.strip_suffix(']').ok_or(ParseSteam3IdError::InconsistentBrackets)?,
			None if input.ends_with(']') => return Err(ParseSteam3IdError::InconsistentBrackets),
			None => input,
		};

		let mut segments = inner.split(':');

		let letter = match segments.next().map(|segment| {
			let mut chars = segment.chars();
			(chars.next(), chars.next())
		}) {
			Some((Some(letter), None)) => letter,
			Some((None, _)) | None => return Err(ParseSteam3IdError::MissingAccountType),
			Some((Some(_), Some(_))) => return Err(ParseSteam3IdError::UnknownAccountType),
		};

		let account_type =
			AccountType::from_letter(letter).ok_or(ParseSteam3IdError::UnknownAccountType)?;

		let universe = segments
			.next()
			.filter(|segment| !segment.is_empty())
			.ok_or(ParseSteam3IdError::MissingUniverse)?
			.parse::<u8>()
			.map_err(ParseSteam3IdError::InvalidUniverse)?;

		let account_number = segments
			.next()
			.filter(|segment| !segment.is_empty())
			.ok_or(ParseSteam3IdError::MissingAccountNumber)?
			.parse::<u32>()
			.map_err(ParseSteam3IdError::InvalidAccountNumber)?;

		let mut instance = match segments.next() {
			Some(segment) => {
				let raw = segment.parse::<u32>().map_err(ParseSteam3IdError::InvalidInstance)?;

				if raw > AccountInstance::MASK {
					return Err(ParseSteam3IdError::InstanceOutOfRange);
				}

				AccountInstance::from_raw(raw)
			},
			None if matches!(letter, 'g' | 'T' | 'c' | 'L') => AccountInstance::ALL,
			None => AccountInstance::DESKTOP,
		};

		if segments.next().is_some() {
			return Err(ParseSteam3IdError::TrailingSegments);
		}

		match letter {
			'c' => instance = instance.with_flag(AccountInstance::CLAN_CHAT),
			'L' => instance = instance.with_flag(AccountInstance::LOBBY_CHAT),
			_ => {},
		}

		Ok(Self::from_fields(universe, account_type, instance, account_number))
	}

	#[allow(clippy::cast_lossless, reason = "`From` is not const")]
	const fn from_fields(
		universe: u8,
		account_type: AccountType,
		instance: AccountInstance,
		account_number: u32,
	) -> Self
	{
		let bits = ((universe as u64) << 56_u64)
			| ((account_type as u64) << 52_u64)
			| ((instance.raw() as u64) << 32_u64)
			| (account_number as u64);

		Self(bits)
	}

	/// Returns the Steam3 letter for this ID.
	fn steam3_letter(&self) -> char
	{
		let instance = self.account_instance();

		match self.account_type() {
			Some(AccountType::Chat) if instance.has_flag(AccountInstance::CLAN_CHAT) => 'c',
			Some(AccountType::Chat) if instance.has_flag(AccountInstance::LOBBY_CHAT) => 'L',
			Some(account_type) => account_type.letter(),
			None => AccountType::UNKNOWN_LETTER,
		}
	}
}

/// Renders the Steam3 notation (`[U:1:22202]`).
///
/// The alternate flag (`{:#}`) renders the Steam2 notation (`STEAM_0:0:11101`) for individual
/// and invalid account types, and the raw 64-bit value for everything else.
impl fmt::Display for SteamId
{
	fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		let account_type = self.account_type();
		let account_number = self.account_number();
		let instance = self.account_instance();

		if fmt.alternate() {
			return match account_type {
				Some(AccountType::Invalid | AccountType::Individual) => {
					let universe = self.universe_bits();
					let x = if universe <= (AccountUniverse::Public as u8) { 0 } else { universe };

					write!(fmt, "STEAM_{}:{}:{}", x, account_number.y(), account_number.z())
				},
				_ => write!(fmt, "{}", self.0),
			};
		}

		let render_instance = match account_type {
			Some(AccountType::AnonGameServer | AccountType::Multiseat) => true,
			Some(AccountType::Individual) => instance != AccountInstance::DESKTOP,
			_ => false,
		};

		write!(fmt, "[{}:{}:{}", self.steam3_letter(), self.universe_bits(), account_number)?;

		if render_instance {
			write!(fmt, ":{instance}")?;
		}

		fmt.write_str("]")
	}
}

impl From<u64> for SteamId
{
	fn from(value: u64) -> Self
	{
		Self::from_u64(value)
	}
}

impl From<SteamId> for u64
{
	fn from(steam_id: SteamId) -> Self
	{
		steam_id.as_u64()
	}
}

/// Accepts the raw 64-bit form, the Steam2 form (assuming the public universe) and the Steam3
/// form, in that order.
impl FromStr for SteamId
{
	type Err = ParseSteamIdError;

	fn from_str(value: &str) -> Result<Self, Self::Err>
	{
		if let Ok(value) = value.parse::<u64>() {
			return Ok(Self::from_u64(value));
		}

		if let Ok(steam_id) = Self::parse_id2(value, AccountUniverse::Public) {
			return Ok(steam_id);
		}

		Self::parse_id3(value).map_err(|_| ParseSteamIdError::new())
	}
}
