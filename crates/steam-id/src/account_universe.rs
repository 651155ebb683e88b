use std::str::FromStr;

/// Steam account universes
///
/// See: <https://developer.valvesoftware.com/wiki/SteamID#Universes_Available_for_Steam_Accounts>
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AccountUniverse
{
	Invalid = 0,
	Public = 1,
	Beta = 2,
	Internal = 3,
	Dev = 4,
}

/// Error type for conversions from strings to [`AccountUniverse`]
#[allow(missing_copy_implementations)]
#[derive(Debug, Display, Error)]
#[display("invalid account universe")]
pub struct InvalidAccountUniverse(#[error(ignore)] ());

impl AccountUniverse
{
	/// Extracts the universe bits from a raw 64-bit SteamID.
	#[allow(clippy::cast_possible_truncation, reason = "the universe is the top byte")]
	pub const fn bits_of(steam_id: u64) -> u8
	{
		(steam_id >> 56) as u8
	}

	/// Extracts the universe from a raw 64-bit SteamID.
	///
	/// If the bits do not name a known universe, this function will return [`None`].
	pub const fn from_bits(bits: u64) -> Option<Self>
	{
		Self::from_raw(Self::bits_of(bits))
	}

	/// Converts the numeric universe value into an [`AccountUniverse`].
	pub const fn from_raw(raw: u8) -> Option<Self>
	{
		match raw {
			0 => Some(Self::Invalid),
			1 => Some(Self::Public),
			2 => Some(Self::Beta),
			3 => Some(Self::Internal),
			4 => Some(Self::Dev),
			_ => None,
		}
	}

	/// Returns the variant name.
	pub const fn name(self) -> &'static str
	{
		match self {
			Self::Invalid => "Invalid",
			Self::Public => "Public",
			Self::Beta => "Beta",
			Self::Internal => "Internal",
			Self::Dev => "Dev",
		}
	}
}

impl FromStr for AccountUniverse
{
	type Err = InvalidAccountUniverse;

	fn from_str(value: &str) -> Result<Self, Self::Err>
	{
		match value {
			"0" | "invalid" | "Invalid" => Ok(Self::Invalid),
			"1" | "public" | "Public" => Ok(Self::Public),
			"2" | "beta" | "Beta" => Ok(Self::Beta),
			"3" | "internal" | "Internal" => Ok(Self::Internal),
			"4" | "dev" | "Dev" => Ok(Self::Dev),
			_ => Err(InvalidAccountUniverse(())),
		}
	}
}

#[cfg(test)]
mod tests
{
	use super::*;

	#[test]
	fn from_bits_reads_top_byte()
	{
		assert_eq!(AccountUniverse::from_bits(76561197960287930), Some(AccountUniverse::Public));
		assert_eq!(AccountUniverse::from_bits(4 << 56), Some(AccountUniverse::Dev));
		assert_eq!(AccountUniverse::from_bits(5 << 56), None);
		assert_eq!(AccountUniverse::bits_of(0xFF << 56), 0xFF);
	}

	#[test]
	fn from_str_accepts_names_and_numbers()
	{
		assert_eq!("beta".parse::<AccountUniverse>().ok(), Some(AccountUniverse::Beta));
		assert_eq!("1".parse::<AccountUniverse>().ok(), Some(AccountUniverse::Public));
		assert!("RC".parse::<AccountUniverse>().is_err());
	}
}
