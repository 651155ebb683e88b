/// Steam account number bits
///
/// Identifies an account within its universe and account type. In the Steam2 notation
/// `STEAM_X:Y:Z`, `Y` is the lowest bit of this number and `Z` the remaining bits.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, FromStr)]
pub struct AccountNumber(u32);

impl AccountNumber
{
	/// Extracts the account number bits from a raw 64-bit SteamID.
	#[allow(clippy::cast_possible_truncation, reason = "the account number is the low half")]
	pub const fn from_bits(bits: u64) -> Self
	{
		Self(bits as u32)
	}

	/// Returns the raw integer value.
	pub const fn raw(self) -> u32
	{
		self.0
	}

	/// Returns the `Y` segment of the Steam2 notation.
	pub const fn y(self) -> u32
	{
		self.0 & 1
	}

	/// Returns the `Z` segment of the Steam2 notation.
	pub const fn z(self) -> u32
	{
		self.0 >> 1
	}
}
