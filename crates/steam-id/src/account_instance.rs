/// Steam account instance bits
///
/// Most values identify a session of the account, but a handful are reserved. Chat IDs carry
/// their kind in the top bits of the instance, see [`CLAN_CHAT`] and friends.
///
/// [`CLAN_CHAT`]: AccountInstance::CLAN_CHAT
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, FromStr)]
pub struct AccountInstance(u32);

impl AccountInstance
{
	/// Instances occupy 20 bits.
	pub const MASK: u32 = 0x000F_FFFF;

	/// Matches every instance of an account.
	pub const ALL: Self = Self(0);

	/// Desktop client; the instance used by regular user accounts.
	pub const DESKTOP: Self = Self(1);

	/// Console client.
	pub const CONSOLE: Self = Self(2);

	/// Web client.
	pub const WEB: Self = Self(4);

	/// Chat flag: the chat belongs to a clan.
	pub const CLAN_CHAT: Self = Self((Self::MASK + 1) >> 1);

	/// Chat flag: lobby chat.
	pub const LOBBY_CHAT: Self = Self((Self::MASK + 1) >> 2);

	/// Chat flag: matchmaking lobby chat.
	pub const MMS_LOBBY_CHAT: Self = Self((Self::MASK + 1) >> 3);

	/// Extracts the account instance bits from a raw 64-bit SteamID.
	#[allow(clippy::cast_possible_truncation, reason = "masked to 20 bits")]
	pub const fn from_bits(bits: u64) -> Self
	{
		Self(((bits >> 32) as u32) & Self::MASK)
	}

	/// Creates an instance from its raw value, discarding anything outside of the 20 instance
	/// bits.
	pub const fn from_raw(raw: u32) -> Self
	{
		Self(raw & Self::MASK)
	}

	/// Returns the raw integer value.
	pub const fn raw(self) -> u32
	{
		self.0
	}

	/// Checks whether all bits of `flag` are set.
	pub const fn has_flag(self, flag: Self) -> bool
	{
		(self.0 & flag.0) == flag.0
	}

	/// Returns an instance with the bits of both `self` and `flag` set.
	pub const fn with_flag(self, flag: Self) -> Self
	{
		Self(self.0 | flag.0)
	}
}

#[cfg(test)]
mod tests
{
	use super::*;

	#[test]
	fn chat_flags_have_expected_values()
	{
		assert_eq!(AccountInstance::CLAN_CHAT.raw(), 0x80000);
		assert_eq!(AccountInstance::LOBBY_CHAT.raw(), 0x40000);
		assert_eq!(AccountInstance::MMS_LOBBY_CHAT.raw(), 0x20000);
	}

	#[test]
	fn from_bits_ignores_neighbouring_fields()
	{
		let bits = (1_u64 << 56) | (8_u64 << 52) | (0x80000_u64 << 32) | 0xFFFF_FFFF;

		assert_eq!(AccountInstance::from_bits(bits), AccountInstance::CLAN_CHAT);
	}

	#[test]
	fn flags_combine()
	{
		let instance = AccountInstance::ALL.with_flag(AccountInstance::LOBBY_CHAT);

		assert!(instance.has_flag(AccountInstance::LOBBY_CHAT));
		assert!(!instance.has_flag(AccountInstance::CLAN_CHAT));
		assert_eq!(AccountInstance::from_raw(u32::MAX).raw(), AccountInstance::MASK);
	}
}
