use std::str::FromStr;

/// Different types of Steam accounts
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AccountType
{
	Invalid = 0,
	Individual = 1,
	Multiseat = 2,
	GameServer = 3,
	AnonGameServer = 4,
	Pending = 5,
	ContentServer = 6,
	Clan = 7,
	Chat = 8,
	P2P = 9,
	AnonUser = 10,
}

/// Error type for conversions from strings to [`AccountType`]
#[allow(missing_copy_implementations)]
#[derive(Debug, Display, Error)]
#[display("invalid account type")]
pub struct InvalidAccountType(#[error(ignore)] ());

impl AccountType
{
	/// Letter used in Steam3 IDs for account types without a letter of their own.
	pub const UNKNOWN_LETTER: char = 'i';

	/// Extracts the account type bits from a raw 64-bit SteamID.
	#[allow(clippy::cast_possible_truncation, reason = "masked to 4 bits")]
	pub const fn bits_of(steam_id: u64) -> u8
	{
		((steam_id >> 52) & 0xF) as u8
	}

	/// Extracts the account type from a raw 64-bit SteamID.
	///
	/// If the bits are invalid, this function will return [`None`].
	pub const fn from_bits(bits: u64) -> Option<Self>
	{
		Self::from_raw(Self::bits_of(bits))
	}

	/// Converts the numeric account type into an [`AccountType`].
	pub const fn from_raw(raw: u8) -> Option<Self>
	{
		match raw {
			0 => Some(Self::Invalid),
			1 => Some(Self::Individual),
			2 => Some(Self::Multiseat),
			3 => Some(Self::GameServer),
			4 => Some(Self::AnonGameServer),
			5 => Some(Self::Pending),
			6 => Some(Self::ContentServer),
			7 => Some(Self::Clan),
			8 => Some(Self::Chat),
			9 => Some(Self::P2P),
			10 => Some(Self::AnonUser),
			_ => None,
		}
	}

	/// Looks up the account type for a Steam3 ID letter.
	///
	/// Chat letters (`T`, `L`, `c`) all map to [`AccountType::Chat`]; the caller is responsible
	/// for setting the matching instance flags.
	pub const fn from_letter(letter: char) -> Option<Self>
	{
		match letter {
			'I' | 'i' => Some(Self::Invalid),
			'U' => Some(Self::Individual),
			'M' => Some(Self::Multiseat),
			'G' => Some(Self::GameServer),
			'A' => Some(Self::AnonGameServer),
			'P' => Some(Self::Pending),
			'C' => Some(Self::ContentServer),
			'g' => Some(Self::Clan),
			'T' | 'L' | 'c' => Some(Self::Chat),
			'a' => Some(Self::AnonUser),
			_ => None,
		}
	}

	/// Returns the letter used for this account type in Steam3 IDs.
	///
	/// Chat IDs may be rendered with a different letter depending on their instance flags; see
	/// [`SteamId`]'s [`Display`] implementation.
	///
	/// [`SteamId`]: crate::SteamId
	/// [`Display`]: std::fmt::Display
	pub const fn letter(self) -> char
	{
		match self {
			Self::Invalid => 'I',
			Self::Individual => 'U',
			Self::Multiseat => 'M',
			Self::GameServer => 'G',
			Self::AnonGameServer => 'A',
			Self::Pending => 'P',
			Self::ContentServer => 'C',
			Self::Clan => 'g',
			Self::Chat => 'T',
			Self::P2P => Self::UNKNOWN_LETTER,
			Self::AnonUser => 'a',
		}
	}

	/// Returns the variant name.
	pub const fn name(self) -> &'static str
	{
		match self {
			Self::Invalid => "Invalid",
			Self::Individual => "Individual",
			Self::Multiseat => "Multiseat",
			Self::GameServer => "GameServer",
			Self::AnonGameServer => "AnonGameServer",
			Self::Pending => "Pending",
			Self::ContentServer => "ContentServer",
			Self::Clan => "Clan",
			Self::Chat => "Chat",
			Self::P2P => "P2P",
			Self::AnonUser => "AnonUser",
		}
	}
}

impl FromStr for AccountType
{
	type Err = InvalidAccountType;

	fn from_str(value: &str) -> Result<Self, Self::Err>
	{
		match value {
			"I" | "i" | "invalid" | "Invalid" => Ok(Self::Invalid),
			"U" | "individual" | "Individual" => Ok(Self::Individual),
			"M" | "multiseat" | "Multiseat" => Ok(Self::Multiseat),
			"G" | "gameserver" | "GameServer" => Ok(Self::GameServer),
			"A" | "anongameserver" | "AnonGameServer" => Ok(Self::AnonGameServer),
			"P" | "pending" | "Pending" => Ok(Self::Pending),
			"C" | "contentserver" | "ContentServer" => Ok(Self::ContentServer),
			"g" | "clan" | "Clan" => Ok(Self::Clan),
			"T" | "L" | "c" | "chat" | "Chat" => Ok(Self::Chat),
			"p2p" | "P2P" => Ok(Self::P2P),
			"a" | "anonuser" | "AnonUser" => Ok(Self::AnonUser),
			_ => Err(InvalidAccountType(())),
		}
	}
}
