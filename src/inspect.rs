//! Human-readable breakdowns of [`SteamId`]s.

use {
	std::borrow::Cow,
	steam_id::{AccountInstance, SteamId},
};

/// Instance values with a special meaning, and how to label them.
pub const INSTANCE_LABELS: [(AccountInstance, &str); 7] = [
	(AccountInstance::ALL, "all (0)"),
	(AccountInstance::DESKTOP, "desktop (1)"),
	(AccountInstance::CONSOLE, "console (2)"),
	(AccountInstance::WEB, "web (4)"),
	(AccountInstance::CLAN_CHAT, "clan (524288 / 0x80000)"),
	(AccountInstance::LOBBY_CHAT, "lobby (262144 / 0x40000)"),
	(AccountInstance::MMS_LOBBY_CHAT, "mms lobby (131072 / 0x20000)"),
];

/// Returns the label for `instance`, or its decimal value if it has no special meaning.
pub fn instance_label(instance: AccountInstance) -> Cow<'static, str>
{
	INSTANCE_LABELS
		.iter()
		.find(|&&(value, _)| value == instance)
		.map_or_else(|| Cow::Owned(instance.to_string()), |&(_, label)| Cow::Borrowed(label))
}

/// Describes every field of `steam_id`.
///
/// ```
/// # use steam_resolver::{SteamId, expand};
/// assert_eq!(
///     expand(SteamId::from_u64(76561197960287930)),
///     "[U:1:22202] (UInt64 = 76561197960287930, IsValid = true, Universe = Public, \
///      Instance = desktop (1), Type = Individual, AccountID = 22202)",
/// );
/// ```
pub fn expand(steam_id: SteamId) -> String
{
	let universe = steam_id.account_universe().map_or_else(
		|| Cow::Owned(steam_id.universe_bits().to_string()),
		|universe| Cow::Borrowed(universe.name()),
	);

	let account_type = steam_id.account_type().map_or_else(
		|| Cow::Owned(steam_id.account_type_bits().to_string()),
		|account_type| Cow::Borrowed(account_type.name()),
	);

	format!(
		"{} (UInt64 = {}, IsValid = {}, Universe = {}, Instance = {}, Type = {}, AccountID = {})",
		steam_id,
		steam_id.as_u64(),
		steam_id.is_valid(),
		universe,
		instance_label(steam_id.account_instance()),
		account_type,
		steam_id.account_number(),
	)
}

#[cfg(test)]
mod tests
{
	use {super::*, proptest::prelude::*};

	fn with_instance(instance: u32) -> SteamId
	{
		SteamId::from_u64((76561197960287930 & !(0xF_FFFF << 32)) | (u64::from(instance) << 32))
	}

	#[test]
	fn expands_individual()
	{
		assert_eq!(
			expand(SteamId::from_u64(76561198282622073)),
			"[U:1:322356345] (UInt64 = 76561198282622073, IsValid = true, Universe = Public, \
			 Instance = desktop (1), Type = Individual, AccountID = 322356345)",
		);
	}

	#[test]
	fn expands_clan()
	{
		assert_eq!(
			expand(SteamId::from_u64(103582791429521412)),
			"[g:1:4] (UInt64 = 103582791429521412, IsValid = true, Universe = Public, \
			 Instance = all (0), Type = Clan, AccountID = 4)",
		);
	}

	#[test]
	fn expands_clan_chat()
	{
		assert_eq!(
			expand(SteamId::from_u64(110338190870577156)),
			"[c:1:4] (UInt64 = 110338190870577156, IsValid = true, Universe = Public, \
			 Instance = clan (524288 / 0x80000), Type = Chat, AccountID = 4)",
		);
	}

	#[test]
	fn expands_invalid_ids()
	{
		assert_eq!(
			expand(SteamId::default()),
			"[I:0:0] (UInt64 = 0, IsValid = false, Universe = Invalid, Instance = all (0), \
			 Type = Invalid, AccountID = 0)",
		);

		assert_eq!(
			expand(SteamId::from_u64(u64::MAX)),
			"[i:255:4294967295] (UInt64 = 18446744073709551615, IsValid = false, \
			 Universe = 255, Instance = 1048575, Type = 15, AccountID = 4294967295)",
		);
	}

	#[test]
	fn reserved_instances_are_labelled()
	{
		let cases = [
			(0, "all (0)"),
			(1, "desktop (1)"),
			(2, "console (2)"),
			(4, "web (4)"),
			(0x80000, "clan (524288 / 0x80000)"),
			(0x40000, "lobby (262144 / 0x40000)"),
			(0x20000, "mms lobby (131072 / 0x20000)"),
		];

		for (raw, label) in cases {
			assert_eq!(instance_label(AccountInstance::from_raw(raw)), label);
			assert!(expand(with_instance(raw)).contains(&format!("Instance = {label},")));
		}
	}

	#[test]
	fn other_instances_are_unlabelled()
	{
		assert_eq!(instance_label(AccountInstance::from_raw(3)), "3");
		assert_eq!(instance_label(AccountInstance::from_raw(0xC0000)), "786432");
	}

	proptest! {
		#[test]
		fn expand_is_deterministic(raw in any::<u64>())
		{
			let steam_id = SteamId::from_u64(raw);

			prop_assert_eq!(expand(steam_id), expand(steam_id));
		}

		#[test]
		fn unreserved_instances_render_as_decimal(raw in 0_u32..=AccountInstance::MASK)
		{
			let instance = AccountInstance::from_raw(raw);
			prop_assume!(!INSTANCE_LABELS.iter().any(|&(value, _)| value == instance));

			prop_assert_eq!(instance_label(instance), raw.to_string());
		}
	}
}
