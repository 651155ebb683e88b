use {
	crate::SteamId,
	serde::{
		de::{self, Deserialize, Deserializer},
		ser::{Serialize, Serializer},
	},
	std::fmt,
};

impl Serialize for SteamId
{
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		self.serialize_u64(serializer)
	}
}

impl<'de> Deserialize<'de> for SteamId
{
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		struct CatchallVisitor;

		impl de::Visitor<'_> for CatchallVisitor
		{
			type Value = SteamId;

			fn expecting(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result
			{
				fmt.write_str("a SteamID")
			}

			fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
			where
				E: de::Error,
			{
				Ok(SteamId::from_u64(value))
			}

			fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
			where
				E: de::Error,
			{
				value.parse::<SteamId>().map_err(E::custom)
			}
		}

		deserializer.deserialize_any(CatchallVisitor)
	}
}

impl SteamId
{
	/// Serializes using the SteamID64 format.
	pub fn serialize_u64<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		self.as_u64().serialize(serializer)
	}

	/// Deserializes a stringified SteamID64, as returned by the Steam Web API.
	pub fn deserialize_u64_stringified<'de, D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		struct StringifiedVisitor;

		impl de::Visitor<'_> for StringifiedVisitor
		{
			type Value = SteamId;

			fn expecting(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result
			{
				fmt.write_str("a stringified SteamID64")
			}

			fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
			where
				E: de::Error,
			{
				value.parse::<u64>().map(SteamId::from_u64).map_err(E::custom)
			}
		}

		deserializer.deserialize_str(StringifiedVisitor)
	}
}

#[cfg(test)]
mod tests
{
	use super::*;

	#[derive(Debug, serde::Deserialize)]
	struct Payload
	{
		#[serde(deserialize_with = "SteamId::deserialize_u64_stringified")]
		steamid: SteamId,
	}

	#[test]
	fn deserializes_every_format()
	{
		let expected = SteamId::from_u64(76561197960287930);

		for input in [
			"76561197960287930",
			r#""76561197960287930""#,
			r#""STEAM_0:0:11101""#,
			r#""[U:1:22202]""#,
		] {
			let parsed = serde_json::from_str::<SteamId>(input);
			assert_eq!(parsed.ok(), Some(expected), "{input}");
		}
	}

	#[test]
	fn deserializes_stringified_u64()
	{
		let payload =
			serde_json::from_str::<Payload>(r#"{ "steamid": "76561197960287930" }"#).map(|payload| payload.steamid);

		assert_eq!(payload.ok(), Some(SteamId::from_u64(76561197960287930)));
		assert!(serde_json::from_str::<Payload>(r#"{ "steamid": "gaben" }"#).is_err());
	}

	#[test]
	fn serializes_as_u64()
	{
		let json = serde_json::to_string(&SteamId::from_u64(76561197960287930));

		assert_eq!(json.ok().as_deref(), Some("76561197960287930"));
	}
}
