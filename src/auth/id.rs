//! Provider identifiers.

// self
use crate::_prelude::*;

/// Longest accepted identifier, in bytes.
pub const PROVIDER_ID_MAX_LEN: usize = 64;

/// Reasons a string cannot be a [`ProviderId`].
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum IdentifierError {
	/// Nothing was supplied.
	#[error("Provider identifier cannot be empty.")]
	Empty,
	/// Only ASCII letters, digits, `-`, `_` and `.` are accepted.
	#[error("Provider identifier contains disallowed character {found:?}.")]
	InvalidCharacter {
		/// First rejected character.
		found: char,
	},
	/// Longer than [`PROVIDER_ID_MAX_LEN`].
	#[error("Provider identifier is {len} bytes; the limit is {max}.", max = PROVIDER_ID_MAX_LEN)]
	TooLong {
		/// Length of the rejected value.
		len: usize,
	},
}

/// Short slug naming a provider (`twitter`, `tumblr`, `smugmug`).
///
/// It labels spans and metrics, so it is restricted to a log-safe alphabet.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProviderId(String);
impl ProviderId {
	/// Validates `value` and wraps it.
	pub fn new(value: impl Into<String>) -> Result<Self, IdentifierError> {
		let value = value.into();

		if value.is_empty() {
			return Err(IdentifierError::Empty);
		}
		if value.len() > PROVIDER_ID_MAX_LEN {
			return Err(IdentifierError::TooLong { len: value.len() });
		}
		if let Some(found) =
			value.chars().find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')))
		{
			return Err(IdentifierError::InvalidCharacter { found });
		}

		Ok(Self(value))
	}

	/// Borrowed view of the slug.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}
impl AsRef<str> for ProviderId {
	fn as_ref(&self) -> &str {
		self.as_str()
	}
}
impl From<ProviderId> for String {
	fn from(value: ProviderId) -> Self {
		value.0
	}
}
impl TryFrom<String> for ProviderId {
	type Error = IdentifierError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		Self::new(value)
	}
}
impl FromStr for ProviderId {
	type Err = IdentifierError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::new(s)
	}
}
impl Display for ProviderId {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.0)
	}
}
