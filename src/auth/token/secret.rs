//! Redacting wrapper for shared secrets.

// self
use crate::_prelude::*;

const REDACTED: &str = "<redacted>";

/// Consumer or token secret. Formatting never reveals the value; use [`expose`](Self::expose)
/// only where the raw string is needed for signing.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenSecret(String);
impl TokenSecret {
	/// Wraps `value`.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Raw secret.
	pub fn expose(&self) -> &str {
		&self.0
	}

	/// Length in bytes; the pending store charges this against its capacity.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Whether the secret is empty.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}
impl From<String> for TokenSecret {
	fn from(value: String) -> Self {
		Self(value)
	}
}
impl From<&str> for TokenSecret {
	fn from(value: &str) -> Self {
		Self(value.to_owned())
	}
}
impl Debug for TokenSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "TokenSecret({REDACTED})")
	}
}
impl Display for TokenSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(REDACTED)
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn formatting_hides_value() {
		let secret = TokenSecret::from("pfkkdhi9sl3r4s00");

		assert_eq!(format!("{secret:?}"), "TokenSecret(<redacted>)");
		assert_eq!(secret.to_string(), "<redacted>");
		assert_eq!(secret.expose(), "pfkkdhi9sl3r4s00");
		assert_eq!(secret.len(), 16);
	}

	#[test]
	fn serializes_as_plain_string() {
		let secret = TokenSecret::new("shh");

		assert_eq!(serde_json::to_string(&secret).expect("Secret should serialize."), "\"shh\"");
	}
}
