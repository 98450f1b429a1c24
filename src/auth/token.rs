//! Token pairs issued by the provider and the secret wrapper they share.

pub mod pair;
pub mod secret;
