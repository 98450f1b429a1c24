//! Auth-domain identifiers, consumer credentials, and token pairs.

pub mod credentials;
pub mod id;
pub mod token;

pub use credentials::*;
pub use id::*;
pub use token::{pair::*, secret::*};
