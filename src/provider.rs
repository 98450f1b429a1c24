//! Provider-facing descriptors.
//!
//! `descriptor` exposes validated metadata (`ProviderDescriptor`) covering the three OAuth 1.0a
//! endpoints and the callback the provider redirects back to once the user has authorized the
//! request token.

pub mod descriptor;

pub use descriptor::*;
