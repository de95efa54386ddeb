pub mod client;
pub mod models;
pub mod profiles;

pub use client::InstagramClient;
pub use models::{ProfileRecord, ProfileSource, PublicSource};

use crate::error::LookupError;

/// The profile-lookup capability. The live implementation is
/// `InstagramClient`; tests substitute scripted doubles.
#[allow(async_fn_in_trait)]
pub trait ProfileLookup {
    async fn profile(&self, username: &str) -> Result<ProfileSource, LookupError>;

    /// Reduced lookup covering only the fields visible on any profile. Used
    /// as the best-effort fallback when the full lookup is access-gated.
    async fn public_profile(&self, username: &str) -> Result<PublicSource, LookupError>;
}
