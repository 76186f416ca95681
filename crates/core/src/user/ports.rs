//! Port interfaces for user profile lookup

use async_trait::async_trait;
use autocrm_domain::{Profile, Result};

/// Trait for reading the profiles table
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Profile row for an auth user, if one exists
    async fn get_profile(&self, user_id: &str) -> Result<Option<Profile>>;
}
