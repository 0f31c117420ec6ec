//! Account endpoints

use serde::Serialize;
use uuid::Uuid;

use super::{ApiClient, ApiError};
use crate::types::Profile;

impl ApiClient {
    /// Fetch the profile of the given user.
    pub async fn fetch_profile(&self, user_id: Uuid) -> Result<Profile, ApiError> {
        self.get(&format!("/users/{}/profile", user_id)).await
    }

    /// Update the display name shown on bids and listings.
    pub async fn update_display_name(
        &self,
        user_id: Uuid,
        display_name: &str,
    ) -> Result<Profile, ApiError> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Body<'a> {
            display_name: &'a str,
        }

        self.post(
            &format!("/users/{}/profile", user_id),
            &Body { display_name },
        )
        .await
    }
}
