// Copyright (c) Anuncios Team
// SPDX-License-Identifier: Apache-2.0

//! Moderation hand-off for newly submitted listings.
//!
//! Every listing enters the queue as `PENDING`; an external moderation
//! service flips it to `ACTIVE` or `INACTIVE` later. The notifier is the
//! hook point for that service. Ingestion treats notification failures as
//! soft: they are logged and the submission still succeeds.

use async_trait::async_trait;
use tracing::info;

use crate::models::listing::Listing;

#[async_trait]
pub trait ModerationNotifier: Send + Sync {
    async fn listing_submitted(&self, listing: &Listing) -> anyhow::Result<()>;
}

/// Default notifier: records the hand-off in the log stream and nothing
/// else. Stands in until the moderation service integration lands.
pub struct LogNotifier;

#[async_trait]
impl ModerationNotifier for LogNotifier {
    async fn listing_submitted(&self, listing: &Listing) -> anyhow::Result<()> {
        info!(
            listing_id = listing.id,
            profile_id = listing.profile_id,
            status = %listing.status,
            "listing submitted for moderation"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[tokio::test]
    async fn log_notifier_always_succeeds() {
        let listing = Listing {
            id: 1,
            profile_id: 1,
            title: "Ana - Lisboa".to_string(),
            description: String::new(),
            city: "Lisboa".to_string(),
            age: 25,
            phone: "+351911111111".to_string(),
            services: String::new(),
            status: "PENDING".to_string(),
            price: 0,
            min_duration: None,
            advance_notice: None,
            regular_discount: None,
            accepts_card: false,
            created_at: Utc::now(),
        };

        assert!(LogNotifier.listing_submitted(&listing).await.is_ok());
    }
}
