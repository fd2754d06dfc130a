// Copyright (c) Anuncios Team
// SPDX-License-Identifier: Apache-2.0

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// Listing status as stored in the `status` column. Every new submission
/// starts out pending moderation.
pub const STATUS_PENDING: &str = "PENDING";

/// Model for a published listing
#[derive(Debug, Queryable, Selectable, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::listings)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: i32,
    pub profile_id: i32,
    pub title: String,
    pub description: String,
    pub city: String,
    pub age: i32,
    pub phone: String,
    pub services: String,
    pub status: String,
    pub price: i32,
    pub min_duration: Option<String>,
    pub advance_notice: Option<String>,
    pub regular_discount: Option<String>,
    pub accepts_card: bool,
    pub created_at: DateTime<Utc>,
}

/// DTO for creating a new listing
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::listings)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewListing {
    pub profile_id: i32,
    pub title: String,
    pub description: String,
    pub city: String,
    pub age: i32,
    pub phone: String,
    pub services: String,
    pub status: String,
    pub price: i32,
    pub min_duration: Option<String>,
    pub advance_notice: Option<String>,
    pub regular_discount: Option<String>,
    pub accepts_card: bool,
}
