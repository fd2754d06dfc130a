// Copyright (c) Anuncios Team
// SPDX-License-Identifier: Apache-2.0

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// Model for a stored media asset
#[derive(Debug, Queryable, Selectable, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::media)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[serde(rename_all = "camelCase")]
pub struct Media {
    pub id: i32,
    pub url: String,
    pub media_type: String,
    pub listing_id: i32,
    pub profile_id: i32,
    pub slot: String,
    pub position: i32,
    pub created_at: DateTime<Utc>,
}

/// DTO for recording a stored media asset
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::media)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewMedia {
    pub url: String,
    pub media_type: String,
    pub listing_id: i32,
    pub profile_id: i32,
    pub slot: String,
    pub position: i32,
}

/// Model for a listing gallery row
#[derive(Debug, Queryable, Selectable, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::images)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[serde(rename_all = "camelCase")]
pub struct Image {
    pub id: i32,
    pub url: String,
    pub listing_id: i32,
    pub position: i32,
    pub created_at: DateTime<Utc>,
}

/// DTO for recording a listing gallery row
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::images)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewImage {
    pub url: String,
    pub listing_id: i32,
    pub position: i32,
}
