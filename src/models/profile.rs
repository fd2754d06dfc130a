// Copyright (c) Anuncios Team
// SPDX-License-Identifier: Apache-2.0

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// Model for a provider profile
#[derive(Debug, Queryable, Selectable, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::profiles)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: i32,
    pub user_id: String,
    pub name: String,
    pub age: i32,
    pub city: String,
    pub neighborhood: Option<String>,
    pub phone: String,
    pub description: String,
    pub gender: Option<String>,
    pub orientation: Option<String>,
    pub nationality: Option<String>,
    pub ethnicity: Option<String>,
    pub height: Option<String>,
    pub weight: Option<String>,
    pub bust: Option<String>,
    pub waist: Option<String>,
    pub hips: Option<String>,
    pub dress_size: Option<String>,
    pub shoe_size: Option<String>,
    pub hair_color: Option<String>,
    pub hair_length: Option<String>,
    pub eye_color: Option<String>,
    pub tattoos: bool,
    pub piercings: bool,
    pub smoker: bool,
    pub contact_phone: bool,
    pub contact_sms: bool,
    pub contact_whatsapp: bool,
    pub onlyfans_url: Option<String>,
    pub instagram_url: Option<String>,
    pub twitter_url: Option<String>,
    pub tiktok_url: Option<String>,
    pub snapchat_url: Option<String>,
    pub telegram_url: Option<String>,
    pub whatsapp_business_url: Option<String>,
    pub manyvids_url: Option<String>,
    pub chaturbate_url: Option<String>,
    pub myfreecams_url: Option<String>,
    pub livejasmin_url: Option<String>,
    pub link_hub_url: Option<String>,
    // JSON-or-CSV encoded list fields, decoded at read time
    pub languages: Option<String>,
    pub personality_tags: Option<String>,
    pub availability: Option<String>,
    pub verification_photo_url: Option<String>,
    pub voice_note_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// DTO for inserting or fully overwriting a profile. `treat_none_as_null`
/// makes the upsert clear columns the new submission left empty.
#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::profiles)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[diesel(treat_none_as_null = true)]
pub struct NewProfile {
    pub user_id: String,
    pub name: String,
    pub age: i32,
    pub city: String,
    pub neighborhood: Option<String>,
    pub phone: String,
    pub description: String,
    pub gender: Option<String>,
    pub orientation: Option<String>,
    pub nationality: Option<String>,
    pub ethnicity: Option<String>,
    pub height: Option<String>,
    pub weight: Option<String>,
    pub bust: Option<String>,
    pub waist: Option<String>,
    pub hips: Option<String>,
    pub dress_size: Option<String>,
    pub shoe_size: Option<String>,
    pub hair_color: Option<String>,
    pub hair_length: Option<String>,
    pub eye_color: Option<String>,
    pub tattoos: bool,
    pub piercings: bool,
    pub smoker: bool,
    pub contact_phone: bool,
    pub contact_sms: bool,
    pub contact_whatsapp: bool,
    pub onlyfans_url: Option<String>,
    pub instagram_url: Option<String>,
    pub twitter_url: Option<String>,
    pub tiktok_url: Option<String>,
    pub snapchat_url: Option<String>,
    pub telegram_url: Option<String>,
    pub whatsapp_business_url: Option<String>,
    pub manyvids_url: Option<String>,
    pub chaturbate_url: Option<String>,
    pub myfreecams_url: Option<String>,
    pub livejasmin_url: Option<String>,
    pub link_hub_url: Option<String>,
    pub languages: Option<String>,
    pub personality_tags: Option<String>,
    pub availability: Option<String>,
    pub verification_photo_url: Option<String>,
    pub voice_note_url: Option<String>,
    pub updated_at: DateTime<Utc>,
}
