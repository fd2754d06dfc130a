// Copyright (c) Anuncios Team
// SPDX-License-Identifier: Apache-2.0

//! The in-progress wizard submission record.
//!
//! A [`Draft`] accumulates every field the multi-step wizard collects and is
//! the unit the draft store persists between page loads. Field names follow
//! the wizard's wire vocabulary (camelCase) so the slot file and the
//! multipart payload speak the same language.

use serde::{Deserialize, Serialize};

/// Maximum number of primary photos kept on a draft.
pub const PHOTOS_CAP: usize = 10;
/// Maximum number of gallery media items kept on a draft.
pub const GALLERY_CAP: usize = 10;
/// Maximum number of comparison media items kept on a draft.
pub const COMPARISON_CAP: usize = 5;

/// A file captured by the wizard before submission. Bytes are stored as
/// base64 text so the draft serializes to plain JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DraftFile {
    pub file_name: String,
    pub content_type: String,
    #[serde(with = "base64_bytes")]
    pub bytes: Vec<u8>,
}

/// One column of the pricing grid, all amounts string-encoded as the wizard
/// collects them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RateSet {
    pub fifteen_min: Option<String>,
    pub thirty_min: Option<String>,
    pub one_hour: String,
    pub two_hours: String,
    pub overnight: String,
}

/// The optional structured pricing block of a draft.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DraftPricing {
    pub show_pricing: bool,
    pub local: RateSet,
    pub travel: RateSet,
}

/// The full wizard record. Every field defaults so a partially filled draft
/// always deserializes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Draft {
    // Identity and location
    pub name: String,
    pub age: String,
    pub city: String,
    pub neighborhood: String,
    pub phone: String,
    pub description: String,

    // Personal and physical attributes, string-encoded as entered
    pub gender: String,
    pub orientation: String,
    pub nationality: String,
    pub ethnicity: String,
    pub height: String,
    pub weight: String,
    pub bust: String,
    pub waist: String,
    pub hips: String,
    pub dress_size: String,
    pub shoe_size: String,
    pub hair_color: String,
    pub hair_length: String,
    pub eye_color: String,
    pub tattoos: bool,
    pub piercings: bool,
    pub smoker: bool,

    // Contact channels
    pub contact_phone: bool,
    pub contact_sms: bool,
    pub contact_whatsapp: bool,

    // One URL per external platform
    pub onlyfans_url: String,
    pub instagram_url: String,
    pub twitter_url: String,
    pub tiktok_url: String,
    pub snapchat_url: String,
    pub telegram_url: String,
    pub whatsapp_business_url: String,
    pub manyvids_url: String,
    pub chaturbate_url: String,
    pub myfreecams_url: String,
    pub livejasmin_url: String,
    pub link_hub_url: String,

    // Service terms
    pub min_duration: String,
    pub advance_notice: String,
    pub regular_discount: String,
    pub availability: String,
    pub accepts_card: bool,

    // List fields
    pub languages: Vec<String>,
    pub personality_tags: Vec<String>,
    pub services: Vec<String>,

    pub pricing: DraftPricing,

    // Media collections; order is insertion order and meaningful
    // (primary photo = index 0)
    pub photos: Vec<DraftFile>,
    pub gallery_media: Vec<DraftFile>,
    pub comparison_media: Vec<DraftFile>,
    pub verification_photo: Option<DraftFile>,
    pub voice_note_file: Option<DraftFile>,
}

impl Draft {
    /// Append a primary photo, silently dropping it once the cap is reached.
    pub fn push_photo(&mut self, file: DraftFile) {
        if self.photos.len() < PHOTOS_CAP {
            self.photos.push(file);
        }
    }

    /// Append a gallery item, silently dropping it once the cap is reached.
    pub fn push_gallery(&mut self, file: DraftFile) {
        if self.gallery_media.len() < GALLERY_CAP {
            self.gallery_media.push(file);
        }
    }

    /// Append a comparison item, silently dropping it once the cap is reached.
    pub fn push_comparison(&mut self, file: DraftFile) {
        if self.comparison_media.len() < COMPARISON_CAP {
            self.comparison_media.push(file);
        }
    }

    /// Re-apply the collection caps, keeping the earliest entries. Called
    /// after merges and after loading a slot written by an older client.
    pub fn apply_caps(&mut self) {
        self.photos.truncate(PHOTOS_CAP);
        self.gallery_media.truncate(GALLERY_CAP);
        self.comparison_media.truncate(COMPARISON_CAP);
    }
}

mod base64_bytes {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let text = String::deserialize(deserializer)?;
        STANDARD.decode(text.as_bytes()).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str) -> DraftFile {
        DraftFile {
            file_name: name.to_string(),
            content_type: "image/jpeg".to_string(),
            bytes: vec![1, 2, 3],
        }
    }

    #[test]
    fn photo_cap_is_enforced_on_push() {
        let mut draft = Draft::default();
        for i in 0..PHOTOS_CAP + 5 {
            draft.push_photo(file(&format!("p{i}.jpg")));
        }
        assert_eq!(draft.photos.len(), PHOTOS_CAP);
        // Earliest entries win; the primary photo stays at index 0.
        assert_eq!(draft.photos[0].file_name, "p0.jpg");
    }

    #[test]
    fn comparison_cap_is_smaller() {
        let mut draft = Draft::default();
        for i in 0..10 {
            draft.push_comparison(file(&format!("c{i}.mp4")));
        }
        assert_eq!(draft.comparison_media.len(), COMPARISON_CAP);
    }

    #[test]
    fn apply_caps_truncates_oversized_collections() {
        let mut draft = Draft::default();
        draft.gallery_media = (0..14).map(|i| file(&format!("g{i}.jpg"))).collect();
        draft.apply_caps();
        assert_eq!(draft.gallery_media.len(), GALLERY_CAP);
        assert_eq!(draft.gallery_media[0].file_name, "g0.jpg");
    }

    #[test]
    fn draft_round_trips_through_json() {
        let mut draft = Draft::default();
        draft.name = "Ana".to_string();
        draft.languages = vec!["Português".to_string(), "English".to_string()];
        draft.pricing.show_pricing = true;
        draft.pricing.local.one_hour = "150".to_string();
        draft.verification_photo = Some(file("id.jpg"));

        let json = serde_json::to_string(&draft).unwrap();
        let back: Draft = serde_json::from_str(&json).unwrap();
        assert_eq!(back, draft);
    }

    #[test]
    fn file_bytes_persist_as_base64_text() {
        let json = serde_json::to_value(file("a.jpg")).unwrap();
        assert_eq!(json["bytes"], serde_json::json!("AQID"));
    }

    #[test]
    fn partial_json_fills_in_defaults() {
        let draft: Draft = serde_json::from_str(r#"{"name":"Ana","acceptsCard":true}"#).unwrap();
        assert_eq!(draft.name, "Ana");
        assert!(draft.accepts_card);
        assert!(draft.photos.is_empty());
        assert!(!draft.pricing.show_pricing);
    }
}
