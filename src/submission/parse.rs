// Copyright (c) Anuncios Team
// SPDX-License-Identifier: Apache-2.0

//! Multipart parts → typed submission.
//!
//! The parser is the exact inverse of the serializer for every field it
//! consumes, and deliberately tolerant: absent fields become empty strings,
//! empty lists or defaults, malformed JSON text becomes a default, and
//! unknown keys are ignored. The only rejection point is the required-field
//! gate in [`ParsedSubmission::validate`].

use serde::de::DeserializeOwned;
use tracing::warn;

use crate::submission::schema::{self, Encoding};
use crate::submission::serialize::{FilePart, Part, PartValue};
use crate::wizard::draft::DraftPricing;

/// A fully parsed submission, every field defaulted when absent.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ParsedSubmission {
    pub name: String,
    pub age: String,
    pub city: String,
    pub neighborhood: String,
    pub phone: String,
    pub description: String,

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

    pub contact_phone: bool,
    pub contact_sms: bool,
    pub contact_whatsapp: bool,

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

    pub min_duration: String,
    pub advance_notice: String,
    pub regular_discount: String,
    pub availability: String,
    pub accepts_card: bool,

    pub languages: Vec<String>,
    pub personality_tags: Vec<String>,
    pub services: Vec<String>,
    pub pricing: DraftPricing,

    pub photos: Vec<FilePart>,
    pub gallery_media: Vec<FilePart>,
    pub comparison_media: Vec<FilePart>,
    pub verification_photo: Option<FilePart>,
    pub voice_note_file: Option<FilePart>,
}

impl ParsedSubmission {
    /// Fold a part list into a typed submission. Never fails: anything that
    /// does not fit its declared encoding falls back to the field default.
    pub fn from_parts(parts: Vec<Part>) -> Self {
        let mut parsed = Self::default();

        for part in parts {
            let Some(spec) = schema::lookup(&part.key) else {
                warn!(key = %part.key, "Ignoring unknown submission field");
                continue;
            };

            match (spec.encoding, part.value) {
                (Encoding::Text, PartValue::Text(text)) => parsed.set_scalar(spec.key, text),
                (Encoding::Bool, PartValue::Text(text)) => {
                    parsed.set_bool(spec.key, text.trim() == "true")
                }
                (Encoding::Json, PartValue::Text(text)) => parsed.set_json(spec.key, &text),
                (Encoding::File, PartValue::File(file)) => parsed.set_file(spec.key, file),
                (Encoding::FileList, PartValue::File(file)) => parsed.push_file(spec.key, file),
                (_, _) => {
                    warn!(key = %spec.key, "Submission field arrived with the wrong part kind");
                }
            }
        }

        parsed
    }

    /// The required-field gate: `name`, `age`, `city`, `phone` and
    /// `description` must be non-empty after trimming, and `age` must parse
    /// as a whole number. Returns the parsed age.
    pub fn validate(&self) -> Result<i32, String> {
        for key in schema::required_keys() {
            let value = self
                .scalar(key)
                .unwrap_or_default();
            if value.trim().is_empty() {
                return Err(format!("Missing required field: {key}"));
            }
        }

        self.age
            .trim()
            .parse::<i32>()
            .map_err(|_| "Field 'age' must be a whole number".to_string())
    }

    fn scalar(&self, key: &str) -> Option<&str> {
        let value = match key {
            "name" => &self.name,
            "age" => &self.age,
            "city" => &self.city,
            "neighborhood" => &self.neighborhood,
            "phone" => &self.phone,
            "description" => &self.description,
            "gender" => &self.gender,
            "orientation" => &self.orientation,
            "nationality" => &self.nationality,
            "ethnicity" => &self.ethnicity,
            "height" => &self.height,
            "weight" => &self.weight,
            "bust" => &self.bust,
            "waist" => &self.waist,
            "hips" => &self.hips,
            "dressSize" => &self.dress_size,
            "shoeSize" => &self.shoe_size,
            "hairColor" => &self.hair_color,
            "hairLength" => &self.hair_length,
            "eyeColor" => &self.eye_color,
            "onlyfansUrl" => &self.onlyfans_url,
            "instagramUrl" => &self.instagram_url,
            "twitterUrl" => &self.twitter_url,
            "tiktokUrl" => &self.tiktok_url,
            "snapchatUrl" => &self.snapchat_url,
            "telegramUrl" => &self.telegram_url,
            "whatsappBusinessUrl" => &self.whatsapp_business_url,
            "manyvidsUrl" => &self.manyvids_url,
            "chaturbateUrl" => &self.chaturbate_url,
            "myfreecamsUrl" => &self.myfreecams_url,
            "livejasminUrl" => &self.livejasmin_url,
            "linkHubUrl" => &self.link_hub_url,
            "minDuration" => &self.min_duration,
            "advanceNotice" => &self.advance_notice,
            "regularDiscount" => &self.regular_discount,
            "availability" => &self.availability,
            _ => return None,
        };
        Some(value.as_str())
    }

    fn set_scalar(&mut self, key: &str, value: String) {
        let slot = match key {
            "name" => &mut self.name,
            "age" => &mut self.age,
            "city" => &mut self.city,
            "neighborhood" => &mut self.neighborhood,
            "phone" => &mut self.phone,
            "description" => &mut self.description,
            "gender" => &mut self.gender,
            "orientation" => &mut self.orientation,
            "nationality" => &mut self.nationality,
            "ethnicity" => &mut self.ethnicity,
            "height" => &mut self.height,
            "weight" => &mut self.weight,
            "bust" => &mut self.bust,
            "waist" => &mut self.waist,
            "hips" => &mut self.hips,
            "dressSize" => &mut self.dress_size,
            "shoeSize" => &mut self.shoe_size,
            "hairColor" => &mut self.hair_color,
            "hairLength" => &mut self.hair_length,
            "eyeColor" => &mut self.eye_color,
            "onlyfansUrl" => &mut self.onlyfans_url,
            "instagramUrl" => &mut self.instagram_url,
            "twitterUrl" => &mut self.twitter_url,
            "tiktokUrl" => &mut self.tiktok_url,
            "snapchatUrl" => &mut self.snapchat_url,
            "telegramUrl" => &mut self.telegram_url,
            "whatsappBusinessUrl" => &mut self.whatsapp_business_url,
            "manyvidsUrl" => &mut self.manyvids_url,
            "chaturbateUrl" => &mut self.chaturbate_url,
            "myfreecamsUrl" => &mut self.myfreecams_url,
            "livejasminUrl" => &mut self.livejasmin_url,
            "linkHubUrl" => &mut self.link_hub_url,
            "minDuration" => &mut self.min_duration,
            "advanceNotice" => &mut self.advance_notice,
            "regularDiscount" => &mut self.regular_discount,
            "availability" => &mut self.availability,
            _ => return,
        };
        *slot = value;
    }

    fn set_bool(&mut self, key: &str, value: bool) {
        let slot = match key {
            "tattoos" => &mut self.tattoos,
            "piercings" => &mut self.piercings,
            "smoker" => &mut self.smoker,
            "contactPhone" => &mut self.contact_phone,
            "contactSms" => &mut self.contact_sms,
            "contactWhatsapp" => &mut self.contact_whatsapp,
            "acceptsCard" => &mut self.accepts_card,
            _ => return,
        };
        *slot = value;
    }

    fn set_json(&mut self, key: &str, text: &str) {
        match key {
            "languages" => self.languages = json_or_default(key, text),
            "personalityTags" => self.personality_tags = json_or_default(key, text),
            "services" => self.services = json_or_default(key, text),
            "pricing" => self.pricing = json_or_default(key, text),
            _ => {}
        }
    }

    fn set_file(&mut self, key: &str, file: FilePart) {
        match key {
            "verificationPhoto" => self.verification_photo = Some(file),
            "voiceNoteFile" => self.voice_note_file = Some(file),
            _ => {}
        }
    }

    fn push_file(&mut self, key: &str, file: FilePart) {
        match key {
            "photos" => self.photos.push(file),
            "galleryMedia" => self.gallery_media.push(file),
            "comparisonMedia" => self.comparison_media.push(file),
            _ => {}
        }
    }
}

/// Parse JSON text, falling back to the default on any error. Empty text is
/// a normal absent value and is not logged.
fn json_or_default<T: DeserializeOwned + Default>(key: &str, text: &str) -> T {
    if text.trim().is_empty() {
        return T::default();
    }
    match serde_json::from_str(text) {
        Ok(value) => value,
        Err(e) => {
            warn!(key = %key, error = %e, "Malformed JSON field, using default");
            T::default()
        }
    }
}
