// Copyright (c) Anuncios Team
// SPDX-License-Identifier: Apache-2.0

//! Draft → multipart payload serialization.
//!
//! The serializer walks [`WIRE_FIELDS`] and emits one ordered part list:
//! scalars as strings, booleans as `"true"`/`"false"`, list and record
//! fields as embedded JSON text, and files as one binary part per file with
//! repeated keys. Optional files left unset are omitted entirely. The
//! ingestion parser consumes the same part model, so the mapping round-trips.

use serde::Serialize;

use crate::submission::schema::{Encoding, WIRE_FIELDS};
use crate::wizard::draft::{Draft, DraftFile};

/// One binary part of the payload.
#[derive(Debug, Clone, PartialEq)]
pub struct FilePart {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl From<&DraftFile> for FilePart {
    fn from(file: &DraftFile) -> Self {
        Self {
            file_name: file.file_name.clone(),
            content_type: file.content_type.clone(),
            bytes: file.bytes.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PartValue {
    Text(String),
    File(FilePart),
}

/// One `key=value` part. Keys repeat for file lists.
#[derive(Debug, Clone, PartialEq)]
pub struct Part {
    pub key: String,
    pub value: PartValue,
}

impl Part {
    pub fn text(key: &str, value: impl Into<String>) -> Self {
        Self { key: key.to_string(), value: PartValue::Text(value.into()) }
    }

    pub fn file(key: &str, file: FilePart) -> Self {
        Self { key: key.to_string(), value: PartValue::File(file) }
    }
}

/// The serialized submission, parts in schema order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultipartPayload {
    pub parts: Vec<Part>,
}

/// Flatten a draft into its multipart payload.
pub fn serialize_draft(draft: &Draft) -> MultipartPayload {
    let mut parts = Vec::new();

    for spec in WIRE_FIELDS {
        match spec.encoding {
            Encoding::Text => {
                parts.push(Part::text(spec.key, scalar_value(draft, spec.key)));
            }
            Encoding::Bool => {
                let value = if bool_value(draft, spec.key) { "true" } else { "false" };
                parts.push(Part::text(spec.key, value));
            }
            Encoding::Json => {
                parts.push(Part::text(spec.key, json_value(draft, spec.key)));
            }
            Encoding::File => {
                if let Some(file) = single_file(draft, spec.key) {
                    parts.push(Part::file(spec.key, FilePart::from(file)));
                }
            }
            Encoding::FileList => {
                for file in file_list(draft, spec.key) {
                    parts.push(Part::file(spec.key, FilePart::from(file)));
                }
            }
        }
    }

    MultipartPayload { parts }
}

fn scalar_value(draft: &Draft, key: &str) -> String {
    let value = match key {
        "name" => &draft.name,
        "age" => &draft.age,
        "city" => &draft.city,
        "neighborhood" => &draft.neighborhood,
        "phone" => &draft.phone,
        "description" => &draft.description,
        "gender" => &draft.gender,
        "orientation" => &draft.orientation,
        "nationality" => &draft.nationality,
        "ethnicity" => &draft.ethnicity,
        "height" => &draft.height,
        "weight" => &draft.weight,
        "bust" => &draft.bust,
        "waist" => &draft.waist,
        "hips" => &draft.hips,
        "dressSize" => &draft.dress_size,
        "shoeSize" => &draft.shoe_size,
        "hairColor" => &draft.hair_color,
        "hairLength" => &draft.hair_length,
        "eyeColor" => &draft.eye_color,
        "onlyfansUrl" => &draft.onlyfans_url,
        "instagramUrl" => &draft.instagram_url,
        "twitterUrl" => &draft.twitter_url,
        "tiktokUrl" => &draft.tiktok_url,
        "snapchatUrl" => &draft.snapchat_url,
        "telegramUrl" => &draft.telegram_url,
        "whatsappBusinessUrl" => &draft.whatsapp_business_url,
        "manyvidsUrl" => &draft.manyvids_url,
        "chaturbateUrl" => &draft.chaturbate_url,
        "myfreecamsUrl" => &draft.myfreecams_url,
        "livejasminUrl" => &draft.livejasmin_url,
        "linkHubUrl" => &draft.link_hub_url,
        "minDuration" => &draft.min_duration,
        "advanceNotice" => &draft.advance_notice,
        "regularDiscount" => &draft.regular_discount,
        "availability" => &draft.availability,
        _ => unreachable!("unmapped text field {key}"),
    };
    value.clone()
}

fn bool_value(draft: &Draft, key: &str) -> bool {
    match key {
        "tattoos" => draft.tattoos,
        "piercings" => draft.piercings,
        "smoker" => draft.smoker,
        "contactPhone" => draft.contact_phone,
        "contactSms" => draft.contact_sms,
        "contactWhatsapp" => draft.contact_whatsapp,
        "acceptsCard" => draft.accepts_card,
        _ => unreachable!("unmapped bool field {key}"),
    }
}

fn json_value(draft: &Draft, key: &str) -> String {
    fn encode<T: Serialize>(value: &T) -> String {
        serde_json::to_string(value).unwrap_or_else(|_| "null".to_string())
    }

    match key {
        "languages" => encode(&draft.languages),
        "personalityTags" => encode(&draft.personality_tags),
        "services" => encode(&draft.services),
        "pricing" => encode(&draft.pricing),
        _ => unreachable!("unmapped json field {key}"),
    }
}

fn single_file<'a>(draft: &'a Draft, key: &str) -> Option<&'a DraftFile> {
    match key {
        "verificationPhoto" => draft.verification_photo.as_ref(),
        "voiceNoteFile" => draft.voice_note_file.as_ref(),
        _ => unreachable!("unmapped file field {key}"),
    }
}

fn file_list<'a>(draft: &'a Draft, key: &str) -> &'a [DraftFile] {
    match key {
        "photos" => &draft.photos,
        "galleryMedia" => &draft.gallery_media,
        "comparisonMedia" => &draft.comparison_media,
        _ => unreachable!("unmapped file list field {key}"),
    }
}
