// Copyright (c) Anuncios Team
// SPDX-License-Identifier: Apache-2.0

//! The single wire schema shared by the payload serializer and the ingestion
//! parser.
//!
//! Every multipart field is enumerated here exactly once with its key, wire
//! encoding and requiredness. Both sides walk this table, so the serializer
//! cannot emit a field the parser does not understand and vice versa.

/// How a field travels inside the multipart payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// A plain string part.
    Text,
    /// The literal string `"true"` or `"false"`.
    Bool,
    /// A single part containing JSON text.
    Json,
    /// At most one binary part.
    File,
    /// Repeated binary parts under the same key, order preserved.
    FileList,
}

#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub key: &'static str,
    pub encoding: Encoding,
    pub required: bool,
}

const fn text(key: &'static str) -> FieldSpec {
    FieldSpec { key, encoding: Encoding::Text, required: false }
}

const fn required_text(key: &'static str) -> FieldSpec {
    FieldSpec { key, encoding: Encoding::Text, required: true }
}

const fn boolean(key: &'static str) -> FieldSpec {
    FieldSpec { key, encoding: Encoding::Bool, required: false }
}

const fn json(key: &'static str) -> FieldSpec {
    FieldSpec { key, encoding: Encoding::Json, required: false }
}

const fn file(key: &'static str) -> FieldSpec {
    FieldSpec { key, encoding: Encoding::File, required: false }
}

const fn file_list(key: &'static str) -> FieldSpec {
    FieldSpec { key, encoding: Encoding::FileList, required: false }
}

/// Every field of the submission wire format, in serialization order.
pub const WIRE_FIELDS: &[FieldSpec] = &[
    // Identity and location
    required_text("name"),
    required_text("age"),
    required_text("city"),
    text("neighborhood"),
    required_text("phone"),
    required_text("description"),
    // Personal and physical attributes
    text("gender"),
    text("orientation"),
    text("nationality"),
    text("ethnicity"),
    text("height"),
    text("weight"),
    text("bust"),
    text("waist"),
    text("hips"),
    text("dressSize"),
    text("shoeSize"),
    text("hairColor"),
    text("hairLength"),
    text("eyeColor"),
    boolean("tattoos"),
    boolean("piercings"),
    boolean("smoker"),
    // Contact channels
    boolean("contactPhone"),
    boolean("contactSms"),
    boolean("contactWhatsapp"),
    // Per-platform URLs
    text("onlyfansUrl"),
    text("instagramUrl"),
    text("twitterUrl"),
    text("tiktokUrl"),
    text("snapchatUrl"),
    text("telegramUrl"),
    text("whatsappBusinessUrl"),
    text("manyvidsUrl"),
    text("chaturbateUrl"),
    text("myfreecamsUrl"),
    text("livejasminUrl"),
    text("linkHubUrl"),
    // Service terms
    text("minDuration"),
    text("advanceNotice"),
    text("regularDiscount"),
    text("availability"),
    boolean("acceptsCard"),
    // JSON-encoded list and record fields
    json("languages"),
    json("personalityTags"),
    json("services"),
    json("pricing"),
    // Media collections
    file_list("photos"),
    file_list("galleryMedia"),
    file_list("comparisonMedia"),
    file("verificationPhoto"),
    file("voiceNoteFile"),
];

/// Look up a field by wire key. Unknown keys are the caller's cue to ignore
/// the part.
pub fn lookup(key: &str) -> Option<&'static FieldSpec> {
    WIRE_FIELDS.iter().find(|spec| spec.key == key)
}

/// Keys of all required fields, in schema order.
pub fn required_keys() -> impl Iterator<Item = &'static str> {
    WIRE_FIELDS.iter().filter(|spec| spec.required).map(|spec| spec.key)
}
