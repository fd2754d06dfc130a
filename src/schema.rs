// Copyright (c) Anuncios Team
// SPDX-License-Identifier: Apache-2.0

// Import diesel table macros
use diesel::table;
use diesel::allow_tables_to_appear_in_same_query;

// Define provider profile table
table! {
    profiles (id) {
        id -> Integer,
        user_id -> Varchar,
        name -> Varchar,
        age -> Integer,
        city -> Varchar,
        neighborhood -> Nullable<Varchar>,
        phone -> Varchar,
        description -> Text,
        gender -> Nullable<Varchar>,
        orientation -> Nullable<Varchar>,
        nationality -> Nullable<Varchar>,
        ethnicity -> Nullable<Varchar>,
        height -> Nullable<Varchar>,
        weight -> Nullable<Varchar>,
        bust -> Nullable<Varchar>,
        waist -> Nullable<Varchar>,
        hips -> Nullable<Varchar>,
        dress_size -> Nullable<Varchar>,
        shoe_size -> Nullable<Varchar>,
        hair_color -> Nullable<Varchar>,
        hair_length -> Nullable<Varchar>,
        eye_color -> Nullable<Varchar>,
        tattoos -> Bool,
        piercings -> Bool,
        smoker -> Bool,
        contact_phone -> Bool,
        contact_sms -> Bool,
        contact_whatsapp -> Bool,
        onlyfans_url -> Nullable<Varchar>,
        instagram_url -> Nullable<Varchar>,
        twitter_url -> Nullable<Varchar>,
        tiktok_url -> Nullable<Varchar>,
        snapchat_url -> Nullable<Varchar>,
        telegram_url -> Nullable<Varchar>,
        whatsapp_business_url -> Nullable<Varchar>,
        manyvids_url -> Nullable<Varchar>,
        chaturbate_url -> Nullable<Varchar>,
        myfreecams_url -> Nullable<Varchar>,
        livejasmin_url -> Nullable<Varchar>,
        link_hub_url -> Nullable<Varchar>,
        languages -> Nullable<Text>,
        personality_tags -> Nullable<Text>,
        availability -> Nullable<Varchar>,
        verification_photo_url -> Nullable<Varchar>,
        voice_note_url -> Nullable<Varchar>,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

// Define listings table
table! {
    listings (id) {
        id -> Integer,
        profile_id -> Integer,
        title -> Varchar,
        description -> Text,
        city -> Varchar,
        age -> Integer,
        phone -> Varchar,
        services -> Text,
        status -> Varchar,
        price -> Integer,
        min_duration -> Nullable<Varchar>,
        advance_notice -> Nullable<Varchar>,
        regular_discount -> Nullable<Varchar>,
        accepts_card -> Bool,
        created_at -> Timestamptz,
    }
}

// Define media metadata table
table! {
    media (id) {
        id -> Integer,
        url -> Varchar,
        media_type -> Varchar,
        listing_id -> Integer,
        profile_id -> Integer,
        slot -> Varchar,
        position -> Integer,
        created_at -> Timestamptz,
    }
}

// Define listing gallery table
table! {
    images (id) {
        id -> Integer,
        url -> Varchar,
        listing_id -> Integer,
        position -> Integer,
        created_at -> Timestamptz,
    }
}

// Allow joining the tables if needed
allow_tables_to_appear_in_same_query!(
    profiles,
    listings,
    media,
    images,
);
