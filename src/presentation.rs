// Copyright (c) Anuncios Team
// SPDX-License-Identifier: Apache-2.0

//! Reconstruction of the public presentation model.
//!
//! Listings persist partly unstructured data: list fields as JSON-or-CSV
//! text, social links as one column per platform, and pricing rates encoded
//! as fixed phrases inside the free-text description. The mapper rebuilds a
//! typed model from whatever is stored. It is pure and total: malformed or
//! missing data resolves to empty defaults, never an error.
//!
//! The phrase-based pricing encoding is legacy and inherently fragile; it is
//! isolated here so a structured pricing column can replace it without
//! touching callers.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::media_store::MEDIA_TYPE_VIDEO;
use crate::models::listing::Listing;
use crate::models::media::Media;
use crate::models::profile::Profile;
use crate::platform::{classify_link_hub, SOCIAL_PLATFORM_ORDER};

/// One social link entry. For the link-hub slot the platform label is the
/// classified provider name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
}

/// One recovered service-duration price point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricingRate {
    pub duration: String,
    pub price: i32,
    pub currency: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingInfo {
    pub local_rates: Vec<PricingRate>,
    pub outcall_rates: Vec<PricingRate>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhysicalAttributes {
    pub height: Option<i32>,
    pub weight: Option<i32>,
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
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContactChannels {
    pub phone: bool,
    pub sms: bool,
    pub whatsapp: bool,
}

/// One attached media entry, classified.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaItem {
    pub url: String,
    pub media_type: String,
}

/// The normalized public view of a listing and its owning profile.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingPresentation {
    pub id: i32,
    pub title: String,
    pub status: String,
    pub description: String,
    pub city: String,
    pub neighborhood: Option<String>,
    pub age: i32,
    pub phone: String,
    pub gender: Option<String>,
    pub orientation: Option<String>,
    pub nationality: Option<String>,
    pub ethnicity: Option<String>,
    pub services: Vec<String>,
    pub languages: Vec<String>,
    pub personality_tags: Vec<String>,
    pub physical: PhysicalAttributes,
    pub contact: ContactChannels,
    pub availability: Option<String>,
    pub socials: Vec<SocialLink>,
    pub pricing: PricingInfo,
    pub gallery: Vec<MediaItem>,
    pub comparison_media: Vec<MediaItem>,
    pub accepts_card: bool,
    pub min_duration: Option<String>,
    pub advance_notice: Option<String>,
    pub regular_discount: Option<String>,
}

/// Rebuild the presentation model from persisted rows.
pub fn reconstruct(listing: &Listing, profile: &Profile, media: &[Media]) -> ListingPresentation {
    let (pricing, description) = extract_pricing(&listing.description, listing.price);
    let (gallery, comparison_media) = split_media(media);

    ListingPresentation {
        id: listing.id,
        title: listing.title.clone(),
        status: listing.status.clone(),
        description,
        city: listing.city.clone(),
        neighborhood: non_empty(&profile.neighborhood),
        age: listing.age,
        phone: listing.phone.clone(),
        gender: non_empty(&profile.gender),
        orientation: non_empty(&profile.orientation),
        nationality: non_empty(&profile.nationality),
        ethnicity: non_empty(&profile.ethnicity),
        services: decode_list_field(Some(listing.services.as_str())),
        languages: decode_list_field(profile.languages.as_deref()),
        personality_tags: decode_list_field(profile.personality_tags.as_deref()),
        physical: PhysicalAttributes {
            height: leading_number(&profile.height),
            weight: leading_number(&profile.weight),
            bust: non_empty(&profile.bust),
            waist: non_empty(&profile.waist),
            hips: non_empty(&profile.hips),
            dress_size: non_empty(&profile.dress_size),
            shoe_size: non_empty(&profile.shoe_size),
            hair_color: non_empty(&profile.hair_color),
            hair_length: non_empty(&profile.hair_length),
            eye_color: non_empty(&profile.eye_color),
            tattoos: profile.tattoos,
            piercings: profile.piercings,
            smoker: profile.smoker,
        },
        contact: ContactChannels {
            phone: profile.contact_phone,
            sms: profile.contact_sms,
            whatsapp: profile.contact_whatsapp,
        },
        availability: non_empty(&profile.availability),
        socials: assemble_socials(profile),
        pricing,
        gallery,
        comparison_media,
        accepts_card: listing.accepts_card,
        min_duration: non_empty(&listing.min_duration),
        advance_notice: non_empty(&listing.advance_notice),
        regular_discount: non_empty(&listing.regular_discount),
    }
}

/// Decode a JSON-or-CSV encoded list field. Text starting with `[` is parsed
/// as a JSON string array; anything else is split on commas and trimmed. A
/// parse error yields an empty list.
pub fn decode_list_field(text: Option<&str>) -> Vec<String> {
    let Some(text) = text else {
        return Vec::new();
    };
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    if trimmed.starts_with('[') {
        serde_json::from_str::<Vec<String>>(trimmed).unwrap_or_default()
    } else {
        trimmed
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Build the social links list in the fixed platform order, skipping empty
/// URL fields.
fn assemble_socials(profile: &Profile) -> Vec<SocialLink> {
    let mut socials = Vec::new();

    for platform in SOCIAL_PLATFORM_ORDER {
        let url = match platform {
            "onlyfans" => &profile.onlyfans_url,
            "instagram" => &profile.instagram_url,
            "twitter" => &profile.twitter_url,
            "tiktok" => &profile.tiktok_url,
            "snapchat" => &profile.snapchat_url,
            "telegram" => &profile.telegram_url,
            "whatsapp-business" => &profile.whatsapp_business_url,
            "manyvids" => &profile.manyvids_url,
            "chaturbate" => &profile.chaturbate_url,
            "myfreecams" => &profile.myfreecams_url,
            "livejasmin" => &profile.livejasmin_url,
            "link-hub" => &profile.link_hub_url,
            _ => &None,
        };

        if let Some(url) = non_empty(url) {
            let label = if platform == "link-hub" {
                classify_link_hub(&url).to_string()
            } else {
                platform.to_string()
            };
            socials.push(SocialLink { platform: label, url });
        }
    }

    socials
}

// --- Pricing extraction ----------------------------------------------------

static SUMMARY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)(local|deslocação)\s*:\s*1h\s*€\s*(\d+|N/A)\s*,\s*2h\s*€\s*(\d+|N/A)\s*,\s*pernoite\s*€\s*(\d+|N/A)",
    )
    .expect("valid summary pattern")
});

static SHORT_RATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(local|deslocação)\s+(15|30)min\s*:\s*€\s*(\d+)").expect("valid short-rate pattern")
});

static PRICING_LABEL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?im)^[ \t]*(?:preços|precos|preçário|precario|valores|tarifas)\s*:?[ \t]*$")
        .expect("valid label pattern")
});

static BLANK_RUN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:\n[ \t]*){3,}").expect("valid blank-run pattern"));

/// Recover structured pricing rates from a description and strip the matched
/// phrases from the text shown to users.
///
/// When the description carries no recognizable pricing but the listing has
/// a nonzero flat price, a single one-hour local rate is synthesized from it.
fn extract_pricing(description: &str, flat_price: i32) -> (PricingInfo, String) {
    let mut pricing = PricingInfo::default();

    for caps in SHORT_RATE_RE.captures_iter(description) {
        let rates = target_rates(&mut pricing, &caps[1]);
        if let Ok(price) = caps[3].parse::<i32>() {
            rates.push(rate(format!("{}min", &caps[2]), price));
        }
    }

    for caps in SUMMARY_RE.captures_iter(description) {
        let rates = target_rates(&mut pricing, &caps[1]);
        push_amount(rates, "1h", &caps[2]);
        push_amount(rates, "2h", &caps[3]);
        push_amount(rates, "pernoite", &caps[4]);
    }

    if pricing.local_rates.is_empty() && pricing.outcall_rates.is_empty() && flat_price > 0 {
        pricing.local_rates.push(rate("1h".to_string(), flat_price));
    }

    (pricing, strip_pricing(description))
}

fn target_rates<'a>(pricing: &'a mut PricingInfo, label: &str) -> &'a mut Vec<PricingRate> {
    if label.to_lowercase() == "local" {
        &mut pricing.local_rates
    } else {
        &mut pricing.outcall_rates
    }
}

fn push_amount(rates: &mut Vec<PricingRate>, duration: &str, amount: &str) {
    // `N/A` slots carry no rate.
    if let Ok(price) = amount.parse::<i32>() {
        rates.push(rate(duration.to_string(), price));
    }
}

fn rate(duration: String, price: i32) -> PricingRate {
    PricingRate {
        duration,
        price,
        currency: "€".to_string(),
    }
}

/// Remove pricing phrases and label lines, then collapse the leftover blank
/// space to at most one blank line.
fn strip_pricing(description: &str) -> String {
    let text = SUMMARY_RE.replace_all(description, "");
    let text = SHORT_RATE_RE.replace_all(&text, "");
    let text = PRICING_LABEL_RE.replace_all(&text, "");
    let text = BLANK_RUN_RE.replace_all(&text, "\n\n");
    text.trim().to_string()
}

// --- Helpers ---------------------------------------------------------------

fn split_media(media: &[Media]) -> (Vec<MediaItem>, Vec<MediaItem>) {
    let mut gallery = Vec::new();
    let mut comparison = Vec::new();

    for row in media {
        let item = MediaItem {
            url: row.url.clone(),
            media_type: row.media_type.clone(),
        };
        if row.media_type == MEDIA_TYPE_VIDEO {
            comparison.push(item);
        } else {
            gallery.push(item);
        }
    }

    (gallery, comparison)
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn leading_number(value: &Option<String>) -> Option<i32> {
    let digits: String = value
        .as_deref()
        .unwrap_or_default()
        .trim()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::submission::pricing::{append_pricing, pricing_summary};
    use crate::wizard::draft::{DraftPricing, RateSet};
    use chrono::Utc;

    fn blank_profile() -> Profile {
        Profile {
            id: 1,
            user_id: "user-1".to_string(),
            name: "Ana".to_string(),
            age: 25,
            city: "Lisboa".to_string(),
            neighborhood: None,
            phone: "+351911111111".to_string(),
            description: "Olá".to_string(),
            gender: None,
            orientation: None,
            nationality: None,
            ethnicity: None,
            height: None,
            weight: None,
            bust: None,
            waist: None,
            hips: None,
            dress_size: None,
            shoe_size: None,
            hair_color: None,
            hair_length: None,
            eye_color: None,
            tattoos: false,
            piercings: false,
            smoker: false,
            contact_phone: false,
            contact_sms: false,
            contact_whatsapp: false,
            onlyfans_url: None,
            instagram_url: None,
            twitter_url: None,
            tiktok_url: None,
            snapchat_url: None,
            telegram_url: None,
            whatsapp_business_url: None,
            manyvids_url: None,
            chaturbate_url: None,
            myfreecams_url: None,
            livejasmin_url: None,
            link_hub_url: None,
            languages: None,
            personality_tags: None,
            availability: None,
            verification_photo_url: None,
            voice_note_url: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn blank_listing() -> Listing {
        Listing {
            id: 10,
            profile_id: 1,
            title: "Ana - Lisboa".to_string(),
            description: "Olá".to_string(),
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
        }
    }

    fn media_row(id: i32, url: &str, media_type: &str) -> Media {
        Media {
            id,
            url: url.to_string(),
            media_type: media_type.to_string(),
            listing_id: 10,
            profile_id: 1,
            slot: "gallery".to_string(),
            position: id,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn list_decode_handles_json_csv_and_garbage() {
        assert_eq!(
            decode_list_field(Some(r#"["Português","English"]"#)),
            vec!["Português".to_string(), "English".to_string()]
        );
        assert_eq!(
            decode_list_field(Some("massagem, companhia ,")),
            vec!["massagem".to_string(), "companhia".to_string()]
        );
        assert_eq!(decode_list_field(Some("[broken json")), Vec::<String>::new());
        assert_eq!(decode_list_field(Some("   ")), Vec::<String>::new());
        assert_eq!(decode_list_field(None), Vec::<String>::new());
    }

    #[test]
    fn malformed_languages_yield_empty_not_error() {
        let mut profile = blank_profile();
        profile.languages = Some("[not valid".to_string());

        let view = reconstruct(&blank_listing(), &profile, &[]);
        assert!(view.languages.is_empty());
    }

    #[test]
    fn socials_follow_the_fixed_platform_order() {
        let mut profile = blank_profile();
        profile.twitter_url = Some("https://twitter.com/ana".to_string());
        profile.onlyfans_url = Some("https://onlyfans.com/ana".to_string());
        profile.link_hub_url = Some("https://linktr.ee/ana".to_string());
        profile.snapchat_url = Some("   ".to_string());

        let view = reconstruct(&blank_listing(), &profile, &[]);
        let platforms: Vec<&str> = view.socials.iter().map(|s| s.platform.as_str()).collect();
        assert_eq!(platforms, vec!["onlyfans", "twitter", "Linktree"]);
    }

    #[test]
    fn pricing_grammar_round_trips_through_extraction() {
        let pricing = DraftPricing {
            show_pricing: true,
            local: RateSet {
                fifteen_min: Some("50".to_string()),
                thirty_min: None,
                one_hour: "150".to_string(),
                two_hours: "280".to_string(),
                overnight: "800".to_string(),
            },
            travel: RateSet {
                fifteen_min: None,
                thirty_min: None,
                one_hour: "200".to_string(),
                two_hours: "350".to_string(),
                overnight: "1000".to_string(),
            },
        };

        let mut listing = blank_listing();
        listing.description = append_pricing("Olá, sou a Ana.", &pricing);
        listing.price = 150;

        let view = reconstruct(&listing, &blank_profile(), &[]);

        let local: Vec<(&str, i32)> = view
            .pricing
            .local_rates
            .iter()
            .map(|r| (r.duration.as_str(), r.price))
            .collect();
        assert_eq!(local, vec![("15min", 50), ("1h", 150), ("2h", 280), ("pernoite", 800)]);

        let outcall: Vec<(&str, i32)> = view
            .pricing
            .outcall_rates
            .iter()
            .map(|r| (r.duration.as_str(), r.price))
            .collect();
        assert_eq!(outcall, vec![("1h", 200), ("2h", 350), ("pernoite", 1000)]);

        assert!(view.pricing.local_rates.iter().all(|r| r.currency == "€"));
        // The phrases are stripped from the user-visible text.
        assert_eq!(view.description, "Olá, sou a Ana.");
    }

    #[test]
    fn na_slots_produce_no_rates() {
        let mut listing = blank_listing();
        listing.description =
            "Preços:\nLocal: 1h €150, 2h €N/A, Pernoite €N/A\nDeslocação: 1h €N/A, 2h €N/A, Pernoite €N/A"
                .to_string();

        let view = reconstruct(&listing, &blank_profile(), &[]);
        assert_eq!(view.pricing.local_rates.len(), 1);
        assert_eq!(view.pricing.local_rates[0].duration, "1h");
        assert!(view.pricing.outcall_rates.is_empty());
    }

    #[test]
    fn extraction_is_case_insensitive() {
        let mut listing = blank_listing();
        listing.description = "local: 1h €90, 2h €170, pernoite €500".to_string();

        let view = reconstruct(&listing, &blank_profile(), &[]);
        assert_eq!(view.pricing.local_rates.len(), 3);
        assert_eq!(view.pricing.local_rates[0].price, 90);
    }

    #[test]
    fn flat_price_synthesizes_a_single_local_rate() {
        let mut listing = blank_listing();
        listing.description = "Sem tabela de preços.".to_string();
        listing.price = 120;

        let view = reconstruct(&listing, &blank_profile(), &[]);
        assert_eq!(view.pricing.local_rates.len(), 1);
        assert_eq!(view.pricing.local_rates[0].duration, "1h");
        assert_eq!(view.pricing.local_rates[0].price, 120);
        assert!(view.pricing.outcall_rates.is_empty());
        assert_eq!(view.description, "Sem tabela de preços.");
    }

    #[test]
    fn zero_price_and_no_phrases_yield_empty_rates() {
        let view = reconstruct(&blank_listing(), &blank_profile(), &[]);
        assert!(view.pricing.local_rates.is_empty());
        assert!(view.pricing.outcall_rates.is_empty());
    }

    #[test]
    fn cleanup_collapses_blank_runs_between_prose() {
        let mut listing = blank_listing();
        listing.description =
            "Primeira parte.\n\nPreços:\nLocal: 1h €150, 2h €280, Pernoite €800\n\nSegunda parte."
                .to_string();

        let view = reconstruct(&listing, &blank_profile(), &[]);
        assert_eq!(view.description, "Primeira parte.\n\nSegunda parte.");
    }

    #[test]
    fn media_split_preserves_attachment_order() {
        let media = [
            media_row(1, "/uploads/a.jpg", "IMAGE"),
            media_row(2, "/uploads/v.mp4", "VIDEO"),
            media_row(3, "/uploads/b.jpg", "IMAGE"),
        ];

        let view = reconstruct(&blank_listing(), &blank_profile(), &media);
        let gallery: Vec<&str> = view.gallery.iter().map(|m| m.url.as_str()).collect();
        assert_eq!(gallery, vec!["/uploads/a.jpg", "/uploads/b.jpg"]);
        assert_eq!(view.comparison_media.len(), 1);
        assert_eq!(view.comparison_media[0].url, "/uploads/v.mp4");
    }

    #[test]
    fn physical_attributes_parse_tolerantly() {
        let mut profile = blank_profile();
        profile.height = Some("170 cm".to_string());
        profile.weight = Some("abc".to_string());
        profile.hair_color = Some("castanho".to_string());

        let view = reconstruct(&blank_listing(), &profile, &[]);
        assert_eq!(view.physical.height, Some(170));
        assert_eq!(view.physical.weight, None);
        assert_eq!(view.physical.hair_color.as_deref(), Some("castanho"));
    }

    #[test]
    fn full_pricing_summary_round_trips_exactly() {
        // Property: extraction recovers exactly the pairs the grammar embeds.
        let pricing = DraftPricing {
            show_pricing: true,
            local: RateSet {
                fifteen_min: Some("40".to_string()),
                thirty_min: Some("70".to_string()),
                one_hour: "130".to_string(),
                two_hours: "250".to_string(),
                overnight: "700".to_string(),
            },
            travel: RateSet {
                fifteen_min: Some("60".to_string()),
                thirty_min: Some("90".to_string()),
                one_hour: "180".to_string(),
                two_hours: "320".to_string(),
                overnight: "900".to_string(),
            },
        };

        let mut listing = blank_listing();
        listing.description = pricing_summary(&pricing);

        let view = reconstruct(&listing, &blank_profile(), &[]);
        let durations: Vec<&str> = view
            .pricing
            .local_rates
            .iter()
            .map(|r| r.duration.as_str())
            .collect();
        assert_eq!(durations, vec!["15min", "30min", "1h", "2h", "pernoite"]);
        assert_eq!(view.pricing.outcall_rates.len(), 5);
        assert_eq!(view.description, "");
    }
}
