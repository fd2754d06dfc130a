// Copyright (c) Anuncios Team
// SPDX-License-Identifier: Apache-2.0

//! Link-hub host classification and the fixed social platform order used by
//! the presentation mapper.

use url::Url;

/// Label applied when a link-hub URL does not match a known provider.
pub const GENERIC_LINK_LABEL: &str = "Links";

/// Known link-hub providers, keyed by exact hostname (lowercase, no `www.`).
const LINK_HUB_HOSTS: &[(&str, &str)] = &[
    ("linktr.ee", "Linktree"),
    ("bio.link", "Bio.link"),
    ("beacons.ai", "Beacons"),
    ("carrd.co", "Carrd"),
    ("allmylinks.com", "AllMyLinks"),
    ("campsite.bio", "Campsite"),
    ("lnk.bio", "Lnk.Bio"),
    ("milkshake.app", "Milkshake"),
    ("taplink.cc", "Taplink"),
    ("solo.to", "Solo.to"),
    ("hoo.be", "Hoo.be"),
];

/// Fixed iteration order for assembling a profile's social links list.
///
/// The mapper emits entries in exactly this order, skipping platforms whose
/// URL field is empty. `link-hub` is always last and its display label is
/// resolved through [`classify_link_hub`].
pub const SOCIAL_PLATFORM_ORDER: [&str; 12] = [
    "onlyfans",
    "instagram",
    "twitter",
    "tiktok",
    "snapchat",
    "telegram",
    "whatsapp-business",
    "manyvids",
    "chaturbate",
    "myfreecams",
    "livejasmin",
    "link-hub",
];

/// Classify a link-hub URL into a provider label.
///
/// Matching is exact-hostname and case-insensitive; a leading `www.` is
/// ignored. Malformed input, unknown hosts and non-URL strings all yield
/// [`GENERIC_LINK_LABEL`]. This never fails: the wizard feeds it raw user
/// input.
pub fn classify_link_hub(raw: &str) -> &'static str {
    match host_of(raw) {
        Some(host) => {
            let host = host.strip_prefix("www.").unwrap_or(&host);
            LINK_HUB_HOSTS
                .iter()
                .find(|(known, _)| *known == host)
                .map(|(_, label)| *label)
                .unwrap_or(GENERIC_LINK_LABEL)
        }
        None => GENERIC_LINK_LABEL,
    }
}

/// Extract the lowercased hostname, tolerating a missing scheme.
fn host_of(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let parsed = Url::parse(trimmed)
        .or_else(|_| Url::parse(&format!("https://{}", trimmed)))
        .ok()?;

    parsed.host_str().map(|h| h.to_ascii_lowercase())
}
