// Copyright (c) Anuncios Team
// SPDX-License-Identifier: Apache-2.0

//! Durable slot for the in-progress draft.
//!
//! The store is an explicit, injected service owned by whatever drives the
//! wizard; there is no ambient singleton. Persistence is best-effort: a save
//! that fails is logged and swallowed so it can never interrupt an edit, and
//! a corrupt slot reads back as an empty draft.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::warn;

use super::draft::Draft;

/// Key-value slot for one wizard instance, backed by a JSON file.
pub struct DraftStore {
    path: PathBuf,
}

impl DraftStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored draft. A missing, unreadable or unparsable slot yields
    /// an empty draft; this never surfaces an error to the caller.
    pub fn load(&self) -> Draft {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(_) => return Draft::default(),
        };

        match serde_json::from_str::<Draft>(&text) {
            Ok(mut draft) => {
                draft.apply_caps();
                draft
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Stored draft is corrupt, starting empty");
                Draft::default()
            }
        }
    }

    /// Persist the draft. Called after every field mutation; failures are
    /// logged and swallowed.
    pub fn save(&self, draft: &Draft) {
        let text = match serde_json::to_string(draft) {
            Ok(text) => text,
            Err(e) => {
                warn!(error = %e, "Failed to encode draft");
                return;
            }
        };

        // Write to a sibling temp file first so a crash mid-write cannot
        // corrupt the slot.
        let tmp = self.path.with_extension("tmp");
        let result = fs::write(&tmp, text).and_then(|_| fs::rename(&tmp, &self.path));
        if let Err(e) = result {
            warn!(path = %self.path.display(), error = %e, "Failed to persist draft");
        }
    }

    /// Deep-merge a partial update into the stored draft, re-apply the
    /// collection caps, persist, and return the merged draft.
    ///
    /// Objects merge key-by-key; arrays and scalars replace wholesale. An
    /// update that produces an unreadable draft is dropped and the current
    /// draft returned unchanged.
    pub fn merge(&self, partial: &Value) -> Draft {
        let current = self.load();
        let mut merged = match serde_json::to_value(&current) {
            Ok(value) => value,
            Err(e) => {
                warn!(error = %e, "Failed to encode draft for merge");
                return current;
            }
        };

        deep_merge(&mut merged, partial);

        match serde_json::from_value::<Draft>(merged) {
            Ok(mut draft) => {
                draft.apply_caps();
                self.save(&draft);
                draft
            }
            Err(e) => {
                warn!(error = %e, "Merge produced an unreadable draft, keeping previous state");
                current
            }
        }
    }

    /// Remove the slot. Called only on confirmed successful submission.
    pub fn clear(&self) {
        if let Err(e) = fs::remove_file(&self.path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                warn!(path = %self.path.display(), error = %e, "Failed to clear draft slot");
            }
        }
    }
}

fn deep_merge(base: &mut Value, patch: &Value) {
    match (base, patch) {
        (Value::Object(base_map), Value::Object(patch_map)) => {
            for (key, patch_value) in patch_map {
                match base_map.get_mut(key) {
                    Some(base_value) => deep_merge(base_value, patch_value),
                    None => {
                        base_map.insert(key.clone(), patch_value.clone());
                    }
                }
            }
        }
        (base, patch) => *base = patch.clone(),
    }
}
