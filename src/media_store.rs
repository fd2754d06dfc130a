// Copyright (c) Anuncios Team
// SPDX-License-Identifier: Apache-2.0

//! Classification and storage of uploaded media.
//!
//! Every stored asset yields two linked metadata rows: a `media` row tied to
//! both the profile and the listing, and an `images` row scoped to the
//! listing for gallery reads. The binary write comes first; if it fails no
//! metadata is written. Metadata failures are logged and swallowed so a bad
//! file never aborts the submission that is already under way.

use std::path::{Path, PathBuf};

use chrono::Utc;
use diesel::prelude::*;
use diesel_async::{AsyncPgConnection, RunQueryDsl};
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::media::{Media, NewImage, NewMedia};
use crate::schema::{images, media};
use crate::submission::FilePart;

pub const MEDIA_TYPE_IMAGE: &str = "IMAGE";
pub const MEDIA_TYPE_VIDEO: &str = "VIDEO";

/// Which draft collection an asset came from. The token is embedded in the
/// generated filename and recorded on the `media` row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaSlot {
    Photos,
    Gallery,
    Comparison,
    Verification,
    VoiceNote,
}

impl MediaSlot {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaSlot::Photos => "photos",
            MediaSlot::Gallery => "gallery",
            MediaSlot::Comparison => "comparison",
            MediaSlot::Verification => "verification",
            MediaSlot::VoiceNote => "voice-note",
        }
    }

    /// Rank of a stored slot token in draft attachment order. Used to put a
    /// listing's media rows back in the order the submitter attached them.
    pub fn attachment_rank(slot: &str) -> u8 {
        match slot {
            "photos" => 0,
            "gallery" => 1,
            "comparison" => 2,
            "verification" => 3,
            "voice-note" => 4,
            _ => 5,
        }
    }
}

impl std::fmt::Display for MediaSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failures internal to the store. They never cross the component boundary;
/// callers only ever see `Option<Media>`.
#[derive(Debug, Error)]
enum MediaStoreError {
    #[error("binary write failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("metadata write failed: {0}")]
    Database(#[from] diesel::result::Error),
}

/// A binary persisted to disk, before any metadata exists for it.
#[derive(Debug, Clone)]
pub struct StoredFile {
    pub url: String,
    pub media_type: &'static str,
}

#[derive(Debug, Clone)]
pub struct MediaStore {
    root: PathBuf,
    public_prefix: String,
}

impl MediaStore {
    pub fn new(root: impl Into<PathBuf>, public_prefix: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            public_prefix: public_prefix.into(),
        }
    }

    /// Classify by declared MIME type only. Anything that is not a video is
    /// treated as an image; uploads carry no other kinds.
    pub fn classify(content_type: &str) -> &'static str {
        if content_type.starts_with("video/") {
            MEDIA_TYPE_VIDEO
        } else {
            MEDIA_TYPE_IMAGE
        }
    }

    /// Persist the binary under the public uploads prefix and return its
    /// storage-relative URL. No metadata is written here.
    pub async fn save_file(
        &self,
        file: &FilePart,
        profile_id: i32,
        slot: MediaSlot,
        index: usize,
    ) -> std::io::Result<StoredFile> {
        let media_type = Self::classify(&file.content_type);
        let file_name = self.file_name(profile_id, slot, index, &file.file_name, media_type);

        let dir = self.root.join(self.public_prefix.trim_start_matches('/'));
        tokio::fs::create_dir_all(&dir).await?;
        tokio::fs::write(dir.join(&file_name), &file.bytes).await?;

        let url = format!("{}/{}", self.public_prefix.trim_end_matches('/'), file_name);
        debug!(url = %url, bytes = file.bytes.len(), "stored media binary");

        Ok(StoredFile { url, media_type })
    }

    /// Persist one asset end to end: binary first, then the `media` and
    /// `images` rows. Any failure is logged and reported as `None`; a failed
    /// binary write prevents both metadata writes, while metadata failures
    /// leave the binary in place.
    pub async fn store(
        &self,
        conn: &mut AsyncPgConnection,
        file: &FilePart,
        profile_id: i32,
        listing_id: i32,
        slot: MediaSlot,
        index: usize,
    ) -> Option<Media> {
        match self
            .store_inner(conn, file, profile_id, listing_id, slot, index)
            .await
        {
            Ok(row) => Some(row),
            Err(e) => {
                warn!(
                    profile_id,
                    listing_id,
                    slot = %slot,
                    index,
                    file_name = %file.file_name,
                    "skipping media item: {}",
                    e
                );
                None
            }
        }
    }

    async fn store_inner(
        &self,
        conn: &mut AsyncPgConnection,
        file: &FilePart,
        profile_id: i32,
        listing_id: i32,
        slot: MediaSlot,
        index: usize,
    ) -> Result<Media, MediaStoreError> {
        let stored = self.save_file(file, profile_id, slot, index).await?;

        let new_media = NewMedia {
            url: stored.url.clone(),
            media_type: stored.media_type.to_string(),
            listing_id,
            profile_id,
            slot: slot.as_str().to_string(),
            position: index as i32,
        };
        let row = diesel::insert_into(media::table)
            .values(&new_media)
            .returning(Media::as_returning())
            .get_result(conn)
            .await?;

        let new_image = NewImage {
            url: stored.url,
            listing_id,
            position: index as i32,
        };
        diesel::insert_into(images::table)
            .values(&new_image)
            .execute(conn)
            .await?;

        Ok(row)
    }

    fn file_name(
        &self,
        profile_id: i32,
        slot: MediaSlot,
        index: usize,
        original_name: &str,
        media_type: &str,
    ) -> String {
        format!(
            "profile-{}-{}-{}-{}{}",
            profile_id,
            slot.as_str(),
            index,
            Utc::now().timestamp_micros(),
            extension_of(original_name, media_type)
        )
    }
}

/// Lowercased extension of the original name, with a dot. Files uploaded
/// without one get a default matching their classified type.
fn extension_of(original_name: &str, media_type: &str) -> String {
    Path::new(original_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{}", ext.to_lowercase()))
        .unwrap_or_else(|| {
            if media_type == MEDIA_TYPE_VIDEO {
                ".mp4".to_string()
            } else {
                ".jpg".to_string()
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jpeg(name: &str) -> FilePart {
        FilePart {
            file_name: name.to_string(),
            content_type: "image/jpeg".to_string(),
            bytes: vec![0xFF, 0xD8, 0xFF],
        }
    }

    #[test]
    fn classification_is_by_mime_prefix_only() {
        assert_eq!(MediaStore::classify("video/mp4"), MEDIA_TYPE_VIDEO);
        assert_eq!(MediaStore::classify("video/quicktime"), MEDIA_TYPE_VIDEO);
        assert_eq!(MediaStore::classify("image/png"), MEDIA_TYPE_IMAGE);
        assert_eq!(MediaStore::classify("application/pdf"), MEDIA_TYPE_IMAGE);
        assert_eq!(MediaStore::classify(""), MEDIA_TYPE_IMAGE);
    }

    #[test]
    fn extensions_come_from_the_original_name() {
        assert_eq!(extension_of("selfie.PNG", MEDIA_TYPE_IMAGE), ".png");
        assert_eq!(extension_of("clip.MOV", MEDIA_TYPE_VIDEO), ".mov");
        assert_eq!(extension_of("noext", MEDIA_TYPE_IMAGE), ".jpg");
        assert_eq!(extension_of("", MEDIA_TYPE_VIDEO), ".mp4");
    }

    #[test]
    fn attachment_rank_orders_photos_before_gallery_before_comparison() {
        let mut slots = vec!["comparison", "photos", "gallery"];
        slots.sort_by_key(|s| MediaSlot::attachment_rank(s));
        assert_eq!(slots, vec!["photos", "gallery", "comparison"]);
        assert_eq!(MediaSlot::attachment_rank("unknown"), 5);
    }

    #[test]
    fn file_names_carry_owner_slot_and_index() {
        let store = MediaStore::new("/tmp/media", "/uploads");
        let name = store.file_name(7, MediaSlot::Gallery, 2, "pic.png", MEDIA_TYPE_IMAGE);
        assert!(name.starts_with("profile-7-gallery-2-"), "got {name}");
        assert!(name.ends_with(".png"), "got {name}");
    }

    #[test]
    fn file_names_do_not_collide_across_calls() {
        let store = MediaStore::new("/tmp/media", "/uploads");
        let first = store.file_name(7, MediaSlot::Photos, 0, "a.jpg", MEDIA_TYPE_IMAGE);
        std::thread::sleep(std::time::Duration::from_millis(2));
        let second = store.file_name(7, MediaSlot::Photos, 0, "a.jpg", MEDIA_TYPE_IMAGE);
        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn save_file_writes_under_the_public_prefix() {
        let root = tempfile::tempdir().unwrap();
        let store = MediaStore::new(root.path(), "/uploads");

        let stored = store
            .save_file(&jpeg("me.jpg"), 3, MediaSlot::Photos, 0)
            .await
            .unwrap();

        assert!(stored.url.starts_with("/uploads/profile-3-photos-0-"));
        assert_eq!(stored.media_type, MEDIA_TYPE_IMAGE);

        let on_disk = root
            .path()
            .join("uploads")
            .join(stored.url.trim_start_matches("/uploads/"));
        let bytes = tokio::fs::read(on_disk).await.unwrap();
        assert_eq!(bytes, vec![0xFF, 0xD8, 0xFF]);
    }

    #[tokio::test]
    async fn save_file_reports_io_failure() {
        // A regular file in place of the media root makes create_dir_all fail.
        let scratch = tempfile::tempdir().unwrap();
        let blocker = scratch.path().join("not-a-dir");
        tokio::fs::write(&blocker, b"x").await.unwrap();

        let store = MediaStore::new(&blocker, "/uploads");
        let result = store.save_file(&jpeg("me.jpg"), 3, MediaSlot::Photos, 0).await;
        assert!(result.is_err());
    }
}
