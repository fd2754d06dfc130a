pub mod profile;
pub mod listing;
pub mod media;
