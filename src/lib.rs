pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod media_store;
pub mod models;
pub mod moderation;
pub mod platform;
pub mod presentation;
pub mod schema;
pub mod submission;
pub mod wizard;

#[macro_use]
extern crate diesel;
