//! Data models for chatline entities.

pub mod profile;

pub use profile::UserProfile;
