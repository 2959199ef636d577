//! Common types shared by all entities

pub mod images;
pub mod record_id;
pub mod validation;

// Re-exports
pub use images::{absolutize_url, GalleryImage};
pub use record_id::RecordId;
pub use validation::{non_blank, ValidationError};
