// Shared types used across domains
pub mod entity_ids;
pub mod html;

pub use entity_ids::*;
