//! Custom request extractors.

mod entity_id;
mod validated_json;

pub use entity_id::{EntityId, INVALID_ID_MESSAGE};
pub use validated_json::ValidatedJson;
