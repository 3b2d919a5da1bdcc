//! Shared HTTP body types.

mod response;

pub use response::Envelope;
