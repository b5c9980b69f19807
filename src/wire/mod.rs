//! Submission framing for the order spool.
//!
//! Each submitted order is encoded as a single JSON line so the spool file
//! can be consumed by line-oriented tooling.

mod error;
mod writer;

pub use error::WireError;
pub use writer::{OrderEncoder, encode_order};
