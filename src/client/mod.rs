//! External-state boundary: session flags, team list, and the order spool.

mod error;
mod session;
mod spool;

pub use error::ClientError;
pub use session::Session;
pub use spool::{OrderSpool, Profile};
