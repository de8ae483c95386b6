//! Change request domain models.

mod classifier;
mod document;
mod resolved;
mod state;

pub use classifier::{is_numeric_token, parse_request_id};
pub use document::{ActionSource, ActionTarget, RequestAction, RequestDocument};
pub use resolved::{ResolvedRequest, ResolvedRequests};
pub use state::RequestState;
