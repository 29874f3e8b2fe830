//! Data models for the campus board.
//!
//! Local entities serialize with the same camelCase shape the browser client persists,
//! so a snapshot written by either side loads in the other.

mod auth;
mod note;
mod remote;
mod reply;
mod request;
mod snapshot;
mod suggestion;
mod thread;

pub use auth::*;
pub use note::*;
pub use remote::*;
pub use reply::*;
pub use request::*;
pub use snapshot::*;
pub use suggestion::*;
pub use thread::*;

use chrono::{SecondsFormat, Utc};

/// Current time as an ISO-8601 UTC string with millisecond precision (`...T09:30:00.123Z`).
pub fn timestamp_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Fresh random entity identifier.
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
