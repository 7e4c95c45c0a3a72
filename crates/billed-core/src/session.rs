//! Session context read from persisted storage

use billed_types::User;

use crate::error::{BilledError, Result};

/// Storage key holding the signed-in user as JSON
pub const USER_KEY: &str = "user";

/// Storage key holding the bearer token sent to the store
pub const TOKEN_KEY: &str = "jwt";

/// Decode the stored session
///
/// No stored value means nobody is signed in. A value that does not decode
/// is an error so the caller can discard it.
pub fn parse_session(raw: Option<&str>) -> Result<Option<User>> {
    match raw.map(str::trim) {
        None | Some("") | Some("null") => Ok(None),
        Some(json) => User::from_json(json)
            .map(Some)
            .map_err(|e| BilledError::Session(e.to_string())),
    }
}
