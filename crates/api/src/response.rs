//! Shared response types for API handlers.

use serde::Serialize;

use lexhire_core::types::Timestamp;
use lexhire_db::models::user::LockHolder;

/// Acknowledgement body for the edit-lock heartbeat endpoints.
///
/// The client-side heartbeat timer polls `refresh-lock` and inspects
/// `success` to decide whether its editing session is still valid, so this
/// shape is returned on both the 200 and the 403 arm rather than the
/// error-page envelope.
#[derive(Debug, Serialize)]
pub struct LockAck {
    pub success: bool,
}

/// JSON props for an edit view: either the form data, or a locked notice.
///
/// Serialized with a `"mode"` discriminator so the front end can route
/// between the edit form and the "currently being edited" screen. `E` is
/// the full entity row, `S` its summary for the locked notice.
#[derive(Debug, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum EditProps<E: Serialize, S: Serialize> {
    /// The requester holds the lock; render the edit form.
    Editable { entity: E },
    /// Someone else is editing; render the locked notice.
    Locked {
        entity: S,
        locked_by: LockHolder,
        locked_at: Timestamp,
    },
}
