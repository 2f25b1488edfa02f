//! Error taxonomy shared by the whole binding layer.
//!
//! Every variant except `HostFault` is recoverable by contract logic that
//! checks preconditions first (`has` before `get`, window validation before
//! submitting a message). `HostFault` carries faults the host signals
//! mid-primitive; they are propagated untouched and end the transaction.

use crate::slot::Slot;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Malformed address string or byte string.
    #[error("invalid address encoding: {0}")]
    InvalidEncoding(String),

    /// Datastore miss on `get`, `delete` or `append`.
    #[error("key not found: {0}")]
    KeyNotFound(String),

    /// The current execution context may not act on the target address.
    /// The authorization policy itself is host-enforced.
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    /// The call stack holds a single frame; the transaction-origin frame
    /// has no caller.
    #[error("call stack has no caller frame")]
    NoCaller,

    /// A synchronous cross-contract call could not complete. The message
    /// carries the host-determined sub-reason (missing function, callee
    /// error, gas exhaustion).
    #[error("call failed: {0}")]
    CallFailed(String),

    /// Async message window ends before it starts.
    #[error("validity window ends at {end} before it starts at {start}")]
    InvalidValidityWindow { start: Slot, end: Slot },

    /// Fatal host-level fault. Never downgraded, never retried.
    #[error("host fault: {0}")]
    HostFault(String),
}

pub type Result<T> = core::result::Result<T, Error>;
