//! Guest-side binding layer over the host capability interface.
//!
//! Contract code never talks to the host directly: it goes through
//! [`DatastoreClient`] for persistent state, [`ExecutionContext`] for
//! call-stack and slot introspection, and [`InvocationBridge`] for
//! cross-contract calls, deployment, coin movement and async messages.
//! The remaining primitives are plain forwarders kept as free functions.
//!
//! Everything takes an explicit `&dyn Host`; there is no ambient global
//! state anywhere in this layer.

use host::Host;
use types::{Address, Result};

pub mod datastore;
pub use datastore::DatastoreClient;

pub mod context;
pub use context::ExecutionContext;

pub mod bridge;
pub use bridge::InvocationBridge;

/// Prints to the node logs.
pub fn print(host: &dyn Host, message: &str) {
    host.print(message);
}

/// Emits a contract event.
pub fn generate_event(host: &dyn Host, event: &str) {
    host.generate_event(event);
}

/// Hashes `data` with the host's hashing primitive.
pub fn hash(host: &dyn Host, data: &str) -> String {
    host.hash(data)
}

/// Checks `signature` over `data` against `public_key`. Verification is
/// delegated, never computed locally.
pub fn signature_verify(host: &dyn Host, data: &str, signature: &str, public_key: &str) -> bool {
    host.signature_verify(data, signature, public_key)
}

/// Derives the address bound to `public_key`.
pub fn address_from_public_key(host: &dyn Host, public_key: &str) -> Result<Address> {
    let raw = host.address_from_public_key(public_key)?;
    Address::from_byte_string(&raw)
}

/// Returns a host-predictable random draw.
///
/// Unsafe because the sequence can be predicted and manipulated by the
/// host; it must never stand in for a cryptographic random source.
pub fn unsafe_random(host: &dyn Host) -> i64 {
    host.unsafe_random()
}
