use std::fmt::Debug;

use types::{Result, Slot};

/// Host capability interface: one method per primitive the execution
/// environment provides to contract code.
///
/// Addresses cross this boundary in their canonical byte-string form; keys,
/// values, arguments and payloads as UTF-8 strings; amounts and periods as
/// unsigned 64-bit integers and thread indices as 8-bit integers. The
/// binding layer decodes address lists once on the way back in, so
/// implementations never hand out pre-parsed structures.
///
/// Methods take `&self`: execution is single-threaded per invocation and
/// nested call frames re-enter the host, so implementations rely on
/// interior mutability rather than `&mut` receivers.
pub trait Host: Debug {
    /// Writes a message to the node logs. No failure mode.
    fn print(&self, message: &str);

    /// Emits a contract event.
    fn generate_event(&self, event: &str);

    /// Synchronously calls `function` exported by the contract at `address`,
    /// transferring `coins` to it before execution. The callee frame is
    /// pushed for the duration of the call and popped on return, success or
    /// failure.
    fn call(&self, address: &[u8], function: &str, args: &str, coins: u64) -> Result<String>;

    /// Creates a new contract from base64 bytecode and returns the address
    /// of the fresh ledger entry. The deployed code does not run.
    fn create_sc(&self, bytecode: &str) -> Result<Vec<u8>>;

    // Datastore of the current address.
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn get(&self, key: &str) -> Result<String>;
    fn del(&self, key: &str) -> Result<()>;
    fn append(&self, key: &str, value: &str) -> Result<()>;
    fn has(&self, key: &str) -> Result<bool>;

    // Datastore of an explicit address. Authorization is host policy; these
    // surface `PermissionDenied` when the current context may not act on
    // the target.
    fn set_for(&self, address: &[u8], key: &str, value: &str) -> Result<()>;
    fn get_for(&self, address: &[u8], key: &str) -> Result<String>;
    fn del_for(&self, address: &[u8], key: &str) -> Result<()>;
    fn append_for(&self, address: &[u8], key: &str, value: &str) -> Result<()>;
    fn has_for(&self, address: &[u8], key: &str) -> Result<bool>;

    /// Replaces the executable code bound to the current address.
    fn set_bytecode(&self, bytecode: &str) -> Result<()>;
    fn set_bytecode_for(&self, address: &[u8], bytecode: &str) -> Result<()>;

    /// Transfers coins from the current address.
    fn transfer_coins(&self, to: &[u8], amount: u64) -> Result<()>;
    fn transfer_coins_for(&self, from: &[u8], to: &[u8], amount: u64) -> Result<()>;

    fn balance(&self) -> Result<u64>;
    fn balance_for(&self, address: &[u8]) -> Result<u64>;

    /// Hashes `data` and returns the digest string.
    fn hash(&self, data: &str) -> String;

    fn signature_verify(&self, data: &str, signature: &str, public_key: &str) -> bool;

    /// Derives the address bound to a public key, in byte-string form.
    fn address_from_public_key(&self, public_key: &str) -> Result<Vec<u8>>;

    /// Atomically enqueues a deferred call to `handler` at `address`,
    /// executable within `[validity_start, validity_end]` inclusive.
    /// Ownership of the message transfers to the host; there is no
    /// synchronous completion signal and expiry is silent.
    #[allow(clippy::too_many_arguments)]
    fn send_message(
        &self,
        address: &[u8],
        handler: &str,
        validity_start: Slot,
        validity_end: Slot,
        max_gas: u64,
        gas_price: u64,
        coins: u64,
        data: &str,
    ) -> Result<()>;

    /// Ordered chain of addresses from transaction origin to the currently
    /// executing contract, one byte string per frame.
    fn get_call_stack(&self) -> Result<Vec<Vec<u8>>>;

    /// Addresses the current execution holds write authority over.
    fn get_owned_addresses(&self) -> Result<Vec<Vec<u8>>>;

    fn get_call_coins(&self) -> Result<u64>;
    fn get_time(&self) -> Result<u64>;
    fn get_remaining_gas(&self) -> Result<u64>;
    fn get_current_period(&self) -> Result<u64>;
    fn get_current_thread(&self) -> Result<u8>;

    /// Host-predictable pseudo-random draw. Not cryptographic; never use
    /// it where manipulation by the block producer matters.
    fn unsafe_random(&self) -> i64;
}
