use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use sha2::{Digest, Sha256};
use storage::Datastore;
use types::{ADDRESS_LEN, Address, Error, Result, Slot};

use crate::interface::Host;

/// Handler closure a test registers for an exported contract function.
/// It receives the host so it can re-enter the binding layer, observing the
/// call stack of its own frame.
pub type Handler = Rc<dyn Fn(&MockHost, &str) -> Result<String>>;

/// Message recorded by [`MockHost::send_message`]. A real host keeps these
/// in its own pool; the mock materializes them so tests can inspect what
/// was enqueued.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnqueuedMessage {
    pub target: Address,
    pub handler: String,
    pub validity_start: Slot,
    pub validity_end: Slot,
    pub max_gas: u64,
    pub gas_price: u64,
    pub coins: u64,
    pub data: String,
}

const DEFAULT_GAS: u64 = 1_000_000;
// Flat charge per cross-contract call, EVM CALL-base flavored.
const CALL_GAS_COST: u64 = 700;
const DEFAULT_RANDOM_SEED: i64 = 0x5EED;

/// In-memory host implementing the full capability contract.
///
/// State lives behind `RefCell`s because nested synchronous calls re-enter
/// the host through the same shared reference. The call stack follows
/// strict LIFO discipline: `call` pushes exactly one frame and pops it when
/// the callee unwinds, success or failure.
///
/// Authorization policy for the explicit-address primitives: writes require
/// the target to be the current address or an owned address; reads are
/// open, as contracts routinely inspect each other's datastores.
pub struct MockHost {
    datastore: Datastore,
    bytecodes: RefCell<HashMap<Address, String>>,
    balances: RefCell<HashMap<Address, u64>>,
    call_stack: RefCell<Vec<Address>>,
    owned: RefCell<Vec<Address>>,
    handlers: RefCell<HashMap<(Address, String), Handler>>,
    messages: RefCell<Vec<EnqueuedMessage>>,
    events: RefCell<Vec<String>>,
    call_coins: RefCell<u64>,
    time: RefCell<u64>,
    remaining_gas: RefCell<u64>,
    slot: RefCell<Slot>,
    random_state: RefCell<i64>,
    next_sc: RefCell<u64>,
}

impl MockHost {
    /// Starts a transaction with `origin` as the single call-stack frame.
    /// The origin owns itself, so it can write to its own datastore through
    /// the explicit-address primitives as well.
    pub fn new(origin: Address) -> Self {
        Self {
            datastore: Datastore::new(),
            bytecodes: RefCell::new(HashMap::new()),
            balances: RefCell::new(HashMap::new()),
            call_stack: RefCell::new(vec![origin]),
            owned: RefCell::new(vec![origin]),
            handlers: RefCell::new(HashMap::new()),
            messages: RefCell::new(Vec::new()),
            events: RefCell::new(Vec::new()),
            call_coins: RefCell::new(0),
            time: RefCell::new(0),
            remaining_gas: RefCell::new(DEFAULT_GAS),
            slot: RefCell::new(Slot::new(0, 0)),
            random_state: RefCell::new(DEFAULT_RANDOM_SEED),
            next_sc: RefCell::new(0),
        }
    }

    // ----- test fixture shaping -----

    /// Appends a frame without going through `call`, for tests that need a
    /// pre-shaped stack.
    pub fn push_frame(&self, address: Address) {
        self.call_stack.borrow_mut().push(address);
    }

    pub fn pop_frame(&self) -> Option<Address> {
        self.call_stack.borrow_mut().pop()
    }

    pub fn register_handler<F>(&self, address: &Address, function: &str, handler: F)
    where
        F: Fn(&MockHost, &str) -> Result<String> + 'static,
    {
        self.handlers
            .borrow_mut()
            .insert((*address, function.to_string()), Rc::new(handler));
    }

    pub fn set_balance(&self, address: &Address, amount: u64) {
        self.balances.borrow_mut().insert(*address, amount);
    }

    pub fn set_call_coins(&self, coins: u64) {
        *self.call_coins.borrow_mut() = coins;
    }

    pub fn set_time(&self, timestamp: u64) {
        *self.time.borrow_mut() = timestamp;
    }

    pub fn set_remaining_gas(&self, gas: u64) {
        *self.remaining_gas.borrow_mut() = gas;
    }

    pub fn set_slot(&self, slot: Slot) {
        *self.slot.borrow_mut() = slot;
    }

    pub fn set_random_seed(&self, seed: i64) {
        *self.random_state.borrow_mut() = seed;
    }

    // ----- test inspection -----

    pub fn enqueued_messages(&self) -> Vec<EnqueuedMessage> {
        self.messages.borrow().clone()
    }

    pub fn events(&self) -> Vec<String> {
        self.events.borrow().clone()
    }

    pub fn bytecode_of(&self, address: &Address) -> Option<String> {
        self.bytecodes.borrow().get(address).cloned()
    }

    pub fn call_depth(&self) -> usize {
        self.call_stack.borrow().len()
    }

    /// Signature the mock's `signature_verify` accepts for `data` under
    /// `public_key`. A deterministic stand-in, not cryptography.
    pub fn sign(&self, data: &str, public_key: &str) -> String {
        hex::encode(Sha256::digest(format!("{public_key}:{data}").as_bytes()))
    }

    // ----- internals -----

    fn current(&self) -> Result<Address> {
        self.call_stack
            .borrow()
            .last()
            .copied()
            .ok_or_else(|| Error::HostFault("call stack is empty".to_string()))
    }

    fn decode(raw: &[u8]) -> Result<Address> {
        Address::from_byte_string(raw)
    }

    fn domain(address: &Address) -> String {
        address.to_encoded_string()
    }

    /// Write authority rule for explicit-address primitives.
    fn check_write_authority(&self, target: &Address) -> Result<()> {
        let current = self.current()?;
        if *target == current || self.owned.borrow().contains(target) {
            return Ok(());
        }
        Err(Error::PermissionDenied(target.to_encoded_string()))
    }

    fn apply_transfer(&self, from: &Address, to: &Address, amount: u64) -> Result<()> {
        if amount == 0 {
            return Ok(());
        }
        let mut balances = self.balances.borrow_mut();
        let available = balances.get(from).copied().unwrap_or(0);
        if available < amount {
            return Err(Error::HostFault(format!(
                "insufficient balance on {}: have {}, need {}",
                from, available, amount
            )));
        }
        balances.insert(*from, available - amount);
        *balances.entry(*to).or_insert(0) += amount;
        Ok(())
    }

    fn fresh_address(&self) -> Address {
        let index = {
            let mut next = self.next_sc.borrow_mut();
            *next += 1;
            *next
        };
        let digest = Sha256::digest(format!("sc:{index}").as_bytes());
        let mut bytes = [0u8; ADDRESS_LEN];
        bytes.copy_from_slice(&digest);
        Address::new(bytes)
    }
}

impl fmt::Debug for MockHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MockHost")
            .field("call_stack", &self.call_stack.borrow())
            .field("owned", &self.owned.borrow())
            .field("handlers", &self.handlers.borrow().len())
            .field("remaining_gas", &self.remaining_gas.borrow())
            .finish_non_exhaustive()
    }
}

impl Host for MockHost {
    fn print(&self, message: &str) {
        log::info!("{message}");
    }

    fn generate_event(&self, event: &str) {
        log::debug!("event: {event}");
        self.events.borrow_mut().push(event.to_string());
    }

    fn call(&self, address: &[u8], function: &str, args: &str, coins: u64) -> Result<String> {
        let target = Self::decode(address)?;
        let from = self.current()?;

        {
            let mut gas = self.remaining_gas.borrow_mut();
            if *gas < CALL_GAS_COST {
                return Err(Error::CallFailed(format!(
                    "gas exhausted before calling {function} at {target}: {} remaining",
                    *gas
                )));
            }
            *gas -= CALL_GAS_COST;
        }

        let handler = self
            .handlers
            .borrow()
            .get(&(target, function.to_string()))
            .cloned()
            .ok_or_else(|| {
                Error::CallFailed(format!("{target} exports no function named {function}"))
            })?;

        // Coins move before the callee runs.
        self.apply_transfer(&from, &target, coins)
            .map_err(|e| Error::CallFailed(e.to_string()))?;

        let outer_coins = self.call_coins.replace(coins);
        self.call_stack.borrow_mut().push(target);
        let result = handler(self, args);
        self.call_stack.borrow_mut().pop();
        self.call_coins.replace(outer_coins);

        result.map_err(|e| Error::CallFailed(e.to_string()))
    }

    fn create_sc(&self, bytecode: &str) -> Result<Vec<u8>> {
        let address = self.fresh_address();
        self.bytecodes
            .borrow_mut()
            .insert(address, bytecode.to_string());
        self.owned.borrow_mut().push(address);
        log::debug!("created contract at {address}");
        Ok(address.to_byte_string())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let current = self.current()?;
        self.datastore.set(&Self::domain(&current), key, value);
        Ok(())
    }

    fn get(&self, key: &str) -> Result<String> {
        let current = self.current()?;
        self.datastore
            .get(&Self::domain(&current), key)
            .ok_or_else(|| Error::KeyNotFound(key.to_string()))
    }

    fn del(&self, key: &str) -> Result<()> {
        let current = self.current()?;
        if !self.datastore.delete(&Self::domain(&current), key) {
            return Err(Error::KeyNotFound(key.to_string()));
        }
        Ok(())
    }

    fn append(&self, key: &str, value: &str) -> Result<()> {
        let current = self.current()?;
        if !self.datastore.append(&Self::domain(&current), key, value) {
            return Err(Error::KeyNotFound(key.to_string()));
        }
        Ok(())
    }

    fn has(&self, key: &str) -> Result<bool> {
        let current = self.current()?;
        Ok(self.datastore.has(&Self::domain(&current), key))
    }

    fn set_for(&self, address: &[u8], key: &str, value: &str) -> Result<()> {
        let target = Self::decode(address)?;
        self.check_write_authority(&target)?;
        self.datastore.set(&Self::domain(&target), key, value);
        Ok(())
    }

    fn get_for(&self, address: &[u8], key: &str) -> Result<String> {
        let target = Self::decode(address)?;
        self.datastore
            .get(&Self::domain(&target), key)
            .ok_or_else(|| Error::KeyNotFound(key.to_string()))
    }

    fn del_for(&self, address: &[u8], key: &str) -> Result<()> {
        let target = Self::decode(address)?;
        self.check_write_authority(&target)?;
        if !self.datastore.delete(&Self::domain(&target), key) {
            return Err(Error::KeyNotFound(key.to_string()));
        }
        Ok(())
    }

    fn append_for(&self, address: &[u8], key: &str, value: &str) -> Result<()> {
        let target = Self::decode(address)?;
        self.check_write_authority(&target)?;
        if !self.datastore.append(&Self::domain(&target), key, value) {
            return Err(Error::KeyNotFound(key.to_string()));
        }
        Ok(())
    }

    fn has_for(&self, address: &[u8], key: &str) -> Result<bool> {
        let target = Self::decode(address)?;
        Ok(self.datastore.has(&Self::domain(&target), key))
    }

    fn set_bytecode(&self, bytecode: &str) -> Result<()> {
        let current = self.current()?;
        self.bytecodes
            .borrow_mut()
            .insert(current, bytecode.to_string());
        Ok(())
    }

    fn set_bytecode_for(&self, address: &[u8], bytecode: &str) -> Result<()> {
        let target = Self::decode(address)?;
        self.check_write_authority(&target)?;
        self.bytecodes
            .borrow_mut()
            .insert(target, bytecode.to_string());
        Ok(())
    }

    fn transfer_coins(&self, to: &[u8], amount: u64) -> Result<()> {
        let from = self.current()?;
        let to = Self::decode(to)?;
        self.apply_transfer(&from, &to, amount)
    }

    fn transfer_coins_for(&self, from: &[u8], to: &[u8], amount: u64) -> Result<()> {
        let from = Self::decode(from)?;
        let to = Self::decode(to)?;
        self.check_write_authority(&from)?;
        self.apply_transfer(&from, &to, amount)
    }

    fn balance(&self) -> Result<u64> {
        let current = self.current()?;
        Ok(self.balances.borrow().get(&current).copied().unwrap_or(0))
    }

    fn balance_for(&self, address: &[u8]) -> Result<u64> {
        let target = Self::decode(address)?;
        Ok(self.balances.borrow().get(&target).copied().unwrap_or(0))
    }

    fn hash(&self, data: &str) -> String {
        hex::encode(Sha256::digest(data.as_bytes()))
    }

    fn signature_verify(&self, data: &str, signature: &str, public_key: &str) -> bool {
        signature == self.sign(data, public_key)
    }

    fn address_from_public_key(&self, public_key: &str) -> Result<Vec<u8>> {
        let digest = Sha256::digest(public_key.as_bytes());
        let mut bytes = [0u8; ADDRESS_LEN];
        bytes.copy_from_slice(&digest);
        Ok(Address::new(bytes).to_byte_string())
    }

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
    ) -> Result<()> {
        let target = Self::decode(address)?;
        if validity_end < validity_start {
            return Err(Error::InvalidValidityWindow {
                start: validity_start,
                end: validity_end,
            });
        }
        self.messages.borrow_mut().push(EnqueuedMessage {
            target,
            handler: handler.to_string(),
            validity_start,
            validity_end,
            max_gas,
            gas_price,
            coins,
            data: data.to_string(),
        });
        log::debug!("enqueued message for {target}:{handler}");
        Ok(())
    }

    fn get_call_stack(&self) -> Result<Vec<Vec<u8>>> {
        Ok(self
            .call_stack
            .borrow()
            .iter()
            .map(Address::to_byte_string)
            .collect())
    }

    fn get_owned_addresses(&self) -> Result<Vec<Vec<u8>>> {
        Ok(self
            .owned
            .borrow()
            .iter()
            .map(Address::to_byte_string)
            .collect())
    }

    fn get_call_coins(&self) -> Result<u64> {
        Ok(*self.call_coins.borrow())
    }

    fn get_time(&self) -> Result<u64> {
        Ok(*self.time.borrow())
    }

    fn get_remaining_gas(&self) -> Result<u64> {
        Ok(*self.remaining_gas.borrow())
    }

    fn get_current_period(&self) -> Result<u64> {
        Ok(self.slot.borrow().period)
    }

    fn get_current_thread(&self) -> Result<u8> {
        Ok(self.slot.borrow().thread)
    }

    fn unsafe_random(&self) -> i64 {
        // MMIX LCG. Predictable by construction, mirroring the real
        // primitive's documented weakness.
        let mut state = self.random_state.borrow_mut();
        *state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        *state
    }
}
