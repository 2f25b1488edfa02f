use host::Host;
use types::{Address, Error, Result, Slot};

/// Read-only view of the current call's metadata.
///
/// The call stack is decoded from the host exactly once, at capture time,
/// into a strongly typed snapshot that stays fixed for the duration of the
/// frame; contracts observe the stack but never mutate it. Scalar accessors
/// (coins, time, gas, slot) forward to the host on each use.
pub struct ExecutionContext<'a> {
    host: &'a dyn Host,
    stack: Vec<Address>,
}

impl<'a> ExecutionContext<'a> {
    /// Snapshots the call stack. An empty stack cannot occur during
    /// execution; the host reporting one is a fatal fault, which keeps
    /// [`transaction_creator`](Self::transaction_creator) and
    /// [`current_address`](Self::current_address) infallible afterwards.
    pub fn capture(host: &'a dyn Host) -> Result<Self> {
        let raw = host.get_call_stack()?;
        let stack = raw
            .iter()
            .map(|frame| Address::from_byte_string(frame))
            .collect::<Result<Vec<_>>>()?;
        if stack.is_empty() {
            return Err(Error::HostFault("host reported an empty call stack".to_string()));
        }
        Ok(Self { host, stack })
    }

    /// Ordered chain from transaction origin to the currently executing
    /// contract.
    pub fn call_stack(&self) -> &[Address] {
        &self.stack
    }

    /// The currently executing contract: last frame of the stack.
    pub fn current_address(&self) -> &Address {
        &self.stack[self.stack.len() - 1]
    }

    /// The immediate caller: second-to-last frame. The transaction-origin
    /// frame has no caller, reported as `NoCaller` rather than an index
    /// underflow.
    pub fn caller(&self) -> Result<&Address> {
        if self.stack.len() < 2 {
            return Err(Error::NoCaller);
        }
        Ok(&self.stack[self.stack.len() - 2])
    }

    /// The original transaction sender: first frame, defined at any depth.
    pub fn transaction_creator(&self) -> &Address {
        &self.stack[0]
    }

    /// Addresses the current execution holds write authority over (own
    /// address plus contracts created during this execution). Queried live,
    /// since deployments during the frame extend the set.
    pub fn owned_addresses(&self) -> Result<Vec<Address>> {
        let raw = self.host.get_owned_addresses()?;
        raw.iter()
            .map(|entry| Address::from_byte_string(entry))
            .collect()
    }

    /// Coins attached to the current call.
    pub fn call_coins(&self) -> Result<u64> {
        self.host.get_call_coins()
    }

    /// Wall-clock time of the current slot.
    pub fn current_time(&self) -> Result<u64> {
        self.host.get_time()
    }

    pub fn remaining_gas(&self) -> Result<u64> {
        self.host.get_remaining_gas()
    }

    pub fn current_slot(&self) -> Result<Slot> {
        Ok(Slot::new(
            self.host.get_current_period()?,
            self.host.get_current_thread()?,
        ))
    }
}
