use host::Host;
use types::{Address, Error, Result, Slot};

/// Cross-contract dispatch: synchronous calls, deployment, deferred
/// messages and coin movement.
pub struct InvocationBridge<'a> {
    host: &'a dyn Host,
}

impl<'a> InvocationBridge<'a> {
    pub fn new(host: &'a dyn Host) -> Self {
        Self { host }
    }

    /// Synchronously calls `function` exported at `target`.
    ///
    /// The host pushes the callee frame, transfers `coins` to `target`
    /// before execution and pops the frame when the callee unwinds,
    /// success or failure. Fails with `CallFailed` carrying the
    /// host-determined sub-reason: missing function, callee error or gas
    /// exhaustion.
    pub fn call(&self, target: &Address, function: &str, args: &str, coins: u64) -> Result<String> {
        log::debug!("call {target}:{function} coins={coins}");
        self.host
            .call(&target.to_byte_string(), function, args, coins)
    }

    /// Creates a contract from base64 bytecode at a fresh address, which
    /// joins the caller's owned set. The deployed code does not execute as
    /// part of deployment.
    pub fn deploy(&self, bytecode: &str) -> Result<Address> {
        let raw = self.host.create_sc(bytecode)?;
        let address = Address::from_byte_string(&raw)?;
        log::debug!("deployed contract at {address}");
        Ok(address)
    }

    /// Enqueues a deferred call to `handler` at `target`, executable within
    /// `[validity_start, validity_end]` inclusive under period-major slot
    /// ordering. Fire-and-forget: submission is one atomic enqueue with no
    /// completion signal, and an unexecuted message expires silently on the
    /// host side.
    #[allow(clippy::too_many_arguments)]
    pub fn send_async_message(
        &self,
        target: &Address,
        handler: &str,
        validity_start: Slot,
        validity_end: Slot,
        max_gas: u64,
        gas_price: u64,
        coins: u64,
        payload: &str,
    ) -> Result<()> {
        if validity_end < validity_start {
            return Err(Error::InvalidValidityWindow {
                start: validity_start,
                end: validity_end,
            });
        }
        log::debug!("send message {target}:{handler} window {validity_start}..{validity_end}");
        self.host.send_message(
            &target.to_byte_string(),
            handler,
            validity_start,
            validity_end,
            max_gas,
            gas_price,
            coins,
            payload,
        )
    }

    /// Transfers coins from the current address.
    pub fn transfer_coins(&self, to: &Address, amount: u64) -> Result<()> {
        self.host.transfer_coins(&to.to_byte_string(), amount)
    }

    /// Transfers coins out of an explicit `from` address; surfaces
    /// `PermissionDenied` when the current context lacks authority over it.
    pub fn transfer_coins_for(&self, from: &Address, to: &Address, amount: u64) -> Result<()> {
        self.host
            .transfer_coins_for(&from.to_byte_string(), &to.to_byte_string(), amount)
    }

    /// Balance of the current address.
    pub fn balance(&self) -> Result<u64> {
        self.host.balance()
    }

    pub fn balance_for(&self, address: &Address) -> Result<u64> {
        self.host.balance_for(&address.to_byte_string())
    }
}
