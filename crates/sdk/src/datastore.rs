use host::Host;
use types::{Address, Error, Result};

/// Stateless façade over the host datastore primitives.
///
/// Each operation exists in an implicit form, scoped to the currently
/// executing address, and an explicit `_for` form targeting any address.
/// Explicit writes surface `PermissionDenied` from the host unchanged; the
/// policy itself is not re-derived here.
pub struct DatastoreClient<'a> {
    host: &'a dyn Host,
}

impl<'a> DatastoreClient<'a> {
    pub fn new(host: &'a dyn Host) -> Self {
        Self { host }
    }

    /// Upsert: overwrites an existing entry, creates a missing one.
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        self.host.set(key, value)
    }

    /// Fails with `KeyNotFound` when the entry is absent. Callers wanting
    /// soft-miss semantics check [`has`](Self::has) first or use
    /// [`get_or_default`](Self::get_or_default).
    pub fn get(&self, key: &str) -> Result<String> {
        self.host.get(key)
    }

    /// Composed from `has` + `get`, so it costs two host round-trips; there
    /// is no dedicated primitive behind it.
    pub fn get_or_default(&self, key: &str, default: &str) -> Result<String> {
        if self.host.has(key)? {
            self.host.get(key)
        } else {
            Ok(default.to_string())
        }
    }

    pub fn delete(&self, key: &str) -> Result<()> {
        self.host.del(key)
    }

    /// Concatenates `suffix` onto the existing value. Appending to a
    /// missing key fails with `KeyNotFound`: the host contract leaves that
    /// case unspecified, so the client checks existence before forwarding.
    pub fn append(&self, key: &str, suffix: &str) -> Result<()> {
        if !self.host.has(key)? {
            return Err(Error::KeyNotFound(key.to_string()));
        }
        self.host.append(key, suffix)
    }

    pub fn has(&self, key: &str) -> Result<bool> {
        self.host.has(key)
    }

    /// Replaces the executable code bound to the current address.
    pub fn set_bytecode(&self, bytecode: &str) -> Result<()> {
        self.host.set_bytecode(bytecode)
    }

    pub fn set_for(&self, address: &Address, key: &str, value: &str) -> Result<()> {
        self.host.set_for(&address.to_byte_string(), key, value)
    }

    pub fn get_for(&self, address: &Address, key: &str) -> Result<String> {
        self.host.get_for(&address.to_byte_string(), key)
    }

    pub fn get_or_default_for(&self, address: &Address, key: &str, default: &str) -> Result<String> {
        if self.host.has_for(&address.to_byte_string(), key)? {
            self.host.get_for(&address.to_byte_string(), key)
        } else {
            Ok(default.to_string())
        }
    }

    pub fn delete_for(&self, address: &Address, key: &str) -> Result<()> {
        self.host.del_for(&address.to_byte_string(), key)
    }

    pub fn append_for(&self, address: &Address, key: &str, suffix: &str) -> Result<()> {
        if !self.host.has_for(&address.to_byte_string(), key)? {
            return Err(Error::KeyNotFound(key.to_string()));
        }
        self.host.append_for(&address.to_byte_string(), key, suffix)
    }

    pub fn has_for(&self, address: &Address, key: &str) -> Result<bool> {
        self.host.has_for(&address.to_byte_string(), key)
    }

    pub fn set_bytecode_for(&self, address: &Address, bytecode: &str) -> Result<()> {
        self.host.set_bytecode_for(&address.to_byte_string(), bytecode)
    }
}
