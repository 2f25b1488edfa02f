use std::cell::RefCell;
use std::collections::BTreeMap;

/// In-memory keyed datastore, partitioned by address domain.
///
/// Backs the mock host: each address owns an isolated set of UTF-8
/// key/value entries. Entries from different domains never collide because
/// every key is stored under a composite `domain:key`. The `RefCell`
/// wrapper provides interior mutability so hosts can expose `&self`
/// primitives, as nested call frames re-enter the store.
#[derive(Debug, Default)]
pub struct Datastore {
    map: RefCell<BTreeMap<String, String>>,
}

impl Datastore {
    pub fn new() -> Self {
        Self::with_map(BTreeMap::new())
    }

    /// Builds a datastore pre-populated with composite-keyed entries,
    /// useful when restoring a snapshot in tests.
    pub fn with_map(initial: BTreeMap<String, String>) -> Self {
        Self {
            map: RefCell::new(initial),
        }
    }

    fn composite_key(domain: &str, key: &str) -> String {
        format!("{}:{}", domain, key)
    }

    pub fn get(&self, domain: &str, key: &str) -> Option<String> {
        let composite = Self::composite_key(domain, key);
        self.map.borrow().get(&composite).cloned()
    }

    /// Upsert: overwrites an existing entry, creates a missing one.
    pub fn set(&self, domain: &str, key: &str, value: &str) {
        let composite = Self::composite_key(domain, key);
        self.map.borrow_mut().insert(composite, value.to_string());
    }

    /// Removes an entry. Returns false when the key was absent.
    pub fn delete(&self, domain: &str, key: &str) -> bool {
        let composite = Self::composite_key(domain, key);
        self.map.borrow_mut().remove(&composite).is_some()
    }

    /// Concatenates `suffix` onto an existing value. Returns false when the
    /// key was absent and nothing was written.
    pub fn append(&self, domain: &str, key: &str, suffix: &str) -> bool {
        let composite = Self::composite_key(domain, key);
        let mut map = self.map.borrow_mut();
        match map.get_mut(&composite) {
            Some(value) => {
                value.push_str(suffix);
                true
            }
            None => false,
        }
    }

    pub fn has(&self, domain: &str, key: &str) -> bool {
        let composite = Self::composite_key(domain, key);
        self.map.borrow().contains_key(&composite)
    }

    /// Logs every entry at debug level.
    pub fn dump(&self) {
        for (key, value) in self.map.borrow().iter() {
            log::debug!("datastore entry {:<24} = {}", key, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_get() {
        let store = Datastore::new();
        store.set("a", "k", "v1");
        assert_eq!(store.get("a", "k").as_deref(), Some("v1"));
        store.set("a", "k", "v2");
        assert_eq!(store.get("a", "k").as_deref(), Some("v2"));
    }

    #[test]
    fn domains_are_isolated() {
        let store = Datastore::new();
        store.set("a", "k", "va");
        store.set("b", "k", "vb");
        assert_eq!(store.get("a", "k").as_deref(), Some("va"));
        assert_eq!(store.get("b", "k").as_deref(), Some("vb"));
        assert!(store.delete("a", "k"));
        assert!(store.has("b", "k"));
        assert!(!store.has("a", "k"));
    }

    #[test]
    fn delete_missing_reports_absence() {
        let store = Datastore::new();
        assert!(!store.delete("a", "k"));
    }

    #[test]
    fn append_requires_existing_key() {
        let store = Datastore::new();
        assert!(!store.append("a", "k", "x"));
        store.set("a", "k", "1");
        assert!(store.append("a", "k", "2"));
        assert_eq!(store.get("a", "k").as_deref(), Some("12"));
    }
}
