mod common;

use common::addr;
use host::MockHost;

#[test]
fn generated_events_are_recorded_in_order() {
    let host = MockHost::new(addr(1));
    sdk::print(&host, "hello");
    sdk::generate_event(&host, "first");
    sdk::generate_event(&host, "second");
    assert_eq!(host.events(), vec!["first".to_string(), "second".to_string()]);
}

#[test]
fn hash_is_deterministic_and_delegated() {
    let host = MockHost::new(addr(1));
    let digest = sdk::hash(&host, "data");
    assert_eq!(digest, sdk::hash(&host, "data"));
    assert_ne!(digest, sdk::hash(&host, "other"));
    // sha256 hex digest length in the mock host.
    assert_eq!(digest.len(), 64);
}

#[test]
fn signature_verify_accepts_only_the_matching_signature() {
    let host = MockHost::new(addr(1));
    let signature = host.sign("payload", "pubkey-1");

    assert!(sdk::signature_verify(&host, "payload", &signature, "pubkey-1"));
    assert!(!sdk::signature_verify(&host, "payload", &signature, "pubkey-2"));
    assert!(!sdk::signature_verify(&host, "tampered", &signature, "pubkey-1"));
}

#[test]
fn public_key_maps_to_a_stable_address() {
    let host = MockHost::new(addr(1));
    let first = sdk::address_from_public_key(&host, "pubkey-1").unwrap();
    let again = sdk::address_from_public_key(&host, "pubkey-1").unwrap();
    let other = sdk::address_from_public_key(&host, "pubkey-2").unwrap();

    assert_eq!(first, again);
    assert_ne!(first, other);
}

#[test]
fn unsafe_random_is_predictable_under_a_fixed_seed() {
    let host_a = MockHost::new(addr(1));
    let host_b = MockHost::new(addr(2));
    host_a.set_random_seed(99);
    host_b.set_random_seed(99);

    let draws_a: Vec<i64> = (0..4).map(|_| sdk::unsafe_random(&host_a)).collect();
    let draws_b: Vec<i64> = (0..4).map(|_| sdk::unsafe_random(&host_b)).collect();
    assert_eq!(draws_a, draws_b);
}
