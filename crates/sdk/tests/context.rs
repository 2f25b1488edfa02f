mod common;

use common::{addr, host_with_stack};
use host::MockHost;
use sdk::ExecutionContext;
use types::{Error, Slot};

#[test]
fn origin_frame_has_no_caller() {
    let host = MockHost::new(addr(1));
    let ctx = ExecutionContext::capture(&host).unwrap();

    assert!(matches!(ctx.caller(), Err(Error::NoCaller)));
    assert_eq!(*ctx.transaction_creator(), addr(1));
    assert_eq!(*ctx.current_address(), addr(1));
}

#[test]
fn creator_caller_and_current_on_three_frames() {
    let (a, b, c) = (addr(1), addr(2), addr(3));
    let host = host_with_stack(&[a, b, c]);
    let ctx = ExecutionContext::capture(&host).unwrap();

    assert_eq!(ctx.call_stack(), &[a, b, c]);
    assert_eq!(*ctx.transaction_creator(), a);
    assert_eq!(*ctx.caller().unwrap(), b);
    assert_eq!(*ctx.current_address(), c);
}

#[test]
fn creator_is_first_frame_at_any_depth() {
    let frames: Vec<_> = (1u8..=6).map(addr).collect();
    let host = host_with_stack(&frames);
    let ctx = ExecutionContext::capture(&host).unwrap();

    assert_eq!(*ctx.transaction_creator(), addr(1));
    assert_eq!(*ctx.caller().unwrap(), addr(5));
}

#[test]
fn snapshot_is_fixed_for_the_frame() {
    let (a, b) = (addr(1), addr(2));
    let host = host_with_stack(&[a, b]);
    let ctx = ExecutionContext::capture(&host).unwrap();

    host.push_frame(addr(3));
    assert_eq!(ctx.call_stack(), &[a, b]);
    assert_eq!(*ctx.current_address(), b);
}

#[test]
fn owned_addresses_include_the_origin() {
    let origin = addr(1);
    let host = MockHost::new(origin);
    let ctx = ExecutionContext::capture(&host).unwrap();

    assert!(ctx.owned_addresses().unwrap().contains(&origin));
}

#[test]
fn scalar_accessors_forward_to_the_host() {
    let host = MockHost::new(addr(1));
    host.set_call_coins(77);
    host.set_time(1_650_000_000);
    host.set_remaining_gas(123_456);
    host.set_slot(Slot::new(4, 7));

    let ctx = ExecutionContext::capture(&host).unwrap();
    assert_eq!(ctx.call_coins().unwrap(), 77);
    assert_eq!(ctx.current_time().unwrap(), 1_650_000_000);
    assert_eq!(ctx.remaining_gas().unwrap(), 123_456);
    assert_eq!(ctx.current_slot().unwrap(), Slot::new(4, 7));
}
