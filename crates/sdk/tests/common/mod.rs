#![allow(dead_code)]

use host::MockHost;
use types::{ADDRESS_LEN, Address};

pub fn addr(tag: u8) -> Address {
    Address::new([tag; ADDRESS_LEN])
}

/// Builds a host whose call stack is pre-shaped to `frames`, origin first.
pub fn host_with_stack(frames: &[Address]) -> MockHost {
    let host = MockHost::new(frames[0]);
    for frame in &frames[1..] {
        host.push_frame(*frame);
    }
    host
}
