pub mod address;
pub use address::{ADDRESS_LEN, Address};

pub mod slot;
pub use slot::Slot;

pub mod error;
pub use error::{Error, Result};
