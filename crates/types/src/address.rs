use core::fmt;

use crate::error::{Error, Result};

pub const ADDRESS_LEN: usize = 32;

/// Opaque identifier of an account or contract.
///
/// Two lossless representations exist: the human-readable encoded string
/// (`"A"` followed by the base58 of the payload) and the canonical byte
/// string used at the host boundary. No ordering is defined between
/// addresses; equality is structural.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address(pub [u8; ADDRESS_LEN]);

impl Address {
    pub fn new(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }

    /// Parses the human-readable encoded form.
    pub fn from_encoded_string(s: &str) -> Result<Self> {
        let body = s
            .strip_prefix('A')
            .ok_or_else(|| Error::InvalidEncoding(s.to_string()))?;
        let raw = bs58::decode(body)
            .into_vec()
            .map_err(|_| Error::InvalidEncoding(s.to_string()))?;
        Self::from_byte_string(&raw).map_err(|_| Error::InvalidEncoding(s.to_string()))
    }

    pub fn to_encoded_string(&self) -> String {
        format!("A{}", bs58::encode(&self.0).into_string())
    }

    /// Decodes the canonical byte-string form used when crossing into host
    /// primitives. This is the only sanctioned byte-level conversion; no
    /// other component manipulates address bytes directly.
    pub fn from_byte_string(raw: &[u8]) -> Result<Self> {
        let bytes: [u8; ADDRESS_LEN] = raw
            .try_into()
            .map_err(|_| Error::InvalidEncoding(hex::encode(raw)))?;
        Ok(Self(bytes))
    }

    pub fn to_byte_string(&self) -> Vec<u8> {
        self.0.to_vec()
    }

    pub fn to_bytes(&self) -> [u8; ADDRESS_LEN] {
        self.0
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_encoded_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_string_round_trip() {
        let a = Address::new([7u8; ADDRESS_LEN]);
        let decoded = Address::from_byte_string(&a.to_byte_string()).unwrap();
        assert_eq!(a, decoded);
    }

    #[test]
    fn encoded_string_round_trip() {
        let a = Address::new([0xab; ADDRESS_LEN]);
        let s = a.to_encoded_string();
        let parsed = Address::from_encoded_string(&s).unwrap();
        assert_eq!(a, parsed);
        assert_eq!(parsed.to_encoded_string(), s);
    }

    #[test]
    fn missing_prefix_is_rejected() {
        let body = bs58::encode(&[1u8; ADDRESS_LEN]).into_string();
        assert!(matches!(
            Address::from_encoded_string(&body),
            Err(Error::InvalidEncoding(_))
        ));
    }

    #[test]
    fn non_base58_body_is_rejected() {
        // '0' and 'l' are not part of the base58 alphabet.
        assert!(matches!(
            Address::from_encoded_string("A0l0l0l0l"),
            Err(Error::InvalidEncoding(_))
        ));
    }

    #[test]
    fn wrong_payload_length_is_rejected() {
        let short = format!("A{}", bs58::encode(&[1u8; 8]).into_string());
        assert!(matches!(
            Address::from_encoded_string(&short),
            Err(Error::InvalidEncoding(_))
        ));
        assert!(matches!(
            Address::from_byte_string(&[1u8; 8]),
            Err(Error::InvalidEncoding(_))
        ));
    }

    #[test]
    fn empty_string_is_rejected() {
        assert!(matches!(
            Address::from_encoded_string(""),
            Err(Error::InvalidEncoding(_))
        ));
    }
}
