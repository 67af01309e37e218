//! Algorand account addresses.
//!
//! An address is a 32-byte ed25519 public key. Its canonical text form is the
//! unpadded, upper-case base32 encoding of the key followed by the last four
//! bytes of its SHA-512/256 digest, 58 characters in total.

use std::fmt;
use std::str::FromStr;

use base32ct::{Base32Unpadded, Encoding};
use sha2::{Digest, Sha512_256};

/// Length of the public key behind an address.
pub const PUBLIC_KEY_LENGTH: usize = 32;

const CHECKSUM_LENGTH: usize = 4;

/// Length of the canonical text form.
pub const ADDRESS_STRING_LENGTH: usize = 58;

/// Error returned when parsing an address from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddressError {
    #[error("address must be {ADDRESS_STRING_LENGTH} characters, got {0}")]
    InvalidLength(usize),
    #[error("address is not valid base32")]
    InvalidEncoding,
    #[error("address checksum does not match")]
    ChecksumMismatch,
}

/// An Algorand account address.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address([u8; PUBLIC_KEY_LENGTH]);

impl Address {
    /// The all-zero address.
    pub const ZERO: Address = Address([0; PUBLIC_KEY_LENGTH]);

    pub const fn new(public_key: [u8; PUBLIC_KEY_LENGTH]) -> Self {
        Self(public_key)
    }

    /// The raw public key.
    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_LENGTH] {
        &self.0
    }

    fn checksum(&self) -> [u8; CHECKSUM_LENGTH] {
        let digest = Sha512_256::digest(self.0);
        let mut checksum = [0u8; CHECKSUM_LENGTH];
        checksum.copy_from_slice(&digest[digest.len() - CHECKSUM_LENGTH..]);
        checksum
    }
}

impl From<[u8; PUBLIC_KEY_LENGTH]> for Address {
    fn from(public_key: [u8; PUBLIC_KEY_LENGTH]) -> Self {
        Self(public_key)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut raw = Vec::with_capacity(PUBLIC_KEY_LENGTH + CHECKSUM_LENGTH);
        raw.extend_from_slice(&self.0);
        raw.extend_from_slice(&self.checksum());
        f.write_str(&Base32Unpadded::encode_string(&raw).to_ascii_uppercase())
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({self})")
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != ADDRESS_STRING_LENGTH {
            return Err(AddressError::InvalidLength(s.len()));
        }
        let raw = Base32Unpadded::decode_vec(&s.to_ascii_lowercase())
            .map_err(|_| AddressError::InvalidEncoding)?;
        if raw.len() != PUBLIC_KEY_LENGTH + CHECKSUM_LENGTH {
            return Err(AddressError::InvalidEncoding);
        }

        let mut public_key = [0u8; PUBLIC_KEY_LENGTH];
        public_key.copy_from_slice(&raw[..PUBLIC_KEY_LENGTH]);
        let address = Address(public_key);
        if address.checksum()[..] != raw[PUBLIC_KEY_LENGTH..] {
            return Err(AddressError::ChecksumMismatch);
        }
        Ok(address)
    }
}

impl From<Address> for String {
    fn from(address: Address) -> Self {
        address.to_string()
    }
}

impl From<&Address> for String {
    fn from(address: &Address) -> Self {
        address.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ZERO_ADDRESS: &str = "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAY5HFKQ";

    #[test]
    fn zero_address_text_form() {
        assert_eq!(Address::ZERO.to_string(), ZERO_ADDRESS);
        assert_eq!(ZERO_ADDRESS.parse::<Address>(), Ok(Address::ZERO));
    }

    #[test]
    fn display_then_parse() {
        let address = Address::new([7u8; PUBLIC_KEY_LENGTH]);
        let text = address.to_string();
        assert_eq!(text.len(), ADDRESS_STRING_LENGTH);
        assert!(text.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
        assert_eq!(text.parse::<Address>(), Ok(address));
    }

    #[test]
    fn parse_accepts_lower_case() {
        let parsed: Address = ZERO_ADDRESS.to_ascii_lowercase().parse().expect("parse");
        assert_eq!(parsed, Address::ZERO);
    }

    #[test]
    fn parse_rejects_wrong_length() {
        assert_eq!(
            "ABC".parse::<Address>(),
            Err(AddressError::InvalidLength(3))
        );
    }

    #[test]
    fn parse_rejects_bad_checksum() {
        let tampered = format!("B{}", &ZERO_ADDRESS[1..]);
        assert_eq!(
            tampered.parse::<Address>(),
            Err(AddressError::ChecksumMismatch)
        );
    }

    #[test]
    fn parse_rejects_non_base32() {
        let garbage = "1".repeat(ADDRESS_STRING_LENGTH);
        assert_eq!(
            garbage.parse::<Address>(),
            Err(AddressError::InvalidEncoding)
        );
    }

    #[test]
    fn converts_into_string() {
        let text: String = Address::ZERO.into();
        assert_eq!(text, ZERO_ADDRESS);
    }
}
