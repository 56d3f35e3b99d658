use rand::RngCore;

use std::fmt;

use crate::error::{Result, SaveError};
use crate::{NOSPAM_LENGTH, PRIVATE_KEY_LENGTH, PUBLIC_KEY_LENGTH};

// decode a hex string into exactly N bytes
fn decode_fixed<const N: usize>(
    field: &'static str,
    s: &str,
) -> Result<[u8; N]> {
    let bytes = hex::decode(s.trim())
        .map_err(|source| SaveError::InvalidHex { field, source })?;

    bytes.as_slice().try_into().map_err(|_| {
        SaveError::InvalidLength {
            field,
            expected: N,
            actual: bytes.len(),
        }
    })
}

/// A long-term public key. The bytes are stored as given and are
/// never checked to be a valid curve point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PublicKey([u8; PUBLIC_KEY_LENGTH]);

impl PublicKey {
    pub fn from_bytes(bytes: [u8; PUBLIC_KEY_LENGTH]) -> Self {
        PublicKey(bytes)
    }

    pub fn from_hex(s: &str) -> Result<Self> {
        decode_fixed("public key", s).map(PublicKey)
    }

    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_LENGTH] {
        &self.0
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", hex::encode_upper(self.0))
    }
}

/// A long-term private key, written next to its public key.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct PrivateKey([u8; PRIVATE_KEY_LENGTH]);

impl PrivateKey {
    pub fn from_bytes(bytes: [u8; PRIVATE_KEY_LENGTH]) -> Self {
        PrivateKey(bytes)
    }

    pub fn from_hex(s: &str) -> Result<Self> {
        decode_fixed("private key", s).map(PrivateKey)
    }

    pub fn as_bytes(&self) -> &[u8; PRIVATE_KEY_LENGTH] {
        &self.0
    }
}

// keep key material out of logs
impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("PrivateKey(..)")
    }
}

/// The anti-spam value stored in front of the key pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Nospam([u8; NOSPAM_LENGTH]);

impl Nospam {
    pub fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        let mut bytes = [0u8; NOSPAM_LENGTH];
        rng.fill_bytes(&mut bytes);
        Nospam(bytes)
    }

    pub fn from_bytes(bytes: [u8; NOSPAM_LENGTH]) -> Self {
        Nospam(bytes)
    }

    pub fn from_hex(s: &str) -> Result<Self> {
        decode_fixed("nospam", s).map(Nospam)
    }

    pub fn as_bytes(&self) -> &[u8; NOSPAM_LENGTH] {
        &self.0
    }
}

impl fmt::Display for Nospam {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", hex::encode_upper(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn public_key_from_hex() {
        let key = PublicKey::from_hex(&"11".repeat(32)).unwrap();
        assert_eq!(key.as_bytes(), &[0x11; 32]);
    }

    #[test]
    fn hex_is_case_insensitive() {
        let upper = PrivateKey::from_hex(&"AB".repeat(32)).unwrap();
        let lower = PrivateKey::from_hex(&"ab".repeat(32)).unwrap();
        assert_eq!(upper, lower);
    }

    #[test]
    fn wrong_key_length_is_rejected() {
        for len in [31, 33] {
            let err =
                PublicKey::from_hex(&"11".repeat(len)).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InputLength);

            let err =
                PrivateKey::from_hex(&"22".repeat(len)).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InputLength);
        }
    }

    #[test]
    fn non_hex_is_rejected() {
        let mut s = "11".repeat(31);
        s.push_str("1G");
        let err = PublicKey::from_hex(&s).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InputFormat);

        let err = PrivateKey::from_hex("123").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InputFormat);
    }

    #[test]
    fn private_key_debug_hides_bytes() {
        let key = PrivateKey::from_bytes([0x22; 32]);
        assert_eq!(format!("{:?}", key), "PrivateKey(..)");
    }

    #[test]
    fn nospam() {
        let mut rng = StdRng::seed_from_u64(7);
        let a = Nospam::random(&mut rng);
        let mut rng = StdRng::seed_from_u64(7);
        let b = Nospam::random(&mut rng);
        assert_eq!(a, b);

        let nospam = Nospam::from_hex("DEADBEEF").unwrap();
        assert_eq!(nospam.as_bytes(), &[0xDE, 0xAD, 0xBE, 0xEF]);
        assert_eq!(nospam.to_string(), "DEADBEEF");

        let err = Nospam::from_hex("DEADBE").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InputLength);
    }
}
