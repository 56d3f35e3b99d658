use rand::RngCore;
use tracing::debug;

use std::io::{Result as IoResult, Write};
use std::path::Path;

use super::{GlobalHeader, Section};
use crate::crypto::{Nospam, PrivateKey, PublicKey};
use crate::error::{Result, SaveError};
use crate::util::Saveable;
use crate::{DEFAULT_STATUS_MESSAGE, MAX_NAME_LENGTH};

/// Display name, at most [`MAX_NAME_LENGTH`] bytes of UTF-8.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Name(String);

impl Name {
    pub fn new(name: &str) -> Result<Self> {
        if name.len() > MAX_NAME_LENGTH {
            return Err(SaveError::TooLong {
                field: "name",
                max: MAX_NAME_LENGTH,
                actual: name.len(),
            });
        }
        Ok(Name(name.to_string()))
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusMessage(String);

impl StatusMessage {
    pub fn new(message: &str) -> Result<Self> {
        if u32::try_from(message.len()).is_err() {
            return Err(SaveError::TooLong {
                field: "status message",
                max: u32::MAX as usize,
                actual: message.len(),
            });
        }
        Ok(StatusMessage(message.to_string()))
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl Default for StatusMessage {
    fn default() -> Self {
        StatusMessage(DEFAULT_STATUS_MESSAGE.to_string())
    }
}

/// A minimal messenger profile: keys, name and status message.
///
/// Serializes to the global header followed by the nospam/keys,
/// name and status message sections, in that order and with no
/// end marker. Everything else a full profile carries (DHT nodes,
/// friends, relays) is left for the client to add.
#[derive(Clone, Debug)]
pub struct Profile {
    header: GlobalHeader,
    sections: [Section; 3],
}

impl Profile {
    pub fn new(
        nospam: Nospam,
        public_key: PublicKey,
        private_key: PrivateKey,
        name: Name,
        status_message: StatusMessage,
    ) -> Self {
        Profile {
            header: GlobalHeader::new(),
            sections: [
                Section::nospam_keys(
                    &nospam,
                    &public_key,
                    &private_key,
                ),
                Section::name(&name),
                Section::status_message(&status_message),
            ],
        }
    }

    // build a profile with a fresh nospam drawn from `rng`
    pub fn with_random_nospam<R: RngCore + ?Sized>(
        rng: &mut R,
        public_key: PublicKey,
        private_key: PrivateKey,
        name: Name,
        status_message: StatusMessage,
    ) -> Self {
        Profile::new(
            Nospam::random(rng),
            public_key,
            private_key,
            name,
            status_message,
        )
    }

    pub fn header(&self) -> &GlobalHeader {
        &self.header
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn encoded_len(&self) -> usize {
        GlobalHeader::SIZE
            + self
                .sections
                .iter()
                .map(Section::encoded_len)
                .sum::<usize>()
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.encoded_len());
        bytes.extend_from_slice(&self.header.to_bytes());
        for section in &self.sections {
            bytes.extend_from_slice(&section.header().to_bytes());
            bytes.extend_from_slice(section.payload());
        }
        bytes
    }

    /// Write the profile to `path`, creating or truncating it.
    /// A write that fails partway leaves the bytes written so
    /// far in place.
    pub fn write_to_file<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> Result<()> {
        self.save_to_file(path)?;
        Ok(())
    }
}

impl Saveable for Profile {
    fn save<O: Write>(&self, mut writer: O) -> IoResult<()> {
        debug!(
            "Serializing profile: {} bytes",
            self.encoded_len()
        );
        writer.write_all(&self.header.to_bytes())?;
        for section in &self.sections {
            section.save(&mut writer)?;
        }
        Ok(())
    }
}
