use std::fmt;
use std::io::{Result as IoResult, Write};

use super::{Name, StatusMessage, SubHeader};
use crate::crypto::{Nospam, PrivateKey, PublicKey};
use crate::util::Saveable;
use crate::{NOSPAM_LENGTH, PRIVATE_KEY_LENGTH, PUBLIC_KEY_LENGTH};

/// Section type tags written by this crate. The state format
/// defines more (DHT, friends, TCP relays, ...) which a client
/// fills in on its first save.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u16)]
pub enum SectionType {
    NospamKeys = 1,
    Name = 4,
    StatusMessage = 5,
}

/// A sub-header together with the payload it describes.
#[derive(Clone, PartialEq, Eq)]
pub struct Section {
    header: SubHeader,
    payload: Vec<u8>,
}

impl Section {
    pub fn nospam_keys(
        nospam: &Nospam,
        public_key: &PublicKey,
        private_key: &PrivateKey,
    ) -> Self {
        let mut payload = Vec::with_capacity(
            NOSPAM_LENGTH + PUBLIC_KEY_LENGTH + PRIVATE_KEY_LENGTH,
        );
        payload.extend_from_slice(nospam.as_bytes());
        payload.extend_from_slice(public_key.as_bytes());
        payload.extend_from_slice(private_key.as_bytes());

        Section {
            header: SubHeader::new(
                SectionType::NospamKeys,
                payload.len() as u32,
            ),
            payload,
        }
    }

    pub fn name(name: &Name) -> Self {
        let payload = name.as_bytes().to_vec();
        Section {
            header: SubHeader::new(
                SectionType::Name,
                payload.len() as u32,
            ),
            payload,
        }
    }

    pub fn status_message(message: &StatusMessage) -> Self {
        let payload = message.as_bytes().to_vec();
        Section {
            header: SubHeader::new(
                SectionType::StatusMessage,
                payload.len() as u32,
            ),
            payload,
        }
    }

    pub fn header(&self) -> &SubHeader {
        &self.header
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    pub fn encoded_len(&self) -> usize {
        SubHeader::SIZE + self.payload.len()
    }
}

// payloads can hold key material, so only their size is shown
impl fmt::Debug for Section {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Section")
            .field("header", &self.header)
            .field("payload_len", &self.payload.len())
            .finish()
    }
}

impl Saveable for Section {
    fn save<O: Write>(&self, mut writer: O) -> IoResult<()> {
        writer.write_all(&self.header.to_bytes())?;
        writer.write_all(&self.payload)?;
        Ok(())
    }
}
