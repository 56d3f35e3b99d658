use super::SectionType;
use crate::{STATE_COOKIE_GLOBAL, STATE_COOKIE_TYPE};

/// The 8 bytes that open every state file: a reserved zero
/// word followed by the global cookie.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GlobalHeader {
    pub reserved: u32,
    pub cookie: u32,
}

impl GlobalHeader {
    pub const SIZE: usize = 8;

    pub fn new() -> Self {
        GlobalHeader {
            reserved: 0,
            cookie: STATE_COOKIE_GLOBAL,
        }
    }

    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut bytes = [0u8; Self::SIZE];
        bytes[0..4].copy_from_slice(&self.reserved.to_le_bytes());
        bytes[4..8].copy_from_slice(&self.cookie.to_le_bytes());
        bytes
    }
}

impl Default for GlobalHeader {
    fn default() -> Self {
        Self::new()
    }
}

/// Descriptor in front of each section payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubHeader {
    pub length: u32,
    pub section_type: SectionType,
    pub cookie: u16,
}

impl SubHeader {
    pub const SIZE: usize = 8;

    pub fn new(section_type: SectionType, length: u32) -> Self {
        SubHeader {
            length,
            section_type,
            cookie: STATE_COOKIE_TYPE,
        }
    }

    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut bytes = [0u8; Self::SIZE];
        bytes[0..4].copy_from_slice(&self.length.to_le_bytes());
        bytes[4..6].copy_from_slice(
            &(self.section_type as u16).to_le_bytes(),
        );
        bytes[6..8].copy_from_slice(&self.cookie.to_le_bytes());
        bytes
    }
}
