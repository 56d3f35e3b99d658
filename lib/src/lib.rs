// magic cookie at the start of every messenger state file
pub const STATE_COOKIE_GLOBAL: u32 = 0x15ED_1B1F;
// cookie carried by every section sub-header
pub const STATE_COOKIE_TYPE: u16 = 0x01CE;
// length of a public key in bytes
pub const PUBLIC_KEY_LENGTH: usize = 32;
// length of a private key in bytes
pub const PRIVATE_KEY_LENGTH: usize = 32;
// length of the nospam value in bytes
pub const NOSPAM_LENGTH: usize = 4;
// longest display name this tool will write, in bytes
pub const MAX_NAME_LENGTH: usize = 32;
// status message written when none is given
pub const DEFAULT_STATUS_MESSAGE: &str = "New user";

pub mod crypto;
pub mod error;
pub mod types;
pub mod util;
