mod header;
mod profile;
mod section;

pub use header::{GlobalHeader, SubHeader};
pub use profile::{Name, Profile, StatusMessage};
pub use section::{Section, SectionType};
