use tracing::debug;

use std::fs::File;
use std::io::{Result as IoResult, Write};
use std::path::Path;

pub trait Saveable {
    fn save<O: Write>(&self, writer: O) -> IoResult<()>;

    // create or truncate the file; a failed write leaves
    // whatever was flushed in place
    fn save_to_file<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> IoResult<()> {
        debug!("Writing {}", path.as_ref().display());
        let mut file = File::create(&path)?;
        self.save(&mut file)?;
        file.flush()
    }
}
