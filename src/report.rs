//! Comma separated rendering of a [TimeMatrix].
//!
//! The table has a `Size` column followed by one `<container>/<operation>` column per pair seen
//! in any bucket, then one row per bucket holding integer nanoseconds:
//!
//! ```text
//! Size,DLL/Insert at the back,Vector/Insert at the back
//! 250,5123,4012
//! 500,5630,3987
//! ```
//!
//! A bucket that lacks one of the columns leaves that cell empty.

use core::fmt;
use std::io;

use crate::matrix::TimeMatrix;

/// Writes `matrix` as a comma separated table. An empty matrix writes nothing.
pub fn write_csv<W: io::Write>(matrix: &TimeMatrix, mut writer: W) -> io::Result<()> {
    write!(writer, "{matrix}")?;
    writer.flush()
}

impl fmt::Display for TimeMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return Ok(());
        }

        let columns = self.columns();

        f.write_str("Size")?;
        for (container, operation) in &columns {
            write!(f, ",{container}/{operation}")?;
        }
        f.write_str("\n")?;

        for (bucket, containers) in self.iter() {
            write!(f, "{bucket}")?;
            for (container, operation) in &columns {
                let elapsed = containers.get(*container).and_then(|operations| operations.get(*operation));
                match elapsed {
                    Some(elapsed) => write!(f, ",{}", elapsed.as_nanos())?,
                    None => f.write_str(",")?,
                }
            }
            f.write_str("\n")?;
        }

        Ok(())
    }
}

// TESTS
// ================================================================================================
