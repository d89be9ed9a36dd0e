//! Serializers for the final table.
//!
//! ```rust
//! use rankingrs::{sink, NormalizedRecord};
//!
//! let records = vec![NormalizedRecord {
//!     rank: 1,
//!     university: "Harvard University".into(),
//!     country: "United States".into(),
//!     score: "100.0".into(),
//!     enrollment: "21000".into(),
//! }];
//!
//! let mut out = Vec::new();
//! sink::write_csv(&records, &mut out).unwrap();
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "Rank,University,Country,Score,Enrollment\n1,Harvard University,United States,100.0,21000\n"
//! );
//! ```

use crate::error::Result;
use crate::record::NormalizedRecord;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Column headers, in output order.
pub const HEADERS: [&str; 5] = ["Rank", "University", "Country", "Score", "Enrollment"];

/// Write records as CSV with a header row. The header is written even when
/// there are no records.
pub fn write_csv<W: Write>(records: &[NormalizedRecord], writer: W) -> Result<()> {
    let mut csv = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    csv.write_record(HEADERS)?;
    for record in records {
        csv.serialize(record)?;
    }
    csv.flush()?;
    Ok(())
}

/// Write records as CSV to a file, creating or truncating it.
pub fn write_csv_file(records: &[NormalizedRecord], path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(path)?;
    write_csv(records, file)
}

/// Write records as a pretty-printed JSON array.
pub fn write_json<W: Write>(records: &[NormalizedRecord], mut writer: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, records)?;
    writeln!(writer)?;
    Ok(())
}
