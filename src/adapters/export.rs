use crate::core::ChartRecord;
use crate::utils::error::Result;
use std::io::Write;
use std::path::Path;

/// Writes chart records as `name,quantity` CSV with a header row.
pub fn write_records_csv<W: Write>(records: &[ChartRecord], out: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn export_records_csv<P: AsRef<Path>>(records: &[ChartRecord], path: P) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let file = std::fs::File::create(path)?;
    write_records_csv(records, file)?;
    tracing::debug!("Exported {} records to {}", records.len(), path.display());
    Ok(())
}
