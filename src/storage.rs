use crate::models::Dataset;
use anyhow::Result;
use csv::WriterBuilder;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Save a dataset's records as CSV with header.
pub fn save_csv<P: AsRef<Path>>(dataset: &Dataset, path: P) -> Result<()> {
    let mut wtr = WriterBuilder::new().from_path(path)?;
    wtr.serialize((&dataset.label_name, &dataset.value_name))?;
    for r in &dataset.records {
        wtr.serialize((&r.label, r.value))?;
    }
    wtr.flush()?;
    log::debug!("saved {} records as csv", dataset.records.len());
    Ok(())
}

/// Save a dataset's records as a pretty JSON array.
pub fn save_json<P: AsRef<Path>>(dataset: &Dataset, path: P) -> Result<()> {
    let mut f = File::create(path)?;
    let s = serde_json::to_string_pretty(&dataset.records)?;
    f.write_all(s.as_bytes())?;
    log::debug!("saved {} records as json", dataset.records.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasets::throughput_by_day;
    use tempfile::tempdir;

    #[test]
    fn write_csv_and_json() {
        let dir = tempdir().unwrap();
        let csvp = dir.path().join("x.csv");
        let jsonp = dir.path().join("x.json");
        let ds = throughput_by_day();
        save_csv(&ds, &csvp).unwrap();
        save_json(&ds, &jsonp).unwrap();

        let csv_text = std::fs::read_to_string(&csvp).unwrap();
        assert!(csv_text.starts_with("Day,Units"));
        assert!(csv_text.contains("Mon,44"));

        let json_text = std::fs::read_to_string(&jsonp).unwrap();
        let parsed: Vec<crate::models::DataRecord> = serde_json::from_str(&json_text).unwrap();
        assert_eq!(parsed.len(), ds.len());
    }
}
