// src/file/dataset.rs
use std::fs::File;
use std::io::Read;
use std::path::Path;
use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, info};

use crate::dataset::{
    Dataset, DataLoadError, LaunchRecord, Outcome,
    BOOSTER_COLUMN, CLASS_COLUMN, PAYLOAD_COLUMN, REQUIRED_COLUMNS, SITE_COLUMN,
};

/// Positions of the required columns within the header row.
#[derive(Debug, Clone, Copy)]
struct ColumnIndex {
    site: usize,
    payload: usize,
    class: usize,
    booster: usize,
}

#[derive(Debug)]
pub struct DatasetFileHandler;

impl DatasetFileHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn load(&self, path: &Path) -> Result<Dataset, DataLoadError> {
        let file = File::open(path).map_err(|source| DataLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let dataset = self.load_from_reader(file, path)?;
        info!(
            path = %path.display(),
            rows = dataset.len(),
            sites = dataset.sites().len(),
            min_payload = dataset.min_payload(),
            max_payload = dataset.max_payload(),
            "loaded launch dataset"
        );
        Ok(dataset)
    }

    /// Parses CSV content from any reader. `path` is only used in error values.
    pub fn load_from_reader<R: Read>(&self, reader: R, path: &Path) -> Result<Dataset, DataLoadError> {
        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .from_reader(reader);

        let headers = reader.headers()
            .map_err(|e| malformed(path, 0, format!("unreadable header: {}", e)))?
            .clone();
        let columns = resolve_columns(&headers, path)?;
        debug!(?headers, "resolved dataset columns");

        let mut records = Vec::new();
        for (i, row) in reader.records().enumerate() {
            let row_number = i + 1;
            let row = row.map_err(|e| malformed(path, row_number, e.to_string()))?;
            records.push(parse_row(&row, columns, path, row_number)?);
        }

        Dataset::from_records(records).ok_or_else(|| DataLoadError::Empty {
            path: path.to_path_buf(),
        })
    }
}

fn malformed(path: &Path, row: usize, reason: String) -> DataLoadError {
    DataLoadError::Malformed {
        path: path.to_path_buf(),
        row,
        reason,
    }
}

fn resolve_columns(headers: &StringRecord, path: &Path) -> Result<ColumnIndex, DataLoadError> {
    let position = |name: &str| {
        headers.iter().position(|h| h == name).ok_or_else(|| DataLoadError::MissingColumn {
            path: path.to_path_buf(),
            column: name.to_string(),
        })
    };

    // Report the first missing column in declaration order
    for column in REQUIRED_COLUMNS {
        position(column)?;
    }

    Ok(ColumnIndex {
        site: position(SITE_COLUMN)?,
        payload: position(PAYLOAD_COLUMN)?,
        class: position(CLASS_COLUMN)?,
        booster: position(BOOSTER_COLUMN)?,
    })
}

fn parse_row(row: &StringRecord, columns: ColumnIndex, path: &Path, row_number: usize) -> Result<LaunchRecord, DataLoadError> {
    let field = |index: usize, name: &str| {
        row.get(index)
            .ok_or_else(|| malformed(path, row_number, format!("missing value for '{}'", name)))
    };

    let site = field(columns.site, SITE_COLUMN)?;
    if site.is_empty() {
        return Err(malformed(path, row_number, format!("empty '{}'", SITE_COLUMN)));
    }

    let payload_text = field(columns.payload, PAYLOAD_COLUMN)?;
    let payload: f64 = payload_text.parse()
        .map_err(|_| malformed(path, row_number, format!("invalid payload mass '{}'", payload_text)))?;
    if !payload.is_finite() || payload < 0.0 {
        return Err(malformed(path, row_number, format!("payload mass must be a non-negative number, got {}", payload)));
    }

    // Accept "1" as well as "1.0" since exported frames often write integers as floats
    let class_text = field(columns.class, CLASS_COLUMN)?;
    let outcome = class_text.parse::<f64>().ok()
        .filter(|v| v.fract() == 0.0)
        .and_then(|v| Outcome::from_class(v as i64))
        .ok_or_else(|| malformed(path, row_number, format!("class must be 0 or 1, got '{}'", class_text)))?;

    let booster = field(columns.booster, BOOSTER_COLUMN)?;

    Ok(LaunchRecord::new(site, payload, outcome, booster))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = "\
,Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category
0,1,CCAFS LC-40,0,0.0,F9 v1.0  B0003,v1.0
1,2,CCAFS LC-40,0,0.0,F9 v1.0  B0004,v1.0
2,3,CCAFS LC-40,0,525.0,F9 v1.0  B0005,v1.0
3,4,VAFB SLC-4E,1,500.0,F9 v1.1  B1003,v1.1
4,5,KSC LC-39A,1,9600.0,F9 FT B1029.2,FT
";

    fn load_str(content: &str) -> Result<Dataset, DataLoadError> {
        DatasetFileHandler::new().load_from_reader(content.as_bytes(), Path::new("test.csv"))
    }

    #[test]
    fn test_load_sample() {
        let dataset = load_str(SAMPLE).unwrap();
        assert_eq!(dataset.len(), 5);
        assert_eq!(dataset.min_payload(), 0.0);
        assert_eq!(dataset.max_payload(), 9600.0);
        assert_eq!(dataset.sites(), &[
            "CCAFS LC-40".to_string(),
            "VAFB SLC-4E".to_string(),
            "KSC LC-39A".to_string(),
        ]);

        let fourth = &dataset.records()[3];
        assert_eq!(fourth.site, "VAFB SLC-4E");
        assert_eq!(fourth.payload_mass_kg, 500.0);
        assert_eq!(fourth.outcome, Outcome::Success);
        assert_eq!(fourth.booster_category, "v1.1");
        assert_eq!(fourth.index, 3);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let dataset = DatasetFileHandler::new().load(file.path()).unwrap();
        assert_eq!(dataset.len(), 5);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = DatasetFileHandler::new().load(&dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, DataLoadError::Io { .. }));
    }

    #[test]
    fn test_missing_column() {
        let err = load_str("Launch Site,class,Payload Mass (kg)\nA,1,100\n").unwrap_err();
        match err {
            DataLoadError::MissingColumn { column, .. } => assert_eq!(column, BOOSTER_COLUMN),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_invalid_class() {
        let err = load_str("Launch Site,class,Payload Mass (kg),Booster Version Category\nA,1,100,FT\nA,2,100,FT\n").unwrap_err();
        match err {
            DataLoadError::Malformed { row, .. } => assert_eq!(row, 2),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_float_class_accepted() {
        let dataset = load_str("Launch Site,class,Payload Mass (kg),Booster Version Category\nA,1.0,100,FT\nA,0.0,200,FT\n").unwrap();
        assert_eq!(dataset.records()[0].outcome, Outcome::Success);
        assert_eq!(dataset.records()[1].outcome, Outcome::Failure);
    }

    #[test]
    fn test_negative_payload() {
        let err = load_str("Launch Site,class,Payload Mass (kg),Booster Version Category\nA,1,-5,FT\n").unwrap_err();
        assert!(matches!(err, DataLoadError::Malformed { row: 1, .. }));
    }

    #[test]
    fn test_non_numeric_payload() {
        let err = load_str("Launch Site,class,Payload Mass (kg),Booster Version Category\nA,1,heavy,FT\n").unwrap_err();
        assert!(matches!(err, DataLoadError::Malformed { row: 1, .. }));
    }

    #[test]
    fn test_ragged_row() {
        let err = load_str("Launch Site,class,Payload Mass (kg),Booster Version Category\nA,1\n").unwrap_err();
        assert!(matches!(err, DataLoadError::Malformed { row: 1, .. }));
    }

    #[test]
    fn test_header_only_is_empty() {
        let err = load_str("Launch Site,class,Payload Mass (kg),Booster Version Category\n").unwrap_err();
        assert!(matches!(err, DataLoadError::Empty { .. }));
    }
}
