//! Dataset loading from delimited text
//!
//! Header must name exactly the feature columns plus `target`, in any order.
//! Columns are reordered into `FEATURE_LAYOUT` order on load.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use ndarray::{Array1, Array2};

use super::DatasetError;
use crate::logic::features::layout::feature_index;
use crate::logic::features::{FeatureRecord, FEATURE_COUNT, FEATURE_LAYOUT, TARGET_COLUMN};

/// Labelled feature matrix
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    /// rows × FEATURE_COUNT, columns in layout order
    pub features: Array2<f64>,
    /// 0.0 = no disease, 1.0 = disease
    pub labels: Array1<f64>,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Number of rows labelled as disease
    pub fn positives(&self) -> usize {
        self.labels.iter().filter(|&&y| y > 0.5).count()
    }

    /// Row `i` as a typed record
    pub fn row(&self, i: usize) -> Option<FeatureRecord> {
        if i >= self.len() {
            return None;
        }
        let mut values = [0.0; FEATURE_COUNT];
        for (dst, src) in values.iter_mut().zip(self.features.row(i).iter()) {
            *dst = *src;
        }
        Some(FeatureRecord::from_vector(&values))
    }

    /// New dataset made of the given rows, in the given order
    pub fn select(&self, indices: &[usize]) -> Dataset {
        Dataset {
            features: self.features.select(ndarray::Axis(0), indices),
            labels: self.labels.select(ndarray::Axis(0), indices),
        }
    }
}

/// Load a dataset from a CSV file
pub fn load_csv(path: &Path) -> Result<Dataset, DatasetError> {
    log::info!("Loading dataset from: {}", path.display());

    let file = File::open(path)?;
    let dataset = load_csv_from_reader(file)?;

    log::info!(
        "Dataset loaded: {} rows ({} positive, {} negative)",
        dataset.len(),
        dataset.positives(),
        dataset.len() - dataset.positives()
    );

    Ok(dataset)
}

/// Load a dataset from any reader producing CSV text
pub fn load_csv_from_reader<R: Read>(reader: R) -> Result<Dataset, DatasetError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let columns = resolve_columns(&headers)?;

    let mut values: Vec<f64> = Vec::new();
    let mut labels: Vec<f64> = Vec::new();

    for (i, result) in csv_reader.records().enumerate() {
        let row = i + 1;
        let record = result?;

        let mut features = [0.0f64; FEATURE_COUNT];
        let mut label = None;

        for (cell, column) in record.iter().zip(columns.iter()) {
            let value: f64 = cell.parse().map_err(|_| DatasetError::Parse {
                row,
                column: column.name().to_string(),
                value: cell.to_string(),
            })?;

            if !value.is_finite() {
                return Err(DatasetError::Parse {
                    row,
                    column: column.name().to_string(),
                    value: cell.to_string(),
                });
            }

            match column {
                Column::Feature(idx) => features[*idx] = value,
                Column::Target => label = Some(value),
            }
        }

        let label = match label {
            Some(v) if v == 0.0 || v == 1.0 => v,
            Some(v) => return Err(DatasetError::InvalidLabel { row, value: v }),
            None => return Err(DatasetError::Schema(format!("row {} has no target value", row))),
        };

        values.extend_from_slice(&features);
        labels.push(label);
    }

    if labels.is_empty() {
        return Err(DatasetError::Empty);
    }

    let rows = labels.len();
    let features = Array2::from_shape_vec((rows, FEATURE_COUNT), values)
        .map_err(|e| DatasetError::Schema(format!("shape error: {}", e)))?;

    Ok(Dataset {
        features,
        labels: Array1::from_vec(labels),
    })
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Column {
    Feature(usize),
    Target,
}

impl Column {
    fn name(&self) -> &'static str {
        match self {
            Column::Feature(idx) => FEATURE_LAYOUT[*idx],
            Column::Target => TARGET_COLUMN,
        }
    }
}

/// Map each header cell to its destination, rejecting anything but the exact schema
fn resolve_columns(headers: &csv::StringRecord) -> Result<Vec<Column>, DatasetError> {
    let mut columns = Vec::with_capacity(headers.len());
    let mut seen = [false; FEATURE_COUNT];
    let mut has_target = false;

    for name in headers.iter() {
        if name == TARGET_COLUMN {
            if has_target {
                return Err(DatasetError::Schema(format!("duplicate column '{}'", name)));
            }
            has_target = true;
            columns.push(Column::Target);
            continue;
        }

        let idx = feature_index(name)
            .ok_or_else(|| DatasetError::Schema(format!("unknown column '{}'", name)))?;

        if seen[idx] {
            return Err(DatasetError::Schema(format!("duplicate column '{}'", name)));
        }
        seen[idx] = true;
        columns.push(Column::Feature(idx));
    }

    let missing: Vec<&str> = FEATURE_LAYOUT
        .iter()
        .zip(seen.iter())
        .filter(|(_, present)| !**present)
        .map(|(name, _)| *name)
        .collect();

    if !missing.is_empty() {
        return Err(DatasetError::Schema(format!("missing columns: {}", missing.join(", "))));
    }
    if !has_target {
        return Err(DatasetError::Schema(format!("missing label column '{}'", TARGET_COLUMN)));
    }

    Ok(columns)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "age,sex,cp,trestbps,chol,fbs,restecg,thalach,exang,oldpeak,slope,ca,thal,target";

    fn parse(body: &str) -> Result<Dataset, DatasetError> {
        load_csv_from_reader(body.as_bytes())
    }

    #[test]
    fn test_load_rows_in_layout_order() {
        let csv = format!(
            "{}\n63,1,3,145,233,1,0,150,0,2.3,0,0,1,1\n41,0,1,130,204,0,0,172,0,1.4,2,0,2,0\n",
            HEADER
        );
        let ds = parse(&csv).unwrap();

        assert_eq!(ds.len(), 2);
        assert_eq!(ds.positives(), 1);
        assert_eq!(ds.features[[0, 4]], 233.0);
        assert_eq!(ds.row(1).unwrap().thalach, 172);
        assert!(ds.row(2).is_none());
    }

    #[test]
    fn test_reordered_columns_are_mapped_by_name() {
        let csv = "target,thal,ca,slope,oldpeak,exang,thalach,restecg,fbs,chol,trestbps,cp,sex,age\n\
                   1,1,0,0,2.3,0,150,0,1,233,145,3,1,63\n";
        let ds = parse(csv).unwrap();
        let row = ds.row(0).unwrap();

        assert_eq!(row.age, 63);
        assert_eq!(row.chol, 233);
        assert_eq!(row.oldpeak, 2.3);
        assert_eq!(ds.labels[0], 1.0);
    }

    #[test]
    fn test_missing_column_is_schema_error() {
        let csv = "age,sex,target\n63,1,1\n";
        assert!(matches!(parse(csv), Err(DatasetError::Schema(_))));
    }

    #[test]
    fn test_unknown_column_is_schema_error() {
        let csv = format!("{},extra\n63,1,3,145,233,1,0,150,0,2.3,0,0,1,1,9\n", HEADER);
        assert!(matches!(parse(&csv), Err(DatasetError::Schema(_))));
    }

    #[test]
    fn test_non_numeric_cell() {
        let csv = format!("{}\n63,1,3,145,abc,1,0,150,0,2.3,0,0,1,1\n", HEADER);
        match parse(&csv) {
            Err(DatasetError::Parse { row, column, .. }) => {
                assert_eq!(row, 1);
                assert_eq!(column, "chol");
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_label() {
        let csv = format!("{}\n63,1,3,145,233,1,0,150,0,2.3,0,0,1,2\n", HEADER);
        assert!(matches!(parse(&csv), Err(DatasetError::InvalidLabel { row: 1, .. })));
    }

    #[test]
    fn test_empty_dataset() {
        assert!(matches!(parse(&format!("{}\n", HEADER)), Err(DatasetError::Empty)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_csv(&dir.path().join("nope.csv"));
        assert!(matches!(result, Err(DatasetError::Io(_))));
    }

    #[test]
    fn test_select_rows() {
        let csv = format!(
            "{}\n63,1,3,145,233,1,0,150,0,2.3,0,0,1,1\n41,0,1,130,204,0,0,172,0,1.4,2,0,2,0\n",
            HEADER
        );
        let ds = parse(&csv).unwrap();
        let picked = ds.select(&[1]);

        assert_eq!(picked.len(), 1);
        assert_eq!(picked.row(0).unwrap().age, 41);
    }
}
