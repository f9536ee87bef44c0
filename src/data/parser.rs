// ============================================================
// Layer 4 - CSV → DataFrame Reader
// ============================================================
// Reads an example CSV file into a typed polars DataFrame.
//
// The files carry no type information, so polars infers each
// column's type from ALL of its values (not just the first rows):
//
//   integers / floats   → Int64 / Float64
//   true / false        → Boolean
//   anything else       → String, then re-encoded as Categorical
//
// Missing markers follow what pandas treats as NA by default for
// these files: empty fields plus "NA", "N/A", "NaN", "nan", "null".
//
// Columns listed as ordered categories in the registry get their
// declared level order; values outside those levels become missing.
//
// Reference: polars user guide (CSV)
//            Rust Book §9 (Error Handling)

use std::path::Path;

use anyhow::{Context, Result};
use polars::prelude::*;

use crate::data::registry::OrderedCategory;
use crate::domain::frame::{ordered_categorical, to_categorical};

/// Field values read as missing, in addition to empty fields
const MISSING_MARKERS: &[&str] = &["NA", "N/A", "NaN", "nan", "null"];

/// Read a CSV file with a header row into a DataFrame.
pub fn read_csv(path: &Path, categories: &[OrderedCategory]) -> Result<DataFrame> {
    let null_values = NullValues::AllColumns(MISSING_MARKERS.iter().map(|m| (*m).into()).collect());

    let raw = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(None)
        .with_parse_options(CsvParseOptions::default().with_null_values(Some(null_values)))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .and_then(|reader| reader.finish())
        .with_context(|| format!("Cannot read CSV '{}'", path.display()))?;

    let frame = apply_categories(&raw, categories)?;

    for col in frame.get_columns() {
        tracing::debug!("Column '{}': {} ({} rows)", col.name(), col.dtype(), col.len());
    }
    Ok(frame)
}

/// Ordered categories where declared, first-seen categories for other text.
fn apply_categories(frame: &DataFrame, categories: &[OrderedCategory]) -> PolarsResult<DataFrame> {
    let columns = frame
        .get_columns()
        .iter()
        .map(|col| {
            let declared = categories.iter().find(|c| c.column == col.name().as_str());
            match (declared, col.dtype()) {
                (Some(category), _)      => ordered_categorical(col, category.levels),
                (None, DataType::String) => to_categorical(col),
                _                        => Ok(col.clone()),
            }
        })
        .collect::<PolarsResult<Vec<Column>>>()?;

    DataFrame::new(columns)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::{tempdir, TempDir};

    use crate::data::registry;
    use crate::domain::frame::{is_numeric, levels};

    const DIAMONDS_HEAD: &str = "\
carat,cut,color,clarity,depth,table,price,x,y,z
0.23,Ideal,E,SI2,61.5,55.0,326,3.95,3.98,2.43
0.21,Premium,E,SI1,59.8,61.0,326,3.89,3.84,2.31
0.23,Good,E,VS1,56.9,65.0,327,4.05,4.07,2.31
";

    fn write_csv(text: &str) -> (TempDir, std::path::PathBuf) {
        let dir  = tempdir().unwrap();
        let path = dir.path().join("data.csv");
        fs::write(&path, text).unwrap();
        (dir, path)
    }

    #[test]
    fn test_infers_numeric_and_categorical() {
        let (_dir, path) = write_csv(DIAMONDS_HEAD);
        let df = read_csv(&path, &[]).unwrap();

        assert_eq!(df.shape(), (3, 10));
        assert!(is_numeric(df.column("carat").unwrap().dtype()));
        assert!(is_numeric(df.column("price").unwrap().dtype()));
        assert!(matches!(df.column("cut").unwrap().dtype(), DataType::Categorical(..)));
    }

    #[test]
    fn test_applies_ordered_categories() {
        let (_dir, path) = write_csv(DIAMONDS_HEAD);
        let spec = registry::lookup("diamonds").unwrap();
        let df   = read_csv(&path, spec.categories).unwrap();

        let cut = levels(df.column("cut").unwrap()).unwrap();
        assert_eq!(cut.levels.len(), 5);
        // Ideal=0, Premium=1, Good=3 in the declared order
        assert_eq!(cut.codes, vec![Some(0), Some(1), Some(3)]);
    }

    #[test]
    fn test_missing_markers() {
        let (_dir, path) = write_csv("a,b\n1.5,x\nNA,\n,y\nnan,null\n");
        let df = read_csv(&path, &[]).unwrap();

        let a = df.column("a").unwrap();
        assert!(is_numeric(a.dtype()));
        assert_eq!(a.null_count(), 3);
        assert_eq!(df.column("b").unwrap().null_count(), 2);
    }

    #[test]
    fn test_mixed_column_is_categorical() {
        let (_dir, path) = write_csv("flag\n1\nyes\n");
        let df = read_csv(&path, &[]).unwrap();
        assert!(!is_numeric(df.column("flag").unwrap().dtype()));
    }

    #[test]
    fn test_header_only_gives_zero_rows() {
        let (_dir, path) = write_csv("a,b\n");
        let df = read_csv(&path, &[]).unwrap();
        assert_eq!(df.shape(), (0, 2));
    }

    #[test]
    fn test_empty_file_is_an_error() {
        let (_dir, path) = write_csv("");
        let err = read_csv(&path, &[]).unwrap_err();
        assert!(err.to_string().contains("data.csv"));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempdir().unwrap();
        assert!(read_csv(&dir.path().join("absent.csv"), &[]).is_err());
    }
}
