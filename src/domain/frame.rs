// ============================================================
// Layer 3 - Tables
// ============================================================
// Datasets are held as polars DataFrames. This module adds the
// few things polars does not do the way an exploratory workflow
// expects:
//
//   - a "column not found" error that lists the available names
//   - ordered categories with a fixed level list, where values
//     outside the list become missing (diamond cut is ordered
//     Ideal > Premium > Very Good > Good > Fair, not alphabetically)
//   - a dense f64 matrix export where categoricals are encoded by
//     level code and missing values are NaN
//   - a printable preview of the first rows
//
// Column kinds after loading:
//   integer / float      → numeric, described with count/mean/std/...
//   Categorical          → codes into an ordered list of levels
//   String / Boolean     → treated as categorical when summarised
//
// Every reshaping operation builds a NEW frame; a loaded dataset
// is never mutated.
//
// Reference: polars user guide (DataFrame, Categorical data)

use ndarray::Array2;
use polars::prelude::*;
use serde::Serialize;

use crate::domain::error::FrameError;

pub use polars::prelude::DataFrame;

/// Categorical type used for every text column; codes follow first appearance.
pub fn categorical_dtype() -> DataType {
    DataType::Categorical(None, CategoricalOrdering::Physical)
}

/// Columns described with count / mean / std / quantiles
pub fn is_numeric(dtype: &DataType) -> bool {
    dtype.is_integer() || dtype.is_float()
}

/// Columns described with count / unique / top / freq
pub fn is_categorical(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Categorical(..) | DataType::String | DataType::Boolean
    )
}

pub fn column_names(df: &DataFrame) -> Vec<String> {
    df.get_column_names().iter().map(|n| n.to_string()).collect()
}

/// Fail with FrameError::ColumnNotFound unless `name` is a column of `df`.
pub fn require_column(df: &DataFrame, name: &str) -> Result<(), FrameError> {
    match df.get_column_index(name) {
        Some(_) => Ok(()),
        None => Err(FrameError::ColumnNotFound {
            name:      name.to_string(),
            available: column_names(df),
        }),
    }
}

/// Re-encode `col` as a categorical whose levels are exactly `levels`, in that order.
/// Values outside `levels` become missing, like pandas' Categorical.
///
/// Example:
///   ordered_categorical(["Good", "Bogus", "Ideal"], ["Ideal", "Good"])
///   → codes [Some(1), None, Some(0)], levels ["Ideal", "Good"]
pub fn ordered_categorical(col: &Column, levels: &[&str]) -> PolarsResult<Column> {
    let text   = col.cast(&DataType::String)?;
    let values = text.as_materialized_series().str()?;

    // Casting assigns codes in order of first appearance, so the declared
    // levels go in front and are sliced off again afterwards.
    let mut labels: Vec<Option<&str>> = levels.iter().map(|l| Some(*l)).collect();
    labels.extend(values.iter().map(|v| v.filter(|v| levels.contains(v))));

    let combined: StringChunked = labels.into_iter().collect();
    let coded = combined
        .with_name(col.name().clone())
        .into_series()
        .cast(&categorical_dtype())?;

    Ok(coded.slice(levels.len() as i64, col.len()).into())
}

/// Text columns (String, Boolean) as Categorical; categoricals pass through.
pub fn to_categorical(col: &Column) -> PolarsResult<Column> {
    match col.dtype() {
        DataType::Categorical(..) => Ok(col.clone()),
        DataType::String          => col.cast(&categorical_dtype()),
        _                         => col.cast(&DataType::String)?.cast(&categorical_dtype()),
    }
}

/// Level list and per-row codes of a categorical-like column.
#[derive(Debug, Clone, PartialEq)]
pub struct Levels {
    pub levels: Vec<String>,
    pub codes:  Vec<Option<u32>>,
}

pub fn levels(col: &Column) -> PolarsResult<Levels> {
    let col = to_categorical(col)?;
    let cat = col.as_materialized_series().categorical()?;
    let rev = cat.get_rev_map();

    Ok(Levels {
        levels: (0..rev.len() as u32).map(|code| rev.get(code).to_string()).collect(),
        codes:  cat.physical().iter().collect(),
    })
}

/// New frame holding the given rows, in the given order.
pub fn take_rows(df: &DataFrame, rows: &[usize]) -> PolarsResult<DataFrame> {
    let idx: Vec<IdxSize> = rows.iter().map(|&r| r as IdxSize).collect();
    df.take(&IdxCa::from_vec("row".into(), idx))
}

/// Dense rows × columns matrix. Categoricals are encoded by level code
/// and missing values are NaN, which is what gradient-boosting
/// libraries expect for native missing-value handling.
pub fn to_array2(df: &DataFrame) -> PolarsResult<Array2<f64>> {
    let mut matrix = Array2::from_elem(df.shape(), f64::NAN);

    for (j, col) in df.get_columns().iter().enumerate() {
        for (i, value) in numeric_values(col)?.into_iter().enumerate() {
            matrix[[i, j]] = value;
        }
    }
    Ok(matrix)
}

fn numeric_values(col: &Column) -> PolarsResult<Vec<f64>> {
    if matches!(col.dtype(), DataType::Categorical(..)) {
        let codes = col.as_materialized_series().categorical()?.physical();
        return Ok(codes.iter().map(|c| c.map_or(f64::NAN, f64::from)).collect());
    }

    let floats = col.cast(&DataType::Float64)?;
    let values = floats.as_materialized_series().f64()?;
    Ok(values.iter().map(|v| v.unwrap_or(f64::NAN)).collect())
}

// ─── Preview ──────────────────────────────────────────────────────────────────
/// The first rows of a table as display text; missing cells read "NaN".
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Preview {
    pub columns: Vec<String>,
    pub rows:    Vec<Vec<String>>,
}

pub fn preview(df: &DataFrame, n: usize) -> PolarsResult<Preview> {
    let head  = df.head(Some(n));
    let cells = head
        .get_columns()
        .iter()
        .map(cell_text)
        .collect::<PolarsResult<Vec<_>>>()?;

    // Column-major → row-major
    let rows = (0..head.height())
        .map(|row| cells.iter().map(|col| col[row].clone()).collect())
        .collect();

    Ok(Preview {
        columns: column_names(&head),
        rows,
    })
}

fn cell_text(col: &Column) -> PolarsResult<Vec<String>> {
    let text = col.cast(&DataType::String)?;
    let values = text.as_materialized_series().str()?;
    Ok(values
        .iter()
        .map(|v| v.unwrap_or("NaN").to_string())
        .collect())
}
