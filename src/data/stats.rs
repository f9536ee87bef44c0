// ============================================================
// Layer 4 - Descriptive Statistics ("describe")
// ============================================================
// The quick look you take at a dataset before modelling it.
//
// Numeric columns get the classic eight rows:
//
//   count   non-missing values
//   mean    arithmetic mean
//   std     sample standard deviation (divides by n - 1)
//   min
//   25%     quantiles, linear interpolation between the two
//   50%     closest ranks at position q * (n - 1) of the
//   75%     sorted values
//   max
//
// Categorical and text columns get count / unique / top / freq
// instead.
//
// When a table has at least one numeric column only the numeric
// columns are described; a purely categorical table falls back to
// the categorical summary. This mirrors pandas' DataFrame.describe.
//
// Undefined statistics (mean of nothing, std of one value) are NaN
// rather than errors: an all-missing column is legitimate data.
//
// Reference: polars user guide (Aggregations)
//            Rust Book §13 (Iterators)

use polars::prelude::*;
use serde::Serialize;

use crate::domain::frame::{is_categorical, is_numeric, levels, DataFrame};

/// Row labels of a numeric summary, in display order
pub const NUMERIC_STAT_LABELS: [&str; 8] = ["count", "mean", "std", "min", "25%", "50%", "75%", "max"];

/// Row labels of a categorical summary, in display order
pub const CATEGORICAL_STAT_LABELS: [&str; 4] = ["count", "unique", "top", "freq"];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NumericSummary {
    pub column: String,
    pub count:  usize,
    pub mean:   f64,
    pub std:    f64,
    pub min:    f64,
    pub q25:    f64,
    pub q50:    f64,
    pub q75:    f64,
    pub max:    f64,
}

impl NumericSummary {
    /// Values in the same order as NUMERIC_STAT_LABELS
    pub fn values(&self) -> [f64; 8] {
        [
            self.count as f64,
            self.mean,
            self.std,
            self.min,
            self.q25,
            self.q50,
            self.q75,
            self.max,
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoricalSummary {
    pub column: String,
    pub count:  usize,
    /// Distinct levels actually observed (not declared)
    pub unique: usize,
    /// Most frequent level; None when the column has no values
    pub top:    Option<String>,
    pub freq:   usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "columns", rename_all = "snake_case")]
pub enum Summary {
    Numeric(Vec<NumericSummary>),
    Categorical(Vec<CategoricalSummary>),
}

/// Summarise a frame the way DataFrame.describe() does by default.
pub fn describe(frame: &DataFrame) -> PolarsResult<Summary> {
    let numeric = describe_numeric(frame)?;
    if numeric.is_empty() {
        Ok(Summary::Categorical(describe_categorical(frame)?))
    } else {
        Ok(Summary::Numeric(numeric))
    }
}

/// One summary per numeric column, in column order.
pub fn describe_numeric(frame: &DataFrame) -> PolarsResult<Vec<NumericSummary>> {
    frame
        .get_columns()
        .iter()
        .filter(|col| is_numeric(col.dtype()))
        .map(summarise_numeric)
        .collect()
}

/// One summary per categorical or text column, in column order.
pub fn describe_categorical(frame: &DataFrame) -> PolarsResult<Vec<CategoricalSummary>> {
    frame
        .get_columns()
        .iter()
        .filter(|col| is_categorical(col.dtype()))
        .map(summarise_categorical)
        .collect()
}

fn summarise_numeric(col: &Column) -> PolarsResult<NumericSummary> {
    let floats = col.cast(&DataType::Float64)?;
    let values = floats.as_materialized_series().f64()?;

    let count    = values.len() - values.null_count();
    let nan      = f64::NAN;
    let quantile = |q: f64| -> PolarsResult<f64> {
        Ok(values.quantile(q, QuantileMethod::Linear)?.unwrap_or(nan))
    };

    Ok(NumericSummary {
        column: col.name().to_string(),
        count,
        mean: values.mean().unwrap_or(nan),
        // Sample standard deviation (ddof = 1) is undefined below two values
        std:  if count < 2 { nan } else { values.std(1).unwrap_or(nan) },
        min:  values.min().unwrap_or(nan),
        q25:  quantile(0.25)?,
        q50:  quantile(0.50)?,
        q75:  quantile(0.75)?,
        max:  values.max().unwrap_or(nan),
    })
}

fn summarise_categorical(col: &Column) -> PolarsResult<CategoricalSummary> {
    let lv = levels(col)?;

    let mut counts = vec![0usize; lv.levels.len()];
    for code in lv.codes.iter().flatten() {
        counts[*code as usize] += 1;
    }

    // Highest count wins; ties go to the lowest level code
    let top = counts
        .iter()
        .enumerate()
        .filter(|(_, n)| **n > 0)
        .max_by(|(ia, na), (ib, nb)| na.cmp(nb).then(ib.cmp(ia)));

    Ok(CategoricalSummary {
        column: col.name().to_string(),
        count:  counts.iter().sum(),
        unique: counts.iter().filter(|&&n| n > 0).count(),
        top:    top.map(|(code, _)| lv.levels[code].clone()),
        freq:   top.map_or(0, |(_, &n)| n),
    })
}
