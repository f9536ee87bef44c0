// ============================================================
// Layer 1 - Console Rendering
// ============================================================
// Turns reports into the text printed on stdout. The layout
// follows what a pandas user expects to see:
//
//   (53940, 10)
//                 carat         depth  ...
//   count  53940.000000  53940.000000  ...
//   mean       0.797940     61.749405  ...
//
// Tables are laid out by tabled with a borderless style: the
// index column is left-aligned and data cells right-aligned.
// Summary statistics always show six decimals; undefined values
// print as NaN.
//
// All functions return Strings so they can be tested without
// capturing stdout.

use std::iter::once;

use tabled::{
    builder::Builder,
    settings::{object::Columns, Alignment, Modify, Style},
};

use crate::application::{explore_use_case::ExploreReport, split_use_case::SplitReport};
use crate::data::stats::{
    CategoricalSummary, NumericSummary, Summary, CATEGORICAL_STAT_LABELS, NUMERIC_STAT_LABELS,
};
use crate::domain::frame::Preview;

/// "(rows, columns)"
pub fn shape((rows, cols): (usize, usize)) -> String {
    format!("({rows}, {cols})")
}

pub fn explore_report(report: &ExploreReport) -> String {
    let mut out = shape(report.shape);
    out.push('\n');

    if let Some(preview) = &report.preview {
        out.push_str(&frame(preview));
        out.push('\n');
    }

    out.push_str(&summary(&report.summary));

    if let Some(categorical) = &report.categorical {
        out.push('\n');
        out.push_str(&categorical_summary(categorical));
    }
    out
}

pub fn split_report(report: &SplitReport) -> String {
    format!(
        "X_train: {}\nX_test:  {}\ny_train: {}\ny_test:  {}\n",
        shape(report.x_train_shape),
        shape(report.x_test_shape),
        shape(report.y_train_shape),
        shape(report.y_test_shape),
    )
}

pub fn summary(summary: &Summary) -> String {
    match summary {
        Summary::Numeric(rows)     => numeric_summary(rows),
        Summary::Categorical(rows) => categorical_summary(rows),
    }
}

pub fn numeric_summary(rows: &[NumericSummary]) -> String {
    let headers: Vec<String> = rows.iter().map(|r| r.column.clone()).collect();
    let index:   Vec<String> = NUMERIC_STAT_LABELS.iter().map(|l| l.to_string()).collect();

    // Transpose: one summary per column → one output line per statistic
    let values: Vec<[f64; 8]> = rows.iter().map(NumericSummary::values).collect();
    let cells: Vec<Vec<String>> = (0..NUMERIC_STAT_LABELS.len())
        .map(|stat| values.iter().map(|v| format_stat(v[stat])).collect())
        .collect();

    table(&headers, &index, &cells)
}

pub fn categorical_summary(rows: &[CategoricalSummary]) -> String {
    let headers: Vec<String> = rows.iter().map(|r| r.column.clone()).collect();
    let index:   Vec<String> = CATEGORICAL_STAT_LABELS.iter().map(|l| l.to_string()).collect();

    let cells: Vec<Vec<String>> = vec![
        rows.iter().map(|r| r.count.to_string()).collect(),
        rows.iter().map(|r| r.unique.to_string()).collect(),
        rows.iter().map(|r| r.top.clone().unwrap_or_else(|| "NaN".to_string())).collect(),
        rows.iter().map(|r| r.freq.to_string()).collect(),
    ];

    table(&headers, &index, &cells)
}

/// Render preview rows with a 0-based row index.
pub fn frame(preview: &Preview) -> String {
    let index: Vec<String> = (0..preview.rows.len()).map(|r| r.to_string()).collect();
    table(&preview.columns, &index, &preview.rows)
}

fn format_stat(v: f64) -> String {
    if v.is_nan() {
        "NaN".to_string()
    } else {
        format!("{v:.6}")
    }
}

/// Lay out `cells[row][col]` under `headers`, each row prefixed by `index[row]`.
fn table(headers: &[String], index: &[String], cells: &[Vec<String>]) -> String {
    let mut builder = Builder::default();
    builder.push_record(once(String::new()).chain(headers.iter().cloned()));
    for (label, row) in index.iter().zip(cells) {
        builder.push_record(once(label.clone()).chain(row.iter().cloned()));
    }

    let mut table = builder.build();
    table
        .with(Style::blank())
        .with(Modify::new(Columns::new(1..)).with(Alignment::right()));

    let mut out = table.to_string();
    out.push('\n');
    out
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::*;

    use crate::data::stats::describe_numeric;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_shape() {
        assert_eq!(shape((53940, 10)), "(53940, 10)");
    }

    #[test]
    fn test_table_alignment() {
        let headers = strings(&["a", "bb"]);
        let index   = strings(&["x", "yy"]);
        let cells   = vec![strings(&["1", "22"]), strings(&["333", "4"])];

        let text  = table(&headers, &index, &cells);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);

        // Right-aligned: "1" and the header "a" end where "333" ends
        let end_of_333 = lines[2].find("333").unwrap() + 2;
        assert_eq!(lines[1].find('1').unwrap(), end_of_333);
        assert_eq!(lines[0].find('a').unwrap(), end_of_333);

        // Index labels stay on the left
        assert!(lines[1].trim_start().starts_with('x'));
        assert!(lines[2].trim_start().starts_with("yy"));
    }

    #[test]
    fn test_numeric_summary_layout() {
        let df    = df!("price" => [326.0, 327.0]).unwrap();
        let text  = numeric_summary(&describe_numeric(&df).unwrap());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0].trim(), "price");
        assert!(lines[1].trim_start().starts_with("count"));
        assert!(lines[1].trim_end().ends_with("2.000000"));
        assert!(lines[2].trim_end().ends_with("326.500000"));
        assert!(lines[8].trim_start().starts_with("max"));
    }

    #[test]
    fn test_nan_statistics_print_as_nan() {
        let df = df!("x" => [1.0]).unwrap();
        let text = numeric_summary(&describe_numeric(&df).unwrap());
        let std_line = text.lines().nth(3).unwrap();
        assert!(std_line.trim_start().starts_with("std"));
        assert!(std_line.trim_end().ends_with("NaN"));
    }

    #[test]
    fn test_frame_preview() {
        let preview = Preview {
            columns: strings(&["carat", "cut"]),
            rows:    vec![strings(&["0.23", "Ideal"]), strings(&["NaN", "Premium"])],
        };
        let text  = frame(&preview);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("carat") && lines[0].contains("cut"));
        assert!(lines[1].trim_start().starts_with('0'));
        assert!(lines[2].trim_end().ends_with("Premium"));
        assert!(lines[2].contains("NaN"));
    }

    #[test]
    fn test_categorical_summary_rows() {
        let rows = vec![CategoricalSummary {
            column: "cut".to_string(),
            count:  3,
            unique: 2,
            top:    Some("Ideal".to_string()),
            freq:   2,
        }];
        let text = categorical_summary(&rows);
        let top  = text.lines().nth(3).unwrap();
        assert!(top.trim_start().starts_with("top"));
        assert!(top.trim_end().ends_with("Ideal"));
    }

    #[test]
    fn test_split_report() {
        let report = SplitReport {
            dataset:       "diamonds".to_string(),
            test_size:     0.2,
            seed:          1,
            x_train_shape: (43152, 9),
            x_test_shape:  (10788, 9),
            y_train_shape: (43152, 1),
            y_test_shape:  (10788, 1),
        };
        let text = split_report(&report);
        assert!(text.starts_with("X_train: (43152, 9)\n"));
        assert!(text.ends_with("y_test:  (10788, 1)\n"));
    }
}
