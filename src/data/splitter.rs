// ============================================================
// Layer 4 - Feature/Target and Train/Test Splitting
// ============================================================
// Two different splits happen before a model can be fitted:
//
// 1. Feature/target split (by COLUMN)
//      X = every column except the target
//      y = the target column alone
//    Rows stay aligned: row i of X describes the same diamond as
//    row i of y. Nothing is shuffled.
//
// 2. Train/test split (by ROW)
//      Shuffle the row indices with a seeded RNG, then hand the
//      first ceil(test_size * n) rows to the test set and the rest
//      to the training set. The same permutation is applied to X
//      and y so they stay aligned.
//
// Why seed the shuffle?
//   A tutorial that reports metrics must be reproducible; the
//   same seed always yields the same partition.
//
// Uses Fisher-Yates shuffle via rand::seq::SliceRandom.
//
// A table with a single column splits into a (rows, 0) feature
// table: polars keeps the height of a frame with no columns, so
// row counts still match the source.
//
// Reference: Rust Book §8 (Vectors)
//            rand crate documentation

use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

use crate::domain::{
    error::FrameError,
    frame::{require_column, take_rows, DataFrame},
};

/// Split `frame` into (features, target) by column.
///
/// Fails with FrameError::ColumnNotFound if `target` is not a column,
/// instead of silently returning an empty target table.
pub fn split_features_target(
    frame:  &DataFrame,
    target: &str,
) -> Result<(DataFrame, DataFrame), FrameError> {
    require_column(frame, target)?;

    let features = frame.drop(target)?;
    let target   = frame.select([target])?;

    tracing::debug!(
        "Feature/target split: X {:?}, y {:?}",
        features.shape(),
        target.shape()
    );

    Ok((features, target))
}

/// The four tables produced by train_test_split.
#[derive(Debug, Clone)]
pub struct TrainTestSplit {
    pub x_train: DataFrame,
    pub x_test:  DataFrame,
    pub y_train: DataFrame,
    pub y_test:  DataFrame,
}

/// Shuffle rows with `seed` and split X/y into train and test parts.
///
/// # Arguments
/// * `x`, `y`      - Feature and target tables with equal heights
/// * `test_size`   - Fraction of rows for the test set, in (0, 1)
/// * `seed`        - RNG seed; equal seeds give equal splits
pub fn train_test_split(
    x:         &DataFrame,
    y:         &DataFrame,
    test_size: f64,
    seed:      u64,
) -> Result<TrainTestSplit, FrameError> {
    // Written as a negated range check so NaN is rejected too
    if !(test_size > 0.0 && test_size < 1.0) {
        return Err(FrameError::InvalidTestSize(test_size));
    }

    let total = x.height();
    if y.height() != total {
        return Err(FrameError::LengthMismatch {
            name:     "y".to_string(),
            expected: total,
            actual:   y.height(),
        });
    }

    let n_test  = ((total as f64) * test_size).ceil() as usize;
    let n_train = total - n_test;
    if n_train == 0 {
        return Err(FrameError::Empty { rows: total, test_size });
    }

    let mut indices: Vec<usize> = (0..total).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    indices.shuffle(&mut rng);

    // First n_test shuffled rows form the test set
    let (test_idx, train_idx) = indices.split_at(n_test);

    tracing::debug!(
        "Train/test split: {} training, {} test (seed {})",
        train_idx.len(),
        test_idx.len(),
        seed
    );

    Ok(TrainTestSplit {
        x_train: take_rows(x, train_idx)?,
        x_test:  take_rows(x, test_idx)?,
        y_train: take_rows(y, train_idx)?,
        y_test:  take_rows(y, test_idx)?,
    })
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::*;

    use crate::domain::frame::{column_names, to_array2, to_categorical};

    fn diamonds() -> DataFrame {
        let mut df = df!(
            "carat" => [0.23, 0.21, 0.23, 0.29, 0.31],
            "cut"   => ["Ideal", "Premium", "Good", "Premium", "Good"],
            "price" => [326.0, 326.0, 327.0, 334.0, 335.0],
            "x"     => [3.95, 3.89, 4.05, 4.2, 4.34],
        )
        .unwrap();
        let cut = to_categorical(df.column("cut").unwrap()).unwrap();
        df.with_column(cut).unwrap();
        df
    }

    fn f64_values(df: &DataFrame, name: &str) -> Vec<f64> {
        df.column(name)
            .unwrap()
            .as_materialized_series()
            .f64()
            .unwrap()
            .into_no_null_iter()
            .collect()
    }

    #[test]
    fn test_feature_target_shapes() {
        let df = diamonds();
        let (x, y) = split_features_target(&df, "price").unwrap();
        assert_eq!(x.width(), df.width() - 1);
        assert_eq!(y.width(), 1);
        assert_eq!(x.height(), df.height());
        assert_eq!(y.height(), df.height());
        assert_eq!(column_names(&x), vec!["carat", "cut", "x"]);
        assert_eq!(column_names(&y), vec!["price"]);
    }

    #[test]
    fn test_concatenation_reconstructs_source() {
        let df = diamonds();
        let (x, y) = split_features_target(&df, "price").unwrap();
        let rebuilt = x
            .hstack(y.get_columns())
            .unwrap()
            .select(df.get_column_names().into_iter().cloned())
            .unwrap();
        assert!(rebuilt.equals_missing(&df));
    }

    #[test]
    fn test_missing_target_is_an_error() {
        let err = split_features_target(&diamonds(), "prize").unwrap_err();
        match err {
            FrameError::ColumnNotFound { name, available } => {
                assert_eq!(name, "prize");
                assert!(available.contains(&"price".to_string()));
            }
            other => panic!("expected ColumnNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_target_only_table_keeps_row_count() {
        let df = df!("price" => [1.0, 2.0, 3.0]).unwrap();
        let (x, y) = split_features_target(&df, "price").unwrap();

        assert_eq!(x.shape(), (3, 0));
        assert_eq!(y.shape(), (3, 1));
        assert_eq!(to_array2(&x).unwrap().dim(), (3, 0));

        let split = train_test_split(&x, &y, 0.34, 0).unwrap();
        assert_eq!(split.x_test.height(), 2);
        assert_eq!(split.y_test.height(), 2);
        assert_eq!(split.x_train.height(), 1);
    }

    #[test]
    fn test_train_test_sizes() {
        let df = diamonds();
        let (x, y) = split_features_target(&df, "price").unwrap();
        let split = train_test_split(&x, &y, 0.2, 42).unwrap();
        // ceil(0.2 * 5) = 1 test row
        assert_eq!(split.x_test.height(), 1);
        assert_eq!(split.y_test.height(), 1);
        assert_eq!(split.x_train.height(), 4);
        assert_eq!(split.y_train.height(), 4);
    }

    #[test]
    fn test_train_test_is_deterministic_and_aligned() {
        let df = diamonds();
        let (x, y) = split_features_target(&df, "price").unwrap();
        let a = train_test_split(&x, &y, 0.4, 7).unwrap();
        let b = train_test_split(&x, &y, 0.4, 7).unwrap();
        assert!(a.x_train.equals_missing(&b.x_train));
        assert!(a.y_test.equals_missing(&b.y_test));

        // Every (x, price) pair must come from the same source row
        let source: Vec<(f64, f64)> = f64_values(&df, "x")
            .into_iter()
            .zip(f64_values(&df, "price"))
            .collect();
        for (xs, ys) in [(&a.x_train, &a.y_train), (&a.x_test, &a.y_test)] {
            for pair in f64_values(xs, "x").into_iter().zip(f64_values(ys, "price")) {
                assert!(source.contains(&pair), "{pair:?} is not a source row");
            }
        }
    }

    #[test]
    fn test_train_test_partitions_every_row() {
        let df = diamonds();
        let (x, y) = split_features_target(&df, "price").unwrap();
        let split = train_test_split(&x, &y, 0.4, 3).unwrap();

        let mut prices = f64_values(&split.y_train, "price");
        prices.extend(f64_values(&split.y_test, "price"));
        prices.sort_by(f64::total_cmp);
        assert_eq!(prices, vec![326.0, 326.0, 327.0, 334.0, 335.0]);
    }

    #[test]
    fn test_invalid_test_size() {
        let df = diamonds();
        for bad in [0.0, 1.0, -0.5, f64::NAN] {
            assert!(matches!(
                train_test_split(&df, &df, bad, 0),
                Err(FrameError::InvalidTestSize(_))
            ));
        }
    }

    #[test]
    fn test_too_few_rows() {
        let df = diamonds().head(Some(1));
        assert!(matches!(
            train_test_split(&df, &df, 0.5, 0),
            Err(FrameError::Empty { rows: 1, .. })
        ));
    }

    #[test]
    fn test_height_mismatch() {
        let df = diamonds();
        assert!(matches!(
            train_test_split(&df, &df.head(Some(2)), 0.2, 0),
            Err(FrameError::LengthMismatch { expected: 5, actual: 2, .. })
        ));
    }
}
