// src/analytics/summary.rs
//! Descriptive statistics over a generated batch

use crate::mc::path::PathBatch;
use serde::{Deserialize, Serialize};
use statrs::statistics::{Data, OrderStatistics, Statistics};

/// Cross-sectional statistics of a batch's terminal prices plus the global
/// price range over every step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub paths: usize,
    pub step_count: usize,
    pub mean_terminal: f64,
    /// Sample standard deviation; `None` for a single-path batch
    pub std_dev_terminal: Option<f64>,
    pub q05_terminal: f64,
    pub median_terminal: f64,
    pub q95_terminal: f64,
    pub min_price: f64,
    pub max_price: f64,
}

impl BatchSummary {
    pub fn from_batch(batch: &PathBatch) -> Self {
        let terminal = batch.terminal_prices();
        let mean_terminal = terminal.iter().mean();
        let std_dev_terminal = if terminal.len() > 1 {
            Some(terminal.iter().std_dev())
        } else {
            None
        };

        let mut sorted = Data::new(terminal);
        let q05_terminal = sorted.quantile(0.05);
        let median_terminal = sorted.quantile(0.5);
        let q95_terminal = sorted.quantile(0.95);

        let (min_price, max_price) = batch.price_range();

        BatchSummary {
            paths: batch.len(),
            step_count: batch.step_count(),
            mean_terminal,
            std_dev_terminal,
            q05_terminal,
            median_terminal,
            q95_terminal,
            min_price,
            max_price,
        }
    }

    /// Key/value rows for CSV or log output
    pub fn to_rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("paths", self.paths.to_string()),
            ("step_count", self.step_count.to_string()),
            ("mean_terminal", format!("{:.6}", self.mean_terminal)),
            (
                "std_dev_terminal",
                self.std_dev_terminal
                    .map_or_else(|| "NA".to_string(), |s| format!("{:.6}", s)),
            ),
            ("q05_terminal", format!("{:.6}", self.q05_terminal)),
            ("median_terminal", format!("{:.6}", self.median_terminal)),
            ("q95_terminal", format!("{:.6}", self.q95_terminal)),
            ("min_price", format!("{:.6}", self.min_price)),
            ("max_price", format!("{:.6}", self.max_price)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mc::path::PricePath;
    use approx::assert_relative_eq;

    fn batch(rows: &[&[f64]]) -> PathBatch {
        let paths = rows
            .iter()
            .map(|r| PricePath::try_from(r.to_vec()).unwrap())
            .collect::<Vec<_>>();
        PathBatch::try_from(paths).unwrap()
    }

    #[test]
    fn test_summary_of_small_batch() {
        let b = batch(&[&[100.0, 90.0, 110.0], &[100.0, 150.0, 130.0], &[100.0, 60.0, 120.0]]);
        let s = BatchSummary::from_batch(&b);

        assert_eq!(s.paths, 3);
        assert_eq!(s.step_count, 3);
        assert_relative_eq!(s.mean_terminal, 120.0);
        assert_relative_eq!(s.std_dev_terminal.unwrap(), 10.0);
        assert_relative_eq!(s.median_terminal, 120.0);
        assert!(s.q05_terminal <= s.median_terminal && s.median_terminal <= s.q95_terminal);
        assert_eq!(s.min_price, 60.0);
        assert_eq!(s.max_price, 150.0);
    }

    #[test]
    fn test_single_path_has_no_std_dev() {
        let s = BatchSummary::from_batch(&batch(&[&[100.0, 105.0]]));
        assert!(s.std_dev_terminal.is_none());
        assert_relative_eq!(s.mean_terminal, 105.0);

        let rows = s.to_rows();
        assert_eq!(rows[3], ("std_dev_terminal", "NA".to_string()));
    }
}
