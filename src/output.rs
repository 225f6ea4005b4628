// src/output.rs
//! CSV export for generated paths. The engine never touches the filesystem;
//! these helpers are for callers that want to persist or plot a batch.
use crate::analytics::BatchSummary;
use crate::mc::path::PathBatch;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Write a batch in long format: one `path_id,step,price` row per price
pub fn write_batch_to_csv<P: AsRef<Path>>(filename: P, batch: &PathBatch) -> io::Result<()> {
    let mut file = BufWriter::new(File::create(filename)?);
    writeln!(file, "path_id,step,price")?;
    for (i, path) in batch.iter().enumerate() {
        for (step, price) in path.iter().enumerate() {
            writeln!(file, "{},{},{}", i, step, price)?;
        }
    }
    file.flush()
}

pub fn write_summary_to_csv<P: AsRef<Path>>(filename: P, summary: &BatchSummary) -> io::Result<()> {
    let mut file = File::create(filename)?;
    for (key, value) in summary.to_rows() {
        writeln!(file, "{},{}", key, value)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mc::generate_batch;

    #[test]
    fn test_batch_csv_layout() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("paths.csv");
        let batch = generate_batch(0.2, 0.01, 100.0, 5, 2, Some(11)).unwrap();

        write_batch_to_csv(&file, &batch).unwrap();

        let content = std::fs::read_to_string(&file).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "path_id,step,price");
        assert_eq!(lines.len(), 1 + 2 * 5);
        assert_eq!(lines[1], "0,0,100");
        assert!(lines[6].starts_with("1,0,"));

        let last_price: f64 = lines[10].rsplit(',').next().unwrap().parse().unwrap();
        assert_eq!(last_price, batch.terminal_prices()[1]);
    }

    #[test]
    fn test_summary_csv() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("summary.csv");
        let batch = generate_batch(0.2, 0.01, 100.0, 5, 3, Some(11)).unwrap();

        write_summary_to_csv(&file, &BatchSummary::from_batch(&batch)).unwrap();

        let content = std::fs::read_to_string(&file).unwrap();
        assert!(content.starts_with("paths,3\nstep_count,5\n"));
        assert!(content.contains("median_terminal,"));
    }
}
