use std::path::PathBuf;

use crate::error::ReduceError;

use super::allow_list::AllowList;

/// Outcome of one reduction run over a geofile.
#[derive(Debug, Clone, PartialEq)]
pub struct SizeReport {
    pub filepath: PathBuf,
    pub retained_keys: AllowList,
    pub size_before: u64,
    pub size_after: u64,
    pub num_features: usize,
    pub num_dropped_properties: usize,
}

impl SizeReport {
    /// Negative when re-serialization made the file larger.
    pub fn saved_bytes(&self) -> i64 {
        self.size_before as i64 - self.size_after as i64
    }

    pub fn saved_percent(&self) -> Result<f64, ReduceError> {
        if self.size_before == 0 {
            return Err(ReduceError::Arithmetic {
                path: self.filepath.clone(),
            });
        }
        Ok(self.saved_bytes() as f64 / self.size_before as f64 * 100.0)
    }

    /// The human readable summary, one entry per output line.
    pub fn summary_lines(&self) -> Result<[String; 3], ReduceError> {
        let saved_percent = self.saved_percent()?;
        Ok([
            format!(
                "{} has been reduced to include only the following properties: {}",
                self.filepath.display(),
                self.retained_keys
            ),
            format!("{} bytes have been saved.", self.saved_bytes()),
            format!("{:?}% of the file has been saved.", saved_percent),
        ])
    }
}
