use anyhow::Result;

use crate::types::JobRecord;

/// Destination for the final, filtered job list
pub trait JobOutputPort: Send + Sync {
    fn write_jobs(&self, records: &[JobRecord]) -> Result<()>;

    /// Human-readable description of where output goes, for summaries
    fn describe(&self) -> String;
}
