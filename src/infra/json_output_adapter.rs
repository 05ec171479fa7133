use anyhow::{Context, Result};
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::app::ports::JobOutputPort;
use crate::types::JobRecord;

/// File-based implementation of JobOutputPort.
/// Writes the filtered jobs as a pretty-printed JSON array.
pub struct FileJobOutputAdapter {
    path: PathBuf,
}

impl FileJobOutputAdapter {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl JobOutputPort for FileJobOutputAdapter {
    fn write_jobs(&self, records: &[JobRecord]) -> Result<()> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create output directory {}", dir.display()))?;
        }

        let file = fs::File::create(&self.path)
            .with_context(|| format!("Failed to create output file {}", self.path.display()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, records)?;
        writer.write_all(b"\n")?;
        writer.flush()?;

        info!("Saved {} jobs to {}", records.len(), self.path.display());
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::record_io::load_jobs;

    #[test]
    fn test_writes_json_that_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("filtered.json");
        let adapter = FileJobOutputAdapter::new(&path);

        let records = vec![
            JobRecord::new().with("title", "Rust Engineer").with("company", "Acme"),
            JobRecord::new().with("title", "Go Engineer"),
        ];
        adapter.write_jobs(&records).unwrap();

        assert_eq!(load_jobs(&path).unwrap(), records);
        assert_eq!(adapter.describe(), path.display().to_string());
    }
}
