pub mod json_output_adapter;
pub mod record_io;

pub use json_output_adapter::FileJobOutputAdapter;
pub use record_io::{load_jobs, parse_jobs};
