
pub use tempdir::{unique_temp_dir, write_fixture};
