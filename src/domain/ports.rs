use crate::utils::error::Result;
use std::path::Path;

pub trait Storage {
    fn read_file(&self, path: &Path) -> Result<String>;
    /// Writes `data` to `path`, creating any missing parent directories.
    fn write_file(&self, path: &Path, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    /// File extensions to scan, without the leading dot.
    fn extensions(&self) -> &[String];
    fn action_marker(&self) -> &str;
    fn input_marker(&self) -> &str;
    fn output_marker(&self) -> &str;
}
