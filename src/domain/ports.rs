use crate::utils::error::{ConvertError, Result};

/// Converts a numeral between two radices.
pub trait NumeralConverter: Send + Sync {
    fn convert(
        &self,
        numeral: &str,
        from: u16,
        to: u16,
    ) -> std::result::Result<String, ConvertError>;
}

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<String>;
}
