pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::engine::{convert, convert_unchecked, ConvertResult};
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{sanitize_numeral, validate_non_empty_string, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "small-radix")]
#[command(about = "Convert a numeral between radices 2 to 36")]
pub struct CliConfig {
    /// Numeral to convert, digits 0-9 and A-Z (case-insensitive)
    pub numeral: String,

    /// Radix the numeral is written in
    #[arg(short, long, default_value = "10")]
    pub from: u16,

    /// Radix to render the result in
    #[arg(short, long, default_value = "2")]
    pub to: u16,

    #[arg(long, help = "Skip digit validation and overflow checks")]
    pub unchecked: bool,

    #[arg(long, help = "Drop characters other than 0-9/A-Z before converting")]
    pub lenient: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Numeral as it will be converted, filtered when `--lenient` is set.
    pub fn effective_numeral(&self) -> String {
        if self.lenient {
            sanitize_numeral(&self.numeral, self.numeral.chars().count()).0
        } else {
            self.numeral.clone()
        }
    }

    /// 依旗標選擇驗證或快速路徑執行轉換
    pub fn run_conversion(&self) -> ConvertResult<String> {
        let numeral = self.effective_numeral();
        if self.unchecked {
            convert_unchecked(&numeral, self.from, self.to)
        } else {
            convert(&numeral, self.from, self.to)
        }
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        // 基數範圍交給轉換引擎檢查
        validate_non_empty_string("numeral", &self.numeral)
    }
}
