pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::{cli::LocalStorage, toml_config::BatchConfig};
pub use crate::core::batch::BatchRunner;
pub use crate::core::digits::{digit_to_value, value_to_digit};
pub use crate::core::engine::{
    convert, convert_unchecked, parse_to_decimal, parse_to_decimal_string,
    parse_to_decimal_unchecked, render_from_decimal, render_from_decimal_str, validate_numeral,
    CheckedConverter, TrustedConverter,
};
pub use crate::domain::model::{Radix, MAX_RADIX, MIN_RADIX};
pub use crate::utils::error::{AppError, ConvertError, Result};
