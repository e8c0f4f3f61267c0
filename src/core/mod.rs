pub mod batch;
pub mod digits;
pub mod engine;

pub use crate::domain::model::{BatchReport, ConversionJob, JobOutcome, Radix};
pub use crate::domain::ports::{NumeralConverter, Storage};
pub use crate::utils::error::Result;
