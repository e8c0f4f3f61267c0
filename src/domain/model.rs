use crate::utils::error::ConvertError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Smallest supported radix.
pub const MIN_RADIX: u16 = 2;
/// Largest supported radix.
pub const MAX_RADIX: u16 = 36;

/// A radix known to lie in `MIN_RADIX..=MAX_RADIX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Radix(u16);

impl Radix {
    pub fn new(value: u16) -> Result<Self, ConvertError> {
        if (MIN_RADIX..=MAX_RADIX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ConvertError::Range)
        }
    }

    pub fn get(self) -> u16 {
        self.0
    }
}

impl TryFrom<u16> for Radix {
    type Error = ConvertError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Radix> for u64 {
    fn from(radix: Radix) -> Self {
        u64::from(radix.0)
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One resolved conversion request of a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionJob {
    pub numeral: String,
    pub from: u16,
    pub to: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobOutcome {
    pub numeral: String,
    pub from: u16,
    pub to: u16,
    pub result: Option<String>,
    pub error: Option<String>,
}

impl JobOutcome {
    pub fn from_result(job: &ConversionJob, result: Result<String, ConvertError>) -> Self {
        let (result, error) = match result {
            Ok(converted) => (Some(converted), None),
            Err(e) => (
                None,
                Some(format!("{}: {}", e.kind(), e.user_friendly_message())),
            ),
        };

        Self {
            numeral: job.numeral.clone(),
            from: job.from,
            to: job.to,
            result,
            error,
        }
    }

    pub fn is_success(&self) -> bool {
        self.result.is_some()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchReport {
    pub name: String,
    pub succeeded: usize,
    pub failed: usize,
    pub outcomes: Vec<JobOutcome>,
}

impl BatchReport {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn push(&mut self, outcome: JobOutcome) {
        if outcome.is_success() {
            self.succeeded += 1;
        } else {
            self.failed += 1;
        }
        self.outcomes.push(outcome);
    }

    pub fn total(&self) -> usize {
        self.outcomes.len()
    }
}
