use thiserror::Error;

/// 轉換引擎的錯誤種類，不攜帶額外資料
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConvertError {
    #[error("radix out of supported range")]
    Range,

    #[error("numeral contains an illegal digit")]
    Format,

    #[error("value exceeds 18446744073709551615")]
    Overflow,
}

impl ConvertError {
    pub fn kind(&self) -> &'static str {
        match self {
            ConvertError::Range => "range",
            ConvertError::Format => "format",
            ConvertError::Overflow => "overflow",
        }
    }

    pub fn user_friendly_message(&self) -> &'static str {
        match self {
            ConvertError::Range => "Invalid Base",
            ConvertError::Format => "Invalid Number",
            ConvertError::Overflow => "Number too large",
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Conversion failed: {0}")]
    Conversion(#[from] ConvertError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Io,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// 依嚴重程度決定的程序結束碼
    pub fn exit_code(&self) -> i32 {
        match self {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl AppError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AppError::Conversion(_) => ErrorCategory::Input,
            AppError::ConfigValidationError { .. }
            | AppError::InvalidConfigValueError { .. }
            | AppError::MissingConfigError { .. } => ErrorCategory::Configuration,
            AppError::IoError(_) => ErrorCategory::Io,
            AppError::SerializationError(_) | AppError::CsvError(_) => ErrorCategory::Output,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
            ErrorCategory::Output => ErrorSeverity::Medium,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            AppError::Conversion(e) => e.user_friendly_message().to_string(),
            AppError::IoError(e) => format!("File operation failed: {}", e),
            AppError::SerializationError(_) | AppError::CsvError(_) => {
                "Failed to write the conversion report".to_string()
            }
            AppError::ConfigValidationError { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
            AppError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting '{}': {}", field, reason)
            }
            AppError::MissingConfigError { field } => {
                format!("Missing required setting '{}'", field)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            AppError::Conversion(ConvertError::Range) => {
                "Use bases between 2 and 36".to_string()
            }
            AppError::Conversion(ConvertError::Format) => {
                "Use only digits 0-9 and letters A-Z smaller than the source base".to_string()
            }
            AppError::Conversion(ConvertError::Overflow) => {
                "Values must not exceed 18446744073709551615".to_string()
            }
            AppError::IoError(_) => "Check that the path exists and is writable".to_string(),
            AppError::SerializationError(_) | AppError::CsvError(_) => {
                "Try a different output format".to_string()
            }
            AppError::ConfigValidationError { .. }
            | AppError::InvalidConfigValueError { .. }
            | AppError::MissingConfigError { .. } => {
                "Review the configuration file and fix the reported field".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
