use crate::domain::model::{ConversionJob, MAX_RADIX, MIN_RADIX};
use crate::utils::error::{AppError, Result};
use crate::utils::validation::{
    validate_output_format, validate_path, validate_range, validate_required_field, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

pub const OUTPUT_FORMATS: [&str; 2] = ["csv", "json"];

static ENV_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("static pattern is valid"));

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    pub batch: BatchSettings,
    pub output: OutputConfig,
    #[serde(default)]
    pub jobs: Vec<JobConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchSettings {
    pub name: String,
    pub description: Option<String>,
    pub default_from: Option<u16>,
    pub default_to: Option<u16>,
    pub unchecked: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: String,
    pub format: String,
    pub filename: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobConfig {
    pub numeral: String,
    pub from: Option<u16>,
    pub to: Option<u16>,
}

impl BatchConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(AppError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| AppError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${NUMERAL})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    /// Fills each job's missing radices from the batch defaults.
    pub fn resolved_jobs(&self) -> Result<Vec<ConversionJob>> {
        self.jobs
            .iter()
            .enumerate()
            .map(|(i, job)| {
                let from = job.from.or(self.batch.default_from);
                let to = job.to.or(self.batch.default_to);
                Ok(ConversionJob {
                    numeral: job.numeral.clone(),
                    from: *validate_required_field(&format!("jobs[{}].from", i), &from)?,
                    to: *validate_required_field(&format!("jobs[{}].to", i), &to)?,
                })
            })
            .collect()
    }

    pub fn is_unchecked(&self) -> bool {
        self.batch.unchecked.unwrap_or(false)
    }

    pub fn output_path(&self) -> &str {
        &self.output.path
    }

    /// 輸出檔名，未指定時依格式決定
    pub fn output_filename(&self) -> String {
        self.output
            .filename
            .clone()
            .unwrap_or_else(|| format!("conversions.{}", self.output.format))
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validate_path("output.path", &self.output.path)?;
        validate_output_format("output.format", &self.output.format, &OUTPUT_FORMATS)?;

        if let Some(from) = self.batch.default_from {
            validate_range("batch.default_from", from, MIN_RADIX, MAX_RADIX)?;
        }
        if let Some(to) = self.batch.default_to {
            validate_range("batch.default_to", to, MIN_RADIX, MAX_RADIX)?;
        }

        if self.jobs.is_empty() {
            return Err(AppError::ConfigValidationError {
                field: "jobs".to_string(),
                message: "At least one job is required".to_string(),
            });
        }

        // 個別工作的基數與數字留給引擎判斷，這裡只確認能解析出基數
        self.resolved_jobs()?;

        Ok(())
    }
}

impl Validate for BatchConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const BASIC: &str = r#"
[batch]
name = "test-batch"
default_from = 16
default_to = 2

[output]
path = "./test-output"
format = "csv"

[[jobs]]
numeral = "FF"

[[jobs]]
numeral = "1010"
from = 2
to = 10
"#;

    #[test]
    fn test_parse_basic_toml_config() {
        let config = BatchConfig::from_toml_str(BASIC).unwrap();

        assert_eq!(config.batch.name, "test-batch");
        assert_eq!(config.jobs.len(), 2);
        assert!(!config.is_unchecked());
        assert_eq!(config.output_filename(), "conversions.csv");
        assert!(config.validate().is_ok());

        let jobs = config.resolved_jobs().unwrap();
        assert_eq!(
            jobs[0],
            ConversionJob {
                numeral: "FF".to_string(),
                from: 16,
                to: 2
            }
        );
        assert_eq!(jobs[1].from, 2);
        assert_eq!(jobs[1].to, 10);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("SMALL_RADIX_TEST_NUMERAL", "7F");

        let toml_content = r#"
[batch]
name = "env"
default_from = 16
default_to = 10

[output]
path = "./output"
format = "json"

[[jobs]]
numeral = "${SMALL_RADIX_TEST_NUMERAL}"
"#;

        let config = BatchConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.jobs[0].numeral, "7F");

        std::env::remove_var("SMALL_RADIX_TEST_NUMERAL");
    }

    #[test]
    fn test_missing_radix_is_reported() {
        let toml_content = r#"
[batch]
name = "missing"

[output]
path = "./output"
format = "csv"

[[jobs]]
numeral = "10"
from = 2
"#;

        let config = BatchConfig::from_toml_str(toml_content).unwrap();
        match config.validate() {
            Err(AppError::MissingConfigError { field }) => assert_eq!(field, "jobs[0].to"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_config_validation() {
        let bad_format = BASIC.replace("format = \"csv\"", "format = \"xml\"");
        let config = BatchConfig::from_toml_str(&bad_format).unwrap();
        assert!(config.validate().is_err());

        let bad_default = BASIC.replace("default_to = 2", "default_to = 40");
        let config = BatchConfig::from_toml_str(&bad_default).unwrap();
        assert!(config.validate().is_err());

        let no_jobs = r#"
[batch]
name = "empty"

[output]
path = "./output"
format = "csv"
"#;
        let config = BatchConfig::from_toml_str(no_jobs).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(
            BatchConfig::from_toml_str("[batch"),
            Err(AppError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(BASIC.as_bytes()).unwrap();

        let config = BatchConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.batch.name, "test-batch");
    }
}
