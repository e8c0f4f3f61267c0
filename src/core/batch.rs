use crate::config::toml_config::BatchConfig;
use crate::domain::model::{BatchReport, ConversionJob, JobOutcome};
use crate::domain::ports::{NumeralConverter, Storage};
use crate::utils::error::{AppError, Result};

pub struct BatchRunner<C: NumeralConverter, S: Storage> {
    converter: C,
    storage: S,
}

impl<C: NumeralConverter, S: Storage> BatchRunner<C, S> {
    pub fn new(converter: C, storage: S) -> Self {
        Self { converter, storage }
    }

    /// Converts every job in order. A failing job is recorded, not fatal.
    pub fn convert_all(&self, name: &str, jobs: &[ConversionJob]) -> BatchReport {
        let mut report = BatchReport::new(name);

        for job in jobs {
            let result = self.converter.convert(&job.numeral, job.from, job.to);
            match &result {
                Ok(converted) => tracing::debug!(
                    "{} ({}) -> {} ({})",
                    job.numeral,
                    job.from,
                    converted,
                    job.to
                ),
                Err(e) => tracing::warn!(
                    "⚠️ {} ({} -> {}) failed: {}",
                    job.numeral,
                    job.from,
                    job.to,
                    e.user_friendly_message()
                ),
            }
            report.push(JobOutcome::from_result(job, result));
        }

        tracing::info!(
            "🔢 Batch '{}': {} converted, {} failed",
            name,
            report.succeeded,
            report.failed
        );
        report
    }

    /// 執行整個批次並寫出報表，回傳報表路徑
    pub fn run(&self, config: &BatchConfig) -> Result<(BatchReport, String)> {
        let jobs = config.resolved_jobs()?;
        tracing::info!("Running batch '{}' with {} jobs", config.batch.name, jobs.len());

        let report = self.convert_all(&config.batch.name, &jobs);

        let data = match config.output.format.as_str() {
            "csv" => to_csv(&report)?,
            "json" => to_json(&report)?,
            other => {
                return Err(AppError::InvalidConfigValueError {
                    field: "output.format".to_string(),
                    value: other.to_string(),
                    reason: "Unsupported format".to_string(),
                })
            }
        };

        let output_path = self.storage.write_file(&config.output_filename(), &data)?;
        tracing::info!("📁 Report saved to: {}", output_path);

        Ok((report, output_path))
    }
}

pub fn to_csv(report: &BatchReport) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["numeral", "from", "to", "result", "error"])?;

    for outcome in &report.outcomes {
        let from = outcome.from.to_string();
        let to = outcome.to.to_string();
        writer.write_record([
            outcome.numeral.as_str(),
            from.as_str(),
            to.as_str(),
            outcome.result.as_deref().unwrap_or(""),
            outcome.error.as_deref().unwrap_or(""),
        ])?;
    }

    writer
        .into_inner()
        .map_err(|e| AppError::IoError(e.into_error()))
}

pub fn to_json(report: &BatchReport) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec_pretty(report)?)
}
