use crate::batch::PolicyBatch;
use crate::policy::{PolicyNumber, PolicyStatus};
use chrono::{DateTime, Utc};
use serde::Serialize;
use sha2::{Digest, Sha256};

/// One row of the validity report, in its serialized shape.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ReportRecord {
    pub number: String,
    pub status: PolicyStatus,
}

impl ReportRecord {
    pub fn from_policy(policy: &PolicyNumber) -> Self {
        Self {
            number: policy.number().to_string(),
            status: policy.status(),
        }
    }
}

/// Header-plus-records view of a decoded batch, serialized for the JSON
/// report surface.
#[derive(Debug, Clone, Serialize)]
pub struct ReportSummary {
    pub generated_at: DateTime<Utc>,
    pub total: usize,
    pub valid: usize,
    pub illegible: usize,
    pub errors: usize,
    pub records: Vec<ReportRecord>,
}

impl ReportSummary {
    pub fn from_batch(batch: &PolicyBatch) -> Self {
        let records: Vec<ReportRecord> =
            batch.records.iter().map(ReportRecord::from_policy).collect();
        let valid = records
            .iter()
            .filter(|r| r.status == PolicyStatus::Valid)
            .count();
        let illegible = records
            .iter()
            .filter(|r| r.status == PolicyStatus::Illegible)
            .count();
        let errors = records
            .iter()
            .filter(|r| r.status == PolicyStatus::ChecksumMismatch)
            .count();
        Self {
            generated_at: Utc::now(),
            total: records.len(),
            valid,
            illegible,
            errors,
            records,
        }
    }
}

impl PolicyBatch {
    /// Plain-text report: one newline-terminated line per record,
    /// `<number>` or `<number> ERR` or `<number> ILL`.
    pub fn report(&self) -> String {
        let mut out = String::new();
        for record in &self.records {
            out.push_str(&record.report_line());
            out.push('\n');
        }
        out
    }

    /// Compute a SHA-256 hash representing the decoded batch contents.
    pub fn hash(&self) -> String {
        let mut hasher = Sha256::new();
        for record in &self.records {
            hasher.update(record.report_line().as_bytes());
            hasher.update(b"\n");
        }
        let digest = hasher.finalize();
        format!("{digest:02x}")
    }
}
