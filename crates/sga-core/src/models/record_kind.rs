use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::errors::SgaError;

/// The kinds of persisted record, each with its own migration chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum RecordKind {
    /// A scheduled job.
    Job,
    /// The daily job sheet attached to a job.
    JobSheet,
    /// A submitted QA pack.
    Report,
}

impl RecordKind {
    pub const ALL: [RecordKind; 3] = [RecordKind::Job, RecordKind::JobSheet, RecordKind::Report];

    pub fn as_str(self) -> &'static str {
        match self {
            RecordKind::Job => "job",
            RecordKind::JobSheet => "jobsheet",
            RecordKind::Report => "report",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordKind {
    type Err = SgaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "job" => Ok(RecordKind::Job),
            "jobsheet" | "job_sheet" | "job-sheet" => Ok(RecordKind::JobSheet),
            "report" | "qa_report" | "qareport" => Ok(RecordKind::Report),
            _ => Err(SgaError::UnknownRecordKind {
                name: s.to_string(),
            }),
        }
    }
}
