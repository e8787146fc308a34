//! Ordered migration chains, one per record kind.

use std::fmt;

use sga_core::models::RecordKind;

use crate::coerce::CoercionLog;
use crate::migrator::SchemaMigrator;
use crate::steps::{job, jobsheet, report};
use crate::Record;

/// One version transition: a record at `from_version` becomes `from_version + 1`.
#[derive(Clone, Copy)]
pub struct MigrationStep {
    pub from_version: u32,
    pub name: &'static str,
    pub apply: fn(&mut Record, &mut CoercionLog),
}

impl MigrationStep {
    pub fn to_version(&self) -> u32 {
        self.from_version + 1
    }
}

impl fmt::Debug for MigrationStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MigrationStep")
            .field("from_version", &self.from_version)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// The steps for one record kind, plus the pass that enforces the newest shape.
pub struct MigrationChain {
    pub kind: RecordKind,
    pub steps: &'static [MigrationStep],
    /// Fill required fields and coerce malformed ones for the newest version.
    /// Runs on every record bound for that version, current ones included.
    pub conform: fn(&mut Record, &mut CoercionLog, &SchemaMigrator),
}

impl MigrationChain {
    /// Version reached after the last step.
    pub fn latest_version(&self) -> u32 {
        self.steps.last().map_or(0, MigrationStep::to_version)
    }

    /// Steps taking a record from `from` up to `to`, in order.
    pub fn steps_between(&self, from: u32, to: u32) -> impl Iterator<Item = &MigrationStep> {
        self.steps
            .iter()
            .filter(move |step| step.from_version >= from && step.from_version < to)
    }
}

impl fmt::Debug for MigrationChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MigrationChain")
            .field("kind", &self.kind)
            .field("steps", &self.steps)
            .finish_non_exhaustive()
    }
}

static JOB_CHAIN: MigrationChain = MigrationChain {
    kind: RecordKind::Job,
    steps: job::STEPS,
    conform: job::conform,
};

static JOB_SHEET_CHAIN: MigrationChain = MigrationChain {
    kind: RecordKind::JobSheet,
    steps: jobsheet::STEPS,
    conform: jobsheet::conform,
};

static REPORT_CHAIN: MigrationChain = MigrationChain {
    kind: RecordKind::Report,
    steps: report::STEPS,
    conform: report::conform,
};

pub fn chain_for(kind: RecordKind) -> &'static MigrationChain {
    match kind {
        RecordKind::Job => &JOB_CHAIN,
        RecordKind::JobSheet => &JOB_SHEET_CHAIN,
        RecordKind::Report => &REPORT_CHAIN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sga_core::constants::LATEST_SCHEMA_VERSION;

    #[test]
    fn every_chain_reaches_latest_version() {
        for kind in RecordKind::ALL {
            assert_eq!(chain_for(kind).latest_version(), LATEST_SCHEMA_VERSION, "{kind}");
        }
    }

    #[test]
    fn step_versions_are_contiguous_from_zero() {
        for kind in RecordKind::ALL {
            let chain = chain_for(kind);
            assert_eq!(chain.kind, kind);
            for (i, step) in chain.steps.iter().enumerate() {
                assert_eq!(step.from_version, i as u32, "{kind} step {}", step.name);
            }
        }
    }

    #[test]
    fn step_names_are_unique_and_versioned() {
        for kind in RecordKind::ALL {
            let chain = chain_for(kind);
            for step in chain.steps {
                let prefix = format!("v{:03}_", step.to_version());
                assert!(step.name.starts_with(&prefix), "{}", step.name);
            }
            let mut names: Vec<_> = chain.steps.iter().map(|s| s.name).collect();
            names.dedup();
            assert_eq!(names.len(), chain.steps.len());
        }
    }

    #[test]
    fn steps_between_selects_half_open_range() {
        let chain = chain_for(RecordKind::Job);
        let from_zero: Vec<_> = chain.steps_between(0, 2).map(|s| s.from_version).collect();
        assert_eq!(from_zero, vec![0, 1]);
        let from_one: Vec<_> = chain.steps_between(1, 2).map(|s| s.from_version).collect();
        assert_eq!(from_one, vec![1]);
        assert_eq!(chain.steps_between(2, 2).count(), 0);
        assert_eq!(chain.steps_between(0, 1).count(), 1);
    }
}
