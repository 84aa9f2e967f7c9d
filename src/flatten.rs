//! Flatten pass orchestration.
//!
//! `run_pass` performs one full cycle over the root: ensure the target, then for
//! each candidate move its contents and delete it if it ended up empty.
//! `run` counts the candidates once up front and repeats the pass that many
//! times (or once with `single_pass`). Passes after the first normally find
//! nothing to do.

use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::{debug, info, info_span};

use crate::config::Config;
use crate::errors::FlattenError;
use crate::fs_ops::{
    Cleanup, MoveOutcome, TargetStatus, cleanup_candidate, count_candidates, ensure_target,
    list_candidates, move_contents,
};
use crate::output as out;
use crate::shutdown;

/// Counters for a single flatten pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassReport {
    pub processed: usize,
    pub deleted: usize,
    pub retained: usize,
    pub moved: usize,
    pub target: PathBuf,
}

/// Outcome of the whole run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Candidates found before the first pass.
    pub folder_count: usize,
    pub passes: Vec<PassReport>,
}

impl RunReport {
    pub fn total_moved(&self) -> usize {
        self.passes.iter().map(|p| p.moved).sum()
    }

    pub fn total_deleted(&self) -> usize {
        self.passes.iter().map(|p| p.deleted).sum()
    }
}

/// Number of passes for a run that found `folder_count` candidates.
pub fn pass_count(folder_count: usize, single_pass: bool) -> usize {
    if single_pass {
        folder_count.min(1)
    } else {
        folder_count
    }
}

/// Run the full flatten procedure on an already-resolved root.
pub fn run(cfg: &Config) -> Result<RunReport> {
    cfg.validate()?;

    let folder_count = count_candidates(&cfg.root, &cfg.target_name)?;
    out::print_status(&format!("Found {folder_count} directories to process"));
    out::print_blank();

    let passes = pass_count(folder_count, cfg.single_pass);
    let mut reports = Vec::with_capacity(passes);
    for i in 1..=passes {
        out::print_blank();
        out::print_success(&format!(
            "================== RUN {i} of {passes} =================="
        ));
        let _span = info_span!("pass", n = i, of = passes).entered();
        reports.push(run_pass(cfg)?);
    }

    out::print_blank();
    out::print_success("All iterations complete!");

    let report = RunReport {
        folder_count,
        passes: reports,
    };
    info!(
        folder_count,
        passes,
        moved = report.total_moved(),
        deleted = report.total_deleted(),
        "Flatten run finished"
    );
    Ok(report)
}

/// One flatten pass over `cfg.root`.
pub fn run_pass(cfg: &Config) -> Result<PassReport> {
    let root = &cfg.root;
    out::print_status(&format!("Source directory: {}", root.display()));

    let (target, status) = ensure_target(root, &cfg.target_name)?;
    match status {
        TargetStatus::Created => {
            out::print_success(&format!("Created target directory: {}", target.display()))
        }
        TargetStatus::Existing => {
            out::print_status(&format!("Target directory already exists: {}", target.display()))
        }
    }

    out::print_blank();
    out::print_user(out::RULE);
    out::print_user("Starting to process subdirectories...");
    out::print_user(out::RULE);
    out::print_blank();

    let mut report = PassReport {
        processed: 0,
        deleted: 0,
        retained: 0,
        moved: 0,
        target: target.clone(),
    };

    for candidate in list_candidates(root, &cfg.target_name)? {
        if shutdown::is_requested() {
            return Err(FlattenError::Interrupted.into());
        }
        process_candidate(&candidate, &target, &mut report)?;
    }

    out::print_blank();
    out::print_user(out::DOUBLE_RULE);
    out::print_user("Summary:");
    out::print_user(&format!("  Subdirectories processed: {}", report.processed));
    out::print_user(&format!("  Subdirectories deleted: {}", report.deleted));
    out::print_user(&format!("  All contents moved to: {}", report.target.display()));
    out::print_user(out::DOUBLE_RULE);

    debug!(?report, "Pass finished");
    Ok(report)
}

fn process_candidate(candidate: &Path, target: &Path, report: &mut PassReport) -> Result<()> {
    let dirname = display_name(candidate);

    out::print_blank();
    out::print_user(&format!("Processing: {dirname}"));
    out::print_user(out::RULE);
    out::print_status(&format!("Processing directory: {}", candidate.display()));

    let outcome = move_contents(candidate, target, |src, _dest| {
        out::print_success(&format!("  Moved: {}", display_name(src)));
    })?;
    match outcome {
        MoveOutcome::AlreadyEmpty => {
            out::print_status("  Directory is already empty, skipping...")
        }
        MoveOutcome::Moved(n) => out::print_success(&format!("  Total items moved: {n}")),
    }
    report.moved += outcome.count();

    match cleanup_candidate(candidate)? {
        Cleanup::Deleted => {
            out::print_status("  Directory is empty, deleting...");
            out::print_success(&format!("  Deleted: {dirname}"));
            report.deleted += 1;
        }
        Cleanup::Retained { .. } => {
            out::print_warn("  Warning: Directory is not empty, not deleting");
            report.retained += 1;
        }
    }

    report.processed += 1;
    out::print_user(out::RULE);
    Ok(())
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
