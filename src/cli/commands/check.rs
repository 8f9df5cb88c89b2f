//! Check Command
//!
//! CI guard: verify every allow-listed README already matches what
//! `generate` would write. Exits non-zero when anything diverges.

use std::path::{Path, PathBuf};

use crate::cli::ui::Output;
use crate::cli::util::CommandContext;
use crate::pipeline;
use crate::types::{Result, StitchError};

pub async fn run(root: Option<PathBuf>, config_path: &Path) -> Result<()> {
    let out = Output::new();
    let ctx = CommandContext::load(root, config_path)?;

    println!("Checking package READMEs...");

    let report = pipeline::check(&ctx.root, &ctx.config).await?;

    for dir in &report.stale {
        out.error(&format!("{}: README out of date", dir));
    }
    for dir in &report.missing_sentinels {
        out.warning(&format!("{}: README has no sentinel region", dir));
    }
    for (dir, err) in &report.errors {
        out.error(&format!("{}: {}", dir, err));
    }

    if report.is_clean() {
        out.success(&format!("{} README(s) up to date", report.up_to_date));
        if report.skipped > 0 {
            out.detail(&format!(
                "{} directories skipped (not on the allow-list)",
                report.skipped
            ));
        }
        Ok(())
    } else {
        Err(StitchError::Stale(report.findings()))
    }
}
