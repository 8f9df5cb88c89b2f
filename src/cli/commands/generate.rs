//! Generate Command
//!
//! Extract docs from the configured sources and splice the rendered API
//! tables into the allow-listed package READMEs.

use std::path::{Path, PathBuf};

use crate::cli::ui::Output;
use crate::cli::util::CommandContext;
use crate::pipeline;
use crate::types::Result;

pub async fn run(root: Option<PathBuf>, config_path: &Path) -> Result<()> {
    let out = Output::new();
    let ctx = CommandContext::load(root, config_path)?;

    println!("Generating API tables...");

    let summary = pipeline::run(&ctx.root, &ctx.config).await?;

    println!(
        "Extracted {} module(s), kept {} record(s)",
        summary.modules, summary.records
    );

    if summary.unresolved > 0 {
        out.warning(&format!(
            "{} record(s) have no owning package README",
            summary.unresolved
        ));
    }
    if summary.missing_sentinels > 0 {
        out.warning(&format!(
            "{} README(s) have no sentinel region",
            summary.missing_sentinels
        ));
    }

    out.success(&format!(
        "{} README(s) updated, {} unchanged",
        summary.updated, summary.unchanged
    ));
    if summary.skipped > 0 {
        out.detail(&format!(
            "{} directories skipped (not on the allow-list)",
            summary.skipped
        ));
    }
    if summary.empty > 0 {
        out.detail(&format!(
            "{} directories had nothing to render",
            summary.empty
        ));
    }
    if summary.failed > 0 {
        out.error(&format!("{} README(s) failed to update", summary.failed));
    }

    Ok(())
}
