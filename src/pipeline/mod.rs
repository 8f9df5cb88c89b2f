//! Generation Pipeline
//!
//! End-to-end flow behind `generate` and `check`:
//!
//! 1. extract raw docs from the configured sources
//! 2. transform them into renderable records
//! 3. group records by target directory
//! 4. render each allow-listed directory's fragment
//! 5. splice fragments into the package READMEs (or diff them in check mode)
//!
//! Extraction and template problems abort the run; per-directory render and
//! write failures are logged and counted so one broken README cannot block
//! the rest.

pub mod aggregate;
pub mod render;
pub mod transform;
pub mod writer;

pub use aggregate::DirectoryGroups;
pub use render::Renderer;
pub use transform::{collapse_newlines, keep_member, resolve_target_directory, transform};
pub use writer::{ReadmeStatus, ReadmeWriter, WriteOutcome};

use std::path::{Path, PathBuf};

use tracing::{debug, error, info};

use crate::config::Config;
use crate::constants::paths;
use crate::extractor::Extractor;
use crate::types::{ModuleRecord, Result, StitchError};

// =============================================================================
// Run Summary
// =============================================================================

/// Counters for one generate run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Modules extracted, type aliases included
    pub modules: usize,
    /// Records surviving transformation
    pub records: usize,
    /// Records with no resolvable target directory
    pub unresolved: usize,
    /// READMEs rewritten with new content
    pub updated: usize,
    /// READMEs rewritten with identical content
    pub unchanged: usize,
    /// Directories not on the allow-list
    pub skipped: usize,
    /// Directories whose records were all empty
    pub empty: usize,
    /// Directories whose render or write failed
    pub failed: usize,
    /// READMEs without a sentinel region
    pub missing_sentinels: usize,
}

/// Per-directory findings from check mode
#[derive(Debug, Default)]
pub struct CheckReport {
    pub up_to_date: usize,
    pub stale: Vec<String>,
    pub missing_sentinels: Vec<String>,
    pub skipped: usize,
    /// Directory name and error text for render/read failures
    pub errors: Vec<(String, String)>,
}

impl CheckReport {
    pub fn is_clean(&self) -> bool {
        self.stale.is_empty() && self.missing_sentinels.is_empty() && self.errors.is_empty()
    }

    /// Number of directories needing attention
    pub fn findings(&self) -> usize {
        self.stale.len() + self.missing_sentinels.len() + self.errors.len()
    }
}

// =============================================================================
// Shared Preparation
// =============================================================================

struct Prepared {
    groups: DirectoryGroups,
    modules: usize,
    records: usize,
    unresolved: usize,
    renderer: Renderer,
    writer: ReadmeWriter,
    packages_root: PathBuf,
}

/// Extract, transform and group; shared by run and check
async fn prepare(root: &Path, config: &Config) -> Result<Prepared> {
    let template_path = root.join(&config.template.path);
    if !template_path.is_file() {
        return Err(StitchError::NotInitialized);
    }

    let renderer = Renderer::from_template_file(&template_path)?;
    let writer = ReadmeWriter::new()?;
    let packages_root = root.join(&config.packages.root);

    let raw = Extractor::new(root, &config.source)?.extract().await?;
    let modules = raw.len();

    let mut groups = DirectoryGroups::new();
    let mut records = 0usize;
    let mut unresolved = 0usize;

    for raw_module in raw.values() {
        if let Some(record) = transform(raw_module, &packages_root, &config.packages.prefix) {
            records += 1;
            if record.target_directory.is_empty() {
                unresolved += 1;
            }
            groups.insert(record);
        }
    }

    info!(
        "Prepared {} record(s) from {} module(s) across {} directories",
        records,
        modules,
        groups.len()
    );

    Ok(Prepared {
        groups,
        modules,
        records,
        unresolved,
        renderer,
        writer,
        packages_root,
    })
}

// =============================================================================
// Generate
// =============================================================================

/// Run the full pipeline and rewrite the allow-listed READMEs
pub async fn run(root: &Path, config: &Config) -> Result<RunSummary> {
    let Prepared {
        groups,
        modules,
        records,
        unresolved,
        renderer,
        writer,
        packages_root,
    } = prepare(root, config).await?;

    let mut summary = RunSummary {
        modules,
        records,
        unresolved,
        ..Default::default()
    };

    enum DirOutcome {
        Written(WriteOutcome),
        Empty,
        Failed,
    }

    let mut targets: Vec<(&str, &[ModuleRecord])> = Vec::new();
    for (dir, dir_records) in groups.iter() {
        // The empty key holds unresolved records, already counted above
        if dir.is_empty() {
            continue;
        }
        if !config.packages.include.iter().any(|d| d == dir) {
            debug!("Skipping {}: not on the packages.include allow-list", dir);
            summary.skipped += 1;
            continue;
        }
        targets.push((dir, dir_records));
    }

    let outcomes = futures::future::join_all(targets.into_iter().map(|(dir, dir_records)| {
        let renderer = &renderer;
        let writer = &writer;
        let packages_root = &packages_root;
        async move {
            let fragment = match renderer.render(dir_records) {
                Ok(Some(fragment)) => fragment,
                Ok(None) => {
                    debug!("All records for {} are empty; nothing to render", dir);
                    return DirOutcome::Empty;
                }
                Err(e) => {
                    error!("Rendering {} failed: {}", dir, e);
                    return DirOutcome::Failed;
                }
            };

            let readme = packages_root.join(dir).join(paths::README_FILE);
            match writer.write(&readme, &fragment).await {
                Ok(outcome) => {
                    debug!("Wrote {}", readme.display());
                    DirOutcome::Written(outcome)
                }
                Err(e) => {
                    error!("Writing {} failed: {}", readme.display(), e);
                    DirOutcome::Failed
                }
            }
        }
    }))
    .await;

    for outcome in outcomes {
        match outcome {
            DirOutcome::Written(WriteOutcome::Updated) => summary.updated += 1,
            DirOutcome::Written(WriteOutcome::Unchanged) => summary.unchanged += 1,
            DirOutcome::Written(WriteOutcome::MissingSentinels) => summary.missing_sentinels += 1,
            DirOutcome::Empty => summary.empty += 1,
            DirOutcome::Failed => summary.failed += 1,
        }
    }

    Ok(summary)
}

// =============================================================================
// Check
// =============================================================================

/// Compare every allow-listed README against what generate would write
pub async fn check(root: &Path, config: &Config) -> Result<CheckReport> {
    let prepared = prepare(root, config).await?;
    let mut report = CheckReport::default();

    for (dir, dir_records) in prepared.groups.iter() {
        if dir.is_empty() {
            continue;
        }
        if !config.packages.include.iter().any(|d| d == dir) {
            report.skipped += 1;
            continue;
        }

        let fragment = match prepared.renderer.render(dir_records) {
            Ok(Some(fragment)) => fragment,
            Ok(None) => continue,
            Err(e) => {
                report.errors.push((dir.to_string(), e.to_string()));
                continue;
            }
        };

        let readme = prepared.packages_root.join(dir).join(paths::README_FILE);
        match prepared.writer.status(&readme, &fragment).await {
            Ok(ReadmeStatus::UpToDate) => report.up_to_date += 1,
            Ok(ReadmeStatus::Stale) => report.stale.push(dir.to_string()),
            Ok(ReadmeStatus::MissingSentinels) => report.missing_sentinels.push(dir.to_string()),
            Err(e) => report.errors.push((dir.to_string(), e.to_string())),
        }
    }

    Ok(report)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use crate::constants::sentinel;
    use std::fs;
    use tempfile::TempDir;

    const TRANSPORT_TS: &str = r#"
/**
 * Message transport.
 * @fires connected once the socket is open
 */
export class Transport {
  /** Where to connect. */
  endpoint: string;

  /** Internal store. */
  private cache: Map<string, string>;

  /** Sends a message. */
  send(msg: string): Promise<void> {
    return dispatch(msg);
  }

  /** Shared by subclasses. */
  protected reset(): void {}

  /** Factory. */
  static create(): Transport {
    return new Transport();
  }
}
"#;

    fn readme_with_region(title: &str, body: &str) -> String {
        format!(
            "# {}\n\nIntro text.\n\n{}\n{}\n{}\n\nOutro text.\n",
            title,
            sentinel::START,
            body,
            sentinel::END
        )
    }

    fn seed(root: &Path, package: &str, source: &str) {
        let src = root.join("packages").join(package).join("src");
        fs::create_dir_all(&src).unwrap();
        fs::write(src.join("index.ts"), source).unwrap();
        fs::write(
            root.join("packages").join(package).join("README.md"),
            readme_with_region(package, "placeholder"),
        )
        .unwrap();
    }

    fn seed_template(root: &Path) {
        let template = root.join(".docstitch/api-table.hbs");
        fs::create_dir_all(template.parent().unwrap()).unwrap();
        fs::write(template, ConfigLoader::default_template()).unwrap();
    }

    fn test_config() -> Config {
        let mut config = Config::default();
        config.packages.include = vec!["net".to_string()];
        config
    }

    #[tokio::test]
    async fn test_run_splices_generated_tables() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        seed_template(root);
        seed(root, "net", TRANSPORT_TS);
        seed(
            root,
            "extra",
            "/** Widget. */\nexport class Widget {\n  /** Spins. */\n  spin(): void {}\n}\n",
        );

        let summary = run(root, &test_config()).await.unwrap();

        assert_eq!(summary.modules, 2);
        assert_eq!(summary.records, 2);
        assert_eq!(summary.unresolved, 0);
        assert_eq!(summary.updated, 1);
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.failed, 0);

        let readme = fs::read_to_string(root.join("packages/net/README.md")).unwrap();
        assert!(readme.contains("## Transport"));
        assert!(readme.contains("| `send(msg: string): Promise<void>` | Sends a message. |"));
        assert!(readme.contains("| `endpoint` | `string` | Where to connect. |"));
        // Documented private members are published
        assert!(readme.contains("| `cache` | `Map<string, string>` | Internal store. |"));
        assert!(readme.contains("| connected once the socket is open |"));
        // Protected and static members are not
        assert!(!readme.contains("reset"));
        assert!(!readme.contains("create"));

        assert!(readme.contains(sentinel::START));
        assert!(readme.contains(sentinel::END));
        assert!(!readme.contains("placeholder"));
        assert!(readme.starts_with("# net\n\nIntro text.\n"));
        assert!(readme.ends_with("\n\nOutro text.\n"));

        // Directories off the allow-list keep their seeded content
        let extra = fs::read_to_string(root.join("packages/extra/README.md")).unwrap();
        assert_eq!(extra, readme_with_region("extra", "placeholder"));
    }

    #[tokio::test]
    async fn test_run_twice_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        seed_template(root);
        seed(root, "net", TRANSPORT_TS);

        let first = run(root, &test_config()).await.unwrap();
        assert_eq!(first.updated, 1);
        let after_first = fs::read_to_string(root.join("packages/net/README.md")).unwrap();

        let second = run(root, &test_config()).await.unwrap();
        assert_eq!(second.updated, 0);
        assert_eq!(second.unchanged, 1);
        let after_second = fs::read_to_string(root.join("packages/net/README.md")).unwrap();

        assert_eq!(after_first, after_second);
    }

    #[tokio::test]
    async fn test_run_without_template_is_not_initialized() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        seed(root, "net", TRANSPORT_TS);

        let result = run(root, &test_config()).await;
        assert!(matches!(result, Err(StitchError::NotInitialized)));
    }

    #[tokio::test]
    async fn test_run_counts_missing_sentinels() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        seed_template(root);
        seed(root, "net", TRANSPORT_TS);
        fs::write(root.join("packages/net/README.md"), "# net, no markers\n").unwrap();

        let summary = run(root, &test_config()).await.unwrap();

        assert_eq!(summary.missing_sentinels, 1);
        assert_eq!(summary.updated, 0);
        assert_eq!(
            fs::read_to_string(root.join("packages/net/README.md")).unwrap(),
            "# net, no markers\n"
        );
    }

    #[tokio::test]
    async fn test_check_reports_stale_and_clean() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        seed_template(root);
        seed(root, "net", TRANSPORT_TS);

        // Before the first run the placeholder content is stale
        let report = check(root, &test_config()).await.unwrap();
        assert!(!report.is_clean());
        assert_eq!(report.stale, vec!["net".to_string()]);

        run(root, &test_config()).await.unwrap();

        let report = check(root, &test_config()).await.unwrap();
        assert!(report.is_clean());
        assert_eq!(report.up_to_date, 1);
        assert_eq!(report.findings(), 0);
    }

    #[tokio::test]
    async fn test_check_reports_missing_sentinels() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        seed_template(root);
        seed(root, "net", TRANSPORT_TS);
        fs::write(root.join("packages/net/README.md"), "# net, no markers\n").unwrap();

        let report = check(root, &test_config()).await.unwrap();
        assert!(!report.is_clean());
        assert_eq!(report.missing_sentinels, vec!["net".to_string()]);
    }
}
