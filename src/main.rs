use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tokio::runtime::Runtime;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "docstitch")]
#[command(
    version,
    about = "Splices generated API reference tables into monorepo package READMEs"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long, short, default_value = "docstitch.toml")]
    config: PathBuf,

    #[arg(long)]
    verbose: bool,

    #[arg(long, short)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize docstitch in the current directory
    Init {
        #[arg(long, short, help = "Overwrite existing configuration")]
        force: bool,
    },

    /// Extract docs and rewrite package READMEs
    Generate {
        #[arg(long, help = "Project root (defaults to the current directory)")]
        root: Option<PathBuf>,
    },

    /// Verify package READMEs are up to date, without writing
    Check {
        #[arg(long, help = "Project root (defaults to the current directory)")]
        root: Option<PathBuf>,
    },

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration after merging all sources
    Show {
        #[arg(
            short = 'f',
            long,
            default_value = "toml",
            help = "Output format: toml, json"
        )]
        format: String,
    },
    /// Print config and template file locations
    Path,
}

/// Report panic context before the default hook prints its backtrace
fn setup_panic_handler() {
    let default_hook = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |panic_info| {
        let message = panic_info.payload_as_str().unwrap_or("unknown panic");

        eprintln!("\n\x1b[1;31m━━━ PANIC ━━━\x1b[0m");
        eprintln!("\x1b[31mdocstitch hit an unexpected internal error:\x1b[0m");
        eprintln!("  {message}");
        if let Some(location) = panic_info.location() {
            eprintln!("\x1b[90mat {location}\x1b[0m");
        }
        eprintln!("\n\x1b[33mPlease report this at:\x1b[0m");
        eprintln!("  https://github.com/docstitch/docstitch/issues\n");

        // The default hook still prints the backtrace under RUST_BACKTRACE=1
        default_hook(panic_info);
    }));
}

fn main() -> ExitCode {
    setup_panic_handler();

    if let Err(e) = run_cli() {
        eprintln!("\x1b[31mError:\x1b[0m {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = match (cli.verbose, cli.quiet) {
        (true, _) => "debug",
        (_, true) => "error",
        _ => "info",
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::Init { force } => docstitch::cli::commands::init::run(force)?,
        Commands::Generate { root } => {
            Runtime::new()?.block_on(docstitch::cli::commands::generate::run(root, &cli.config))?
        }
        Commands::Check { root } => {
            Runtime::new()?.block_on(docstitch::cli::commands::check::run(root, &cli.config))?
        }
        Commands::Config { action } => match action {
            ConfigAction::Show { format } => {
                docstitch::cli::commands::config::show(&cli.config, &format)?
            }
            ConfigAction::Path => docstitch::cli::commands::config::path(&cli.config)?,
        },
    }

    Ok(())
}
