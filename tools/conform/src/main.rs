use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use conform::config::ConformConfig;
use conform::{report, reporter};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Verify that a project tree matches its declared layout, SQL and documentation rules.
#[derive(Parser, Debug)]
#[command(name = "conform", version)]
struct Cli {
    /// Project root (defaults to the nearest ancestor containing .git)
    #[arg(long = "root-dir")]
    root_dir: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Run only the named suite (repeatable)
    #[arg(
        long = "suite",
        value_parser = clap::builder::PossibleValuesParser::new(
            conform::suites::ALL.iter().map(|(name, _)| *name)
        )
    )]
    suites: Vec<String>,

    /// Print the rule catalog instead of running it
    #[arg(long)]
    list: bool,

    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::new(if verbose { "conform=debug" } else { "conform=warn" });
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match cli.root_dir {
        Some(dir) => ConformConfig::from_root(&dir),
        None => match ConformConfig::discover() {
            Some(c) => c,
            None => {
                eprintln!("Error: Could not find project root. Run from within a git repository or use --root-dir.");
                process::exit(2);
            }
        },
    };
    if let Err(e) = config.validate() {
        eprintln!("Error: {e}");
        process::exit(2);
    }

    let sets = conform::build_suites(&config, &cli.suites);

    if cli.list {
        match cli.format {
            OutputFormat::Text => reporter::print_catalog(&sets),
            OutputFormat::Json => {
                if let Err(e) = reporter::print_catalog_json(&sets) {
                    eprintln!("Error: {e}");
                    process::exit(2);
                }
            }
        }
        return;
    }

    let all_passed = match cli.format {
        OutputFormat::Text => {
            reporter::print_header();
            let mut reports = Vec::with_capacity(sets.len());
            for set in &sets {
                let report = set.run();
                reporter::print_suite(set, &report);
                reports.push(report);
            }
            let report = report::aggregate(reports);
            reporter::print_failures(&report);
            reporter::print_summary(&report)
        }
        OutputFormat::Json => {
            let report = conform::run_suites(&sets);
            if let Err(e) = reporter::print_json(&report) {
                eprintln!("Error: {e}");
                process::exit(2);
            }
            // Failure blocks still go to the diagnostic stream.
            reporter::print_failures(&report);
            report.all_passed()
        }
    };

    process::exit(if all_passed { 0 } else { 1 });
}
