use anyhow::Result;
use clap::Parser;

use auto_release::config;
use auto_release::release::{ReleaseOrchestrator, ReleaseOutcome, ReleaseRequest};
use auto_release::store::FileVersionStore;
use auto_release::testrunner::ProcessTestRunner;
use auto_release::ui;
use auto_release::vcs::Git2Vcs;

#[derive(clap::Parser)]
#[command(
    name = "auto-release",
    about = "Automate patch releases: bump the version, commit, tag, and push"
)]
struct Args {
    #[arg(
        long,
        default_value = "CHANGELOG.md",
        help = "Path to the changelog file"
    )]
    changelog: String,

    #[arg(long = "test", help = "Run in test mode without modifying files")]
    test: bool,

    #[arg(
        short,
        long,
        help = "Force release even if uncommitted changes are present"
    )]
    force: bool,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("auto-release {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Load configuration
    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize the version control backend
    let vcs = match Git2Vcs::new() {
        Ok(vcs) => vcs,
        Err(e) => {
            ui::display_error(&format!("Git repository error: {}", e));
            std::process::exit(1);
        }
    };

    let store = FileVersionStore::new(&config.files.metadata, &config.files.version_file);
    let runner = ProcessTestRunner::new(config.tests.runner.clone(), &config.tests.dir);

    let orchestrator =
        ReleaseOrchestrator::new(&vcs, &runner, &store, &config.remote, &config.branch);

    let request = ReleaseRequest {
        test_mode: args.test,
        force: args.force,
        changelog_path: args.changelog,
    };

    match orchestrator.execute(&request) {
        ReleaseOutcome::Completed { version } => {
            if request.test_mode {
                ui::display_success(&format!(
                    "Test mode: version {} would be released",
                    version
                ));
            } else {
                ui::display_success(&format!("Successfully released version {}", version));
            }
            Ok(())
        }
        ReleaseOutcome::Aborted { reason } => {
            ui::display_error(&format!("Release aborted: {}", reason));
            ui::display_status("Commit or stash your changes, or re-run with --force.");
            std::process::exit(1);
        }
        ReleaseOutcome::Failed { reason } => {
            ui::display_error(&format!("Release failed: {}", reason));
            std::process::exit(1);
        }
    }
}
