use anyhow::Result;
use clap::Parser;

use version_check::cli::orchestration::{run_check, CheckArgs};
use version_check::{config, ui};

#[derive(clap::Parser)]
#[command(
    name = "version-check",
    about = "Report whether a newer semantic version is available and what kind of change it is"
)]
struct Args {
    #[arg(help = "Version currently running (e.g. v1.2.3)")]
    current: Option<String>,

    #[arg(help = "Latest known version (e.g. 1.3.0-beta)")]
    latest: Option<String>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, help = "Fail when a version cannot be parsed")]
    strict: bool,

    #[arg(short, long, help = "Print only the change kind, or 'none'")]
    quiet: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    if args.version {
        println!("version-check {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    let check = CheckArgs {
        current: args.current,
        latest: args.latest,
        strict: args.strict,
    };

    match run_check(check, &config) {
        Ok(report) => ui::display_report(&report, args.quiet),
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    }

    Ok(())
}
