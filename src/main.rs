use clap::Parser;
use profile_score::types::profile::Category;
use profile_score::{batch, cli, config, input, report, score, ProfileError};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, _) => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("profile_score={level}")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn output_format(format: &cli::ReportFormat) -> report::OutputFormat {
    match format {
        cli::ReportFormat::Json => report::OutputFormat::Json,
        cli::ReportFormat::Md => report::OutputFormat::Md,
    }
}

fn run() -> Result<i32, ProfileError> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let loaded = config::load_config(&cli.config)?;
    let weights = loaded.weights();
    let min_percent = loaded.min_percent();

    match cli.command {
        cli::Commands::Score(cmd) => {
            let text = input::read_source(&cmd.path)?;
            let profile = input::parse_snapshot(&text)?;
            let source = cmd.path.display().to_string();
            info!(source = %source, "scoring snapshot");

            let scored = score::evaluate(profile.as_ref(), &weights);
            let profile_report = report::build(&source, scored);
            let rendered = report::render(&profile_report, output_format(&cmd.format))?;
            println!("{rendered}");

            if profile_report.below(min_percent) {
                if !cli.quiet {
                    eprintln!(
                        "warning: completion {}% is below minimum {}%",
                        profile_report.result.percent, min_percent
                    );
                }
                Ok(exit_code::WARNINGS)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
        cli::Commands::Batch(cmd) => {
            let outcome = batch::score_directory(&cmd.dir, &weights, min_percent)?;
            let rendered = report::render_batch(
                &outcome.reports,
                &outcome.summary,
                output_format(&cmd.format),
            )?;
            println!("{rendered}");

            if !cli.quiet {
                for (path, err) in &outcome.failures {
                    eprintln!("warning: {}: {}", path.display(), err);
                }
            }

            if outcome.summary.failed > 0 || outcome.summary.below_threshold > 0 {
                Ok(exit_code::WARNINGS)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
        cli::Commands::Gaps(cmd) => {
            let text = input::read_source(&cmd.path)?;
            let profile = input::parse_snapshot(&text)?;
            if profile.is_none() {
                warn!("snapshot is null; every field is missing");
            }

            let gaps = score::missing_by_category(profile.as_ref());
            if gaps.is_empty() {
                println!("gaps: profile complete");
                return Ok(exit_code::SUCCESS);
            }

            println!("gaps:");
            for (category, fields) in &gaps {
                println!("- {}: {}", category.report_key(), fields.join(", "));
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Weights => {
            for category in Category::ALL {
                println!("{} = {}", category.config_key(), weights.get(category));
            }
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
