use std::time::Duration;

use clap::Parser;
use colored::Colorize;
use tracing::error;

use pengu_eligibility_checker::api::{AuthClient, EligibilityClient};
use pengu_eligibility_checker::checker::{BatchSummary, CheckOutcome, EligibilityChecker};
use pengu_eligibility_checker::cli::{Cli, Commands};
use pengu_eligibility_checker::{utils, CheckerError, Config, Result};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pengu_eligibility_checker=info".into()),
        )
        .init();

    let cli = Cli::parse();

    let config = match Config::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Check {
            file,
            concurrency,
            format,
            verbose,
        } => run_check(&config, file, concurrency, &format, verbose).await,

        Commands::Key { key } => run_single(&config, &key).await,
    };

    if let Err(e) = result {
        error!("{}", format!("Error: {}", e).red());
        std::process::exit(1);
    }
}

fn build_checker(
    config: &Config,
    concurrency: Option<usize>,
) -> Result<EligibilityChecker<AuthClient, EligibilityClient>> {
    let mut builder = reqwest::Client::builder();
    if let Some(secs) = config.api.request_timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    let http = builder.build()?;

    let auth = AuthClient::new(http.clone(), &config.api.base_url);
    let eligibility = EligibilityClient::new(http, &config.api.base_url);

    let mut checker_config = config.checker.clone();
    if let Some(limit) = concurrency {
        if limit == 0 {
            return Err(CheckerError::Config(
                "--concurrency must be at least 1".to_string(),
            ));
        }
        checker_config.max_concurrency = limit;
    }

    Ok(EligibilityChecker::new(auth, eligibility, &checker_config))
}

async fn run_check(
    config: &Config,
    file: Option<String>,
    concurrency: Option<usize>,
    format: &str,
    verbose: bool,
) -> Result<()> {
    let keys_file = file.unwrap_or_else(|| config.checker.keys_file.clone());
    let keys = utils::load_private_keys(&keys_file)?;
    println!(
        "{}",
        format!("Loaded {} private keys from {}", keys.len(), keys_file).cyan()
    );

    let checker = build_checker(config, concurrency)?;
    let summary = checker.check_all(&keys).await;

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    if verbose {
        print_report_table(&summary);
    }
    summary.print_summary();
    Ok(())
}

async fn run_single(config: &Config, key: &str) -> Result<()> {
    let checker = build_checker(config, None)?;
    let report = checker.check_one(key).await;

    let address = report.address.as_deref().unwrap_or("-");
    match &report.outcome {
        CheckOutcome::Eligible(result) => {
            println!(
                "{} - Total: {} - TotalUnclaimed: {}",
                address,
                result.total.to_string().green(),
                result.total_unclaimed.to_string().yellow()
            );
        }
        outcome => {
            println!("{} - {}", address, outcome.label().yellow());
        }
    }
    Ok(())
}

fn print_report_table(summary: &BatchSummary) {
    println!("\n{}", "Per-address results:".yellow());
    utils::print_table_border(80);
    utils::print_table_row(&["#", "Address", "Outcome", "Total", "Unclaimed"], &[4, 20, 14, 12, 12]);
    utils::print_table_border(80);

    for report in &summary.reports {
        let address = report
            .address
            .as_deref()
            .map(utils::format_address)
            .unwrap_or_else(|| "-".to_string());
        let (total, unclaimed) = match report.outcome.eligibility() {
            Some(result) => (result.total.to_string(), result.total_unclaimed.to_string()),
            None => ("-".to_string(), "-".to_string()),
        };
        utils::print_table_row(
            &[
                &(report.index + 1).to_string(),
                &address,
                report.outcome.label(),
                &total,
                &unclaimed,
            ],
            &[4, 20, 14, 12, 12],
        );
    }
    utils::print_table_border(80);
}
