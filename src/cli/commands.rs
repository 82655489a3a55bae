use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "pengu-check")]
#[command(about = "Batch airdrop eligibility checker for EVM wallets")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check eligibility for every private key in a file
    Check {
        /// Path to a file with one hex private key per line
        #[arg(short, long)]
        file: Option<String>,

        /// Maximum number of accounts checked concurrently
        #[arg(short, long)]
        concurrency: Option<usize>,

        /// Output format (table, json)
        #[arg(long, default_value = "table")]
        format: String,

        /// Show per-address results
        #[arg(short, long)]
        verbose: bool,
    },

    /// Check eligibility for a single private key
    Key {
        /// Hex-encoded private key, with or without 0x prefix
        key: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn check_defaults_to_table_output() {
        let cli = Cli::parse_from(["pengu-check", "check"]);
        match cli.command {
            Commands::Check { file, format, .. } => {
                assert!(file.is_none());
                assert_eq!(format, "table");
            }
            _ => panic!("expected check command"),
        }
    }
}
