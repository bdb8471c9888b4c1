//! Module for the CLI.

use crate::commands::{
    fees::{DecodeScalarArgs, EncodeOperatorFeeArgs, EncodeScalarArgs, OperatorFeeArgs},
    isthmus::IsthmusArgs,
    system_config::SystemConfigArgs,
};
use anyhow::{anyhow, Result};
use clap::{ArgAction, Parser, Subcommand};
use tracing::Level;

/// Main CLI
#[derive(Parser, Clone, Debug)]
#[command(author, version, about, long_about = None)]
pub(crate) struct Cli {
    /// Verbosity level (0-4)
    #[arg(long, short, help = "Verbosity level (0-4)", action = ArgAction::Count)]
    pub v: u8,
    /// The subcommand to run.
    #[clap(subcommand)]
    pub subcommand: UpgradesSubcommand,
}

/// Subcommands for the CLI.
#[derive(Debug, Clone, Subcommand)]
pub(crate) enum UpgradesSubcommand {
    /// Print the Isthmus network upgrade transactions.
    Isthmus(IsthmusArgs),
    /// Decode a versioned fee scalar word.
    DecodeScalar(DecodeScalarArgs),
    /// Encode fee scalars into a version 1 scalar word.
    EncodeScalar(EncodeScalarArgs),
    /// Decode an operator fee parameter word.
    DecodeOperatorFee(OperatorFeeArgs),
    /// Encode operator fee parameters into a word.
    EncodeOperatorFee(EncodeOperatorFeeArgs),
    /// Decode a JSON system config and print its projection.
    SystemConfig(SystemConfigArgs),
}

impl Cli {
    /// Initializes telemetry for the application.
    pub(crate) fn init_telemetry(self) -> Result<Self> {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(match self.v {
                0 => Level::ERROR,
                1 => Level::WARN,
                2 => Level::INFO,
                3 => Level::DEBUG,
                _ => Level::TRACE,
            })
            .finish();
        tracing::subscriber::set_global_default(subscriber).map_err(|e| anyhow!(e))?;
        Ok(self)
    }

    /// Runs the selected subcommand and prints its output.
    pub(crate) fn run(&self) -> Result<()> {
        let output = match &self.subcommand {
            UpgradesSubcommand::Isthmus(args) => args.exec()?,
            UpgradesSubcommand::DecodeScalar(args) => args.exec()?,
            UpgradesSubcommand::EncodeScalar(args) => args.exec(),
            UpgradesSubcommand::DecodeOperatorFee(args) => args.exec(),
            UpgradesSubcommand::EncodeOperatorFee(args) => args.exec(),
            UpgradesSubcommand::SystemConfig(args) => args.exec()?,
        };
        println!("{output}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_subcommands() {
        let cli = Cli::parse_from(["upgrades", "-vvv", "isthmus", "--json"]);
        assert_eq!(cli.v, 3);
        assert!(matches!(
            cli.subcommand,
            UpgradesSubcommand::Isthmus(IsthmusArgs { json: true, .. })
        ));

        let cli = Cli::parse_from([
            "upgrades",
            "encode-operator-fee",
            "--scalar",
            "20000",
            "--constant",
            "500",
        ]);
        assert!(matches!(
            cli.subcommand,
            UpgradesSubcommand::EncodeOperatorFee(EncodeOperatorFeeArgs {
                scalar: 20_000,
                constant: 500
            })
        ));
    }

    #[test]
    fn test_parse_rejects_short_word() {
        assert!(Cli::try_parse_from(["upgrades", "decode-scalar", "0x01"]).is_err());
    }
}
