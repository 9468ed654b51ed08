//! Command-line interface definitions.
//!
//! Two subcommands: `transfer` moves ether from the active wallet, `verify`
//! submits contract sources to the block explorer.

use std::path::PathBuf;

use alloy_primitives::Address;
use clap::{Args, Parser, Subcommand};

use crate::domain::Network;

/// Wallet transfers and block-explorer contract verification
#[derive(Parser, Debug)]
#[command(name = "walletctl")]
#[command(version)]
pub struct Cli {
    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to the configuration file [default: ~/.walletctl/config.toml]
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Transfer ether from the active wallet
    Transfer(TransferArgs),

    /// Verify a deployed contract's source on the block explorer
    Verify(VerifyArgs),
}

/// Exactly one of `--testnet` / `--mainnet`.
#[derive(Args, Debug, Clone, Copy)]
#[group(required = true, multiple = false)]
pub struct NetworkArgs {
    /// Use the Sepolia test network
    #[arg(long)]
    pub testnet: bool,

    /// Use Ethereum mainnet
    #[arg(long)]
    pub mainnet: bool,
}

impl NetworkArgs {
    #[must_use]
    pub const fn network(&self) -> Network {
        Network::from_testnet_flag(self.testnet)
    }
}

/// Arguments for `walletctl transfer`.
#[derive(Args, Debug)]
pub struct TransferArgs {
    #[command(flatten)]
    pub network: NetworkArgs,

    /// Wallet store to read the active wallet from [default: ~/.walletctl/wallets.json]
    #[arg(long)]
    pub wallet_store: Option<PathBuf>,

    /// Recipient address (0x-prefixed, 20 bytes)
    pub recipient: Address,

    /// Amount in ether (e.g. 0.5)
    pub amount: String,
}

/// Arguments for `walletctl verify`.
#[derive(Args, Debug)]
pub struct VerifyArgs {
    #[command(flatten)]
    pub network: NetworkArgs,

    /// JSON Standard Input (build-info) file
    pub artifact: PathBuf,

    /// Deployed contract address
    pub address: Address,

    /// Contract name
    pub name: String,

    /// Constructor arguments, in order
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub constructor_args: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    const RECIPIENT: &str = "0x00000000000000000000000000000000000000bb";

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_name() {
        assert_eq!(Cli::command().get_name(), "walletctl");
    }

    #[test]
    fn test_transfer_parses() {
        let cli = Cli::try_parse_from(["walletctl", "transfer", "--testnet", RECIPIENT, "0.5"])
            .unwrap();
        let Commands::Transfer(args) = cli.command else {
            panic!("expected transfer");
        };
        assert_eq!(args.network.network(), Network::Testnet);
        assert_eq!(args.amount, "0.5");
        assert_eq!(args.recipient.to_string().to_lowercase(), RECIPIENT);
    }

    #[test]
    fn test_network_flag_is_required() {
        assert!(Cli::try_parse_from(["walletctl", "transfer", RECIPIENT, "1"]).is_err());
    }

    #[test]
    fn test_network_flags_conflict() {
        assert!(Cli::try_parse_from([
            "walletctl",
            "transfer",
            "--testnet",
            "--mainnet",
            RECIPIENT,
            "1"
        ])
        .is_err());
    }

    #[test]
    fn test_invalid_recipient_is_rejected() {
        assert!(
            Cli::try_parse_from(["walletctl", "transfer", "--mainnet", "0xabc", "1"]).is_err()
        );
    }

    #[test]
    fn test_verify_collects_constructor_args() {
        let cli = Cli::try_parse_from([
            "walletctl",
            "verify",
            "--mainnet",
            "build-info.json",
            RECIPIENT,
            "Token",
            "1000",
            "-5",
            "My Token",
        ])
        .unwrap();
        let Commands::Verify(args) = cli.command else {
            panic!("expected verify");
        };
        assert_eq!(args.network.network(), Network::Mainnet);
        assert_eq!(args.name, "Token");
        assert_eq!(args.constructor_args, vec!["1000", "-5", "My Token"]);
    }

    #[test]
    fn test_verify_without_constructor_args() {
        let cli = Cli::try_parse_from([
            "walletctl",
            "verify",
            "--testnet",
            "build-info.json",
            RECIPIENT,
            "Token",
        ])
        .unwrap();
        let Commands::Verify(args) = cli.command else {
            panic!("expected verify");
        };
        assert!(args.constructor_args.is_empty());
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::try_parse_from([
            "walletctl",
            "transfer",
            "--testnet",
            RECIPIENT,
            "1",
            "--json",
            "-vv",
            "--color",
            "never",
        ])
        .unwrap();
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.color, ColorChoice::Never));
    }
}
