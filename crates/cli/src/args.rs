use clap::{Parser, Subcommand};
use neo_invoke_core::Fixed8;
use std::path::PathBuf;

/// Command-line arguments for Neo Invoke
#[derive(Parser, Debug, Clone)]
#[command(
    name = "neo-invoke",
    version = env!("CARGO_PKG_VERSION"),
    about = "Encode Neo contract calls and price their dry runs",
    long_about = "Neo Invoke builds call scripts for deployed contracts, imports existing scripts and derives network fees from recorded dry-run results."
)]
pub struct CliArgs {
    /// Path to the TOML configuration file (defaults apply when it does not exist)
    #[arg(short = 'c', long = "config", value_name = "FILE", default_value = "neo-invoke.toml")]
    pub config: PathBuf,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Encode a call script from a contract registry and argument texts
    Encode {
        /// JSON file holding an array of contract records
        #[arg(long, value_name = "FILE")]
        registry: PathBuf,

        /// Script hash of the contract to call
        #[arg(long, value_name = "HASH")]
        contract: String,

        /// Argument text, once per declared parameter, in order
        #[arg(long = "arg", value_name = "TEXT")]
        args: Vec<String>,
    },

    /// Print the hex of a script file
    Import {
        /// Raw script file
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Derive the fee for a given GAS consumption
    Estimate {
        /// GAS consumed by the dry run
        #[arg(long, value_name = "DECIMAL")]
        gas_consumed: Fixed8,

        /// GAS already set on the draft
        #[arg(long, value_name = "DECIMAL", default_value = "0")]
        existing_gas: Fixed8,
    },

    /// Interpret a recorded dry-run result
    Interpret {
        /// JSON file with `state`, `gas_consumed` and `stack`
        #[arg(long, value_name = "FILE")]
        result: PathBuf,

        /// GAS already set on the draft
        #[arg(long, value_name = "DECIMAL", default_value = "0")]
        existing_gas: Fixed8,
    },
}
