use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use pit_core::{InsuranceMode, Regime};
use rust_decimal::Decimal;

use crate::utils::{parse_amount, parse_insurance_mode, parse_regime};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Vietnamese personal income tax calculator.
///
/// Compares take-home pay under the current 7-bracket law and the 2026
/// 5-bracket law, and inverts net salary back to gross.
#[derive(Debug, Parser)]
#[command(name = "vn-pit", version)]
pub struct Cli {
    /// TOML file with household defaults and logging settings.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compare one salary under the old and new law.
    Compare {
        #[command(flatten)]
        salary: SalaryArgs,

        #[command(flatten)]
        household: HouseholdArgs,

        /// Show amounts per year instead of per month.
        #[arg(long)]
        yearly: bool,

        /// Append the per-bracket breakdown of both regimes.
        #[arg(long)]
        details: bool,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Find the gross salary that yields a given monthly net salary.
    GrossFromNet {
        /// Target monthly net salary in VND.
        #[arg(value_parser = parse_amount)]
        net: Decimal,

        /// Law used for the inversion.
        #[arg(long, value_parser = parse_regime, default_value = "new")]
        regime: Regime,

        #[command(flatten)]
        household: HouseholdArgs,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Compare every scenario in a CSV file.
    Batch {
        /// CSV with columns label,basis,salary,dependents,region,insurance_mode,custom_insurance.
        csv: PathBuf,

        /// Show amounts per year instead of per month.
        #[arg(long)]
        yearly: bool,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Print deductions, bracket schedules and insurance ceilings.
    Brackets {
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

/// Exactly one of gross or net salary.
#[derive(Debug, Clone, Args)]
#[group(required = true, multiple = false)]
pub struct SalaryArgs {
    /// Monthly gross salary in VND.
    #[arg(long, value_parser = parse_amount)]
    pub gross: Option<Decimal>,

    /// Monthly net salary in VND; resolved to gross under the new law.
    #[arg(long, value_parser = parse_amount)]
    pub net: Option<Decimal>,
}

/// Household settings. Anything omitted falls back to the config file.
#[derive(Debug, Clone, Default, Args)]
pub struct HouseholdArgs {
    /// Number of registered dependents.
    #[arg(long)]
    pub dependents: Option<i32>,

    /// Minimum-wage region, 1 to 4.
    #[arg(long)]
    pub region: Option<u8>,

    /// official, none or custom.
    #[arg(long = "insurance", value_parser = parse_insurance_mode)]
    pub insurance_mode: Option<InsuranceMode>,

    /// Total monthly insurance for custom mode. Implies `--insurance custom`
    /// when no mode is given.
    #[arg(long, value_parser = parse_amount)]
    pub custom_insurance: Option<Decimal>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
