//! End-to-end runs of the subcommands against on-disk fixtures.

use std::path::{Path, PathBuf};

use clap::Parser;
use pit_cli::cli::Cli;
use pit_cli::commands::run;
use pit_cli::config::CliConfig;
use pit_core::InsuranceMode;
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::Value;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures").join(name)
}

fn run_args(
    args: &[&str],
    config: &CliConfig,
) -> anyhow::Result<String> {
    let cli = Cli::try_parse_from(std::iter::once("vn-pit").chain(args.iter().copied()))?;
    run(&cli.command, config)
}

/// Amounts are serialized as decimal strings.
fn amount(value: &Value) -> Decimal {
    value.as_str().unwrap().parse().unwrap()
}

#[test]
fn config_fixture_loads() {
    let config = CliConfig::load(&fixture("config.toml")).unwrap();

    assert_eq!(config.defaults.dependents, 2);
    assert_eq!(config.defaults.insurance_mode, InsuranceMode::Custom);
    assert_eq!(config.defaults.custom_insurance, Some(dec!(3150000)));
    assert!(config.defaults.yearly);
    assert_eq!(config.logging.level, "warn,pit_core=debug");
    assert_eq!(config.logging.file, None);
}

#[test]
fn compare_uses_config_defaults() {
    let config = CliConfig::load(&fixture("config.toml")).unwrap();

    let out = run_args(&["compare", "--gross", "40000000", "--format", "json"], &config).unwrap();
    let json: Value = serde_json::from_str(&out).unwrap();

    assert_eq!(json["period"], "yearly");
    // 3,150,000 per month over twelve months.
    assert_eq!(amount(&json["old_regime"]["insurance"]["total"]), dec!(37800000));
    // Two dependents at 6,200,000 over twelve months.
    assert_eq!(amount(&json["new_regime"]["dependent_deduction"]), dec!(148800000));
}

#[test]
fn flags_override_config_defaults() {
    let config = CliConfig::load(&fixture("config.toml")).unwrap();

    let out = run_args(
        &[
            "compare",
            "--gross",
            "40000000",
            "--dependents",
            "0",
            "--insurance",
            "official",
            "--format",
            "json",
        ],
        &config,
    )
    .unwrap();
    let json: Value = serde_json::from_str(&out).unwrap();

    assert_eq!(amount(&json["old_regime"]["dependent_deduction"]), Decimal::ZERO);
    assert_eq!(amount(&json["old_regime"]["insurance"]["total"]), dec!(50400000));
}

#[test]
fn compare_text_defaults_to_monthly() {
    let out = run_args(&["compare", "--gross", "40.000.000", "--dependents", "2"], &CliConfig::default()).unwrap();

    assert!(out.contains("VND/month"));
    assert!(out.contains("34.150.000"));
    assert!(out.contains("35.405.000"));
}

#[test]
fn batch_fixture_renders_every_row() {
    let csv = fixture("scenarios.csv");

    let out = run_args(&["batch", csv.to_str().unwrap()], &CliConfig::default()).unwrap();

    assert!(out.contains("family"));
    assert!(out.contains("take-home target"));
    assert!(out.contains("4 scenarios, 1 rejected"));
}

#[test]
fn batch_fixture_json_marks_rejected_row() {
    let csv = fixture("scenarios.csv");

    let out = run_args(&["batch", csv.to_str().unwrap(), "--format", "json"], &CliConfig::default()).unwrap();
    let json: Value = serde_json::from_str(&out).unwrap();
    let rows = json.as_array().unwrap();

    assert_eq!(rows.len(), 4);
    assert_eq!(amount(&rows[0]["result"]["new_regime"]["net_salary"]), dec!(35405000));
    assert!(rows[3].get("result").is_none());
    assert_eq!(rows[3]["error"], "invalid input: custom insurance mode requires an amount");
}

#[test]
fn brackets_text_lists_both_laws() {
    let out = run_args(&["brackets"], &CliConfig::default()).unwrap();

    assert!(out.contains("Old law (7 brackets)"));
    assert!(out.contains("New law 2026 (5 brackets)"));
    assert!(out.contains("99.200.000"));
}
