//! Subcommand execution. Each command returns the text to print on stdout.

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use pit_core::calculations::{evaluate_regime, search_gross_for_net};
use pit_core::{InsuranceMode, Regime, RegimeConfig, TaxInput};
use pit_data::{SalaryBasis, Scenario, ScenarioLoader};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, info};

use crate::cli::{Command, HouseholdArgs, OutputFormat, SalaryArgs};
use crate::config::{CliConfig, Defaults};
use crate::format::format_currency;
use crate::report::{
    ComparisonReport, Period, batch_entries, render_batch, render_comparison, render_regime_tables,
};

/// Label given to a scenario built from command-line flags.
const CLI_SCENARIO_LABEL: &str = "command line";

/// Household settings after merging flags over config defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Household {
    pub dependents: i32,
    pub region: u8,
    pub insurance_mode: InsuranceMode,
    pub custom_insurance: Option<Decimal>,
}

impl Household {
    /// Flag > config file > built-in default. A custom amount given without
    /// a mode selects custom mode.
    pub fn resolve(
        args: &HouseholdArgs,
        defaults: &Defaults,
    ) -> Self {
        let insurance_mode = match (args.insurance_mode, args.custom_insurance) {
            (Some(mode), _) => mode,
            (None, Some(_)) => InsuranceMode::Custom,
            (None, None) => defaults.insurance_mode,
        };
        Self {
            dependents: args.dependents.unwrap_or(defaults.dependents),
            region: args.region.unwrap_or(defaults.region),
            insurance_mode,
            custom_insurance: args.custom_insurance.or(defaults.custom_insurance),
        }
    }

    pub fn tax_input(
        &self,
        gross_salary: Decimal,
    ) -> TaxInput {
        TaxInput {
            gross_salary,
            dependents: self.dependents,
            region: self.region,
            insurance_mode: self.insurance_mode,
            custom_insurance: self.custom_insurance,
        }
    }

    pub fn scenario(
        &self,
        salary: &SalaryArgs,
    ) -> Scenario {
        let (basis, amount) = match (salary.gross, salary.net) {
            (Some(gross), _) => (SalaryBasis::Gross, gross),
            (None, Some(net)) => (SalaryBasis::Net, net),
            (None, None) => (SalaryBasis::Gross, Decimal::ZERO),
        };
        Scenario {
            label: CLI_SCENARIO_LABEL.to_string(),
            basis,
            salary: amount,
            dependents: self.dependents,
            region: self.region,
            insurance_mode: self.insurance_mode,
            custom_insurance: self.custom_insurance,
        }
    }
}

pub fn run(
    command: &Command,
    config: &CliConfig,
) -> Result<String> {
    match command {
        Command::Compare {
            salary,
            household,
            yearly,
            details,
            format,
        } => {
            let household = Household::resolve(household, &config.defaults);
            let period = Period::from_yearly(*yearly || config.defaults.yearly);
            run_compare(&household.scenario(salary), period, *details, *format)
        }
        Command::GrossFromNet {
            net,
            regime,
            household,
            format,
        } => {
            let household = Household::resolve(household, &config.defaults);
            run_gross_from_net(*net, *regime, &household, *format)
        }
        Command::Batch { csv, yearly, format } => {
            let period = Period::from_yearly(*yearly || config.defaults.yearly);
            run_batch(csv, period, *format)
        }
        Command::Brackets { format } => run_brackets(*format),
    }
}

pub fn run_compare(
    scenario: &Scenario,
    period: Period,
    details: bool,
    format: OutputFormat,
) -> Result<String> {
    let result = scenario.compare()?;
    debug!(
        basis = %scenario.basis,
        salary = %scenario.salary,
        savings = %result.savings_amount,
        "comparison complete"
    );

    match format {
        OutputFormat::Text => Ok(render_comparison(&result, period, details)),
        OutputFormat::Json => to_json(&ComparisonReport::new(&result, period)),
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GrossFromNetReport {
    pub regime: Regime,
    pub target_net: Decimal,
    pub gross_salary: Decimal,
    /// Net salary recomputed at the solved gross.
    pub achieved_net: Decimal,
    pub iterations: u32,
    pub target_bracketed: bool,
}

pub fn run_gross_from_net(
    target_net: Decimal,
    regime: Regime,
    household: &Household,
    format: OutputFormat,
) -> Result<String> {
    let template = household.tax_input(Decimal::ZERO);
    let search = search_gross_for_net(target_net, &template, regime)?;
    let achieved = evaluate_regime(&template.with_gross(search.gross_salary), regime.config())?;

    let report = GrossFromNetReport {
        regime,
        target_net,
        gross_salary: search.gross_salary,
        achieved_net: achieved.net_salary,
        iterations: search.iterations,
        target_bracketed: search.target_bracketed,
    };

    match format {
        OutputFormat::Json => to_json(&report),
        OutputFormat::Text => {
            let mut out = format!(
                "{}: gross {} VND/month for a net of {} VND/month (actual net {}, {} iterations)\n",
                regime.name(),
                format_currency(report.gross_salary),
                format_currency(report.target_net),
                format_currency(report.achieved_net),
                report.iterations,
            );
            if !report.target_bracketed {
                out.push_str(
                    "Warning: the target net cannot be reached within the search range; the result is approximate.\n",
                );
            }
            Ok(out)
        }
    }
}

pub fn run_batch(
    path: &Path,
    period: Period,
    format: OutputFormat,
) -> Result<String> {
    let file = File::open(path).with_context(|| format!("cannot open '{}'", path.display()))?;
    let scenarios = ScenarioLoader::parse(file)
        .with_context(|| format!("cannot load scenarios from '{}'", path.display()))?;
    info!(count = scenarios.len(), path = %path.display(), "scenarios loaded");

    let results = ScenarioLoader::compare_all(&scenarios);

    match format {
        OutputFormat::Text => Ok(render_batch(&scenarios, &results, period)),
        OutputFormat::Json => to_json(&batch_entries(&scenarios, &results, period)),
    }
}

#[derive(Debug, Clone, Serialize)]
struct RegimeTable {
    regime: Regime,
    name: &'static str,
    #[serde(flatten)]
    config: RegimeConfig,
}

pub fn run_brackets(format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_regime_tables()),
        OutputFormat::Json => {
            let tables: Vec<RegimeTable> = Regime::all()
                .iter()
                .map(|regime| RegimeTable {
                    regime: *regime,
                    name: regime.name(),
                    config: *regime.config(),
                })
                .collect();
            to_json(&tables)
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    let mut json = serde_json::to_string_pretty(value).context("cannot serialize report")?;
    json.push('\n');
    Ok(json)
}

#[cfg(test)]
mod tests {
    use pit_core::InvalidInput;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn gross_args(amount: Decimal) -> SalaryArgs {
        SalaryArgs {
            gross: Some(amount),
            net: None,
        }
    }

    // ========================================================================
    // Household resolution
    // ========================================================================

    #[test]
    fn flags_override_config_defaults() {
        let defaults = Defaults {
            dependents: 3,
            region: 2,
            ..Defaults::default()
        };
        let args = HouseholdArgs {
            dependents: Some(1),
            ..HouseholdArgs::default()
        };

        let household = Household::resolve(&args, &defaults);

        assert_eq!(household.dependents, 1);
        assert_eq!(household.region, 2);
        assert_eq!(household.insurance_mode, InsuranceMode::Official);
    }

    #[test]
    fn custom_amount_implies_custom_mode() {
        let args = HouseholdArgs {
            custom_insurance: Some(dec!(5000000)),
            ..HouseholdArgs::default()
        };

        let household = Household::resolve(&args, &Defaults::default());

        assert_eq!(household.insurance_mode, InsuranceMode::Custom);
        assert_eq!(household.custom_insurance, Some(dec!(5000000)));
    }

    #[test]
    fn explicit_mode_wins_over_custom_amount() {
        let args = HouseholdArgs {
            insurance_mode: Some(InsuranceMode::None),
            custom_insurance: Some(dec!(5000000)),
            ..HouseholdArgs::default()
        };

        let household = Household::resolve(&args, &Defaults::default());

        assert_eq!(household.insurance_mode, InsuranceMode::None);
    }

    #[test]
    fn net_salary_builds_net_scenario() {
        let household = Household::resolve(&HouseholdArgs::default(), &Defaults::default());
        let salary = SalaryArgs {
            gross: None,
            net: Some(dec!(25000000)),
        };

        let scenario = household.scenario(&salary);

        assert_eq!(scenario.basis, SalaryBasis::Net);
        assert_eq!(scenario.salary, dec!(25000000));
        assert_eq!(scenario.label, CLI_SCENARIO_LABEL);
    }

    // ========================================================================
    // Commands
    // ========================================================================

    #[test]
    fn compare_text_report() {
        let household = Household {
            dependents: 2,
            ..Household::resolve(&HouseholdArgs::default(), &Defaults::default())
        };
        let scenario = household.scenario(&gross_args(dec!(40000000)));

        let out = run_compare(&scenario, Period::Monthly, false, OutputFormat::Text).unwrap();

        assert!(out.contains("35.405.000"));
        assert!(out.contains("3.67%"));
    }

    #[test]
    fn compare_propagates_invalid_input() {
        let household = Household {
            region: 9,
            ..Household::resolve(&HouseholdArgs::default(), &Defaults::default())
        };
        let scenario = household.scenario(&gross_args(dec!(40000000)));

        let err = run_compare(&scenario, Period::Monthly, false, OutputFormat::Text).unwrap_err();

        assert_eq!(
            err.downcast_ref::<InvalidInput>(),
            Some(&InvalidInput::UnknownRegion(9))
        );
    }

    #[test]
    fn compare_json_has_period() {
        let household = Household::resolve(&HouseholdArgs::default(), &Defaults::default());
        let scenario = household.scenario(&gross_args(dec!(30000000)));

        let out = run_compare(&scenario, Period::Yearly, false, OutputFormat::Json).unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(json["period"], "yearly");
        assert!(json["new_regime"]["net_salary"].is_string());
    }

    #[test]
    fn gross_from_net_meets_target() {
        let household = Household::resolve(&HouseholdArgs::default(), &Defaults::default());

        let out =
            run_gross_from_net(dec!(30000000), Regime::New, &household, OutputFormat::Json).unwrap();
        let report: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(report["regime"], "new");
        assert_eq!(report["target_bracketed"], true);
        let achieved: Decimal = report["achieved_net"].as_str().unwrap().parse().unwrap();
        assert!((achieved - dec!(30000000)).abs() <= dec!(1000), "achieved {achieved}");
    }

    #[test]
    fn gross_from_net_rejects_negative_target() {
        let household = Household::resolve(&HouseholdArgs::default(), &Defaults::default());

        let err = run_gross_from_net(dec!(-1), Regime::Old, &household, OutputFormat::Text).unwrap_err();

        assert_eq!(
            err.downcast_ref::<InvalidInput>(),
            Some(&InvalidInput::NegativeTargetNet(dec!(-1)))
        );
    }

    #[test]
    fn gross_from_net_text_flags_unreachable_target() {
        let household = Household {
            insurance_mode: InsuranceMode::Custom,
            custom_insurance: Some(dec!(100000000)),
            ..Household::resolve(&HouseholdArgs::default(), &Defaults::default())
        };

        let out =
            run_gross_from_net(dec!(10000000), Regime::New, &household, OutputFormat::Text).unwrap();

        assert!(out.contains("approximate"));
    }

    #[test]
    fn batch_reports_missing_file() {
        let err = run_batch(Path::new("/nonexistent/scenarios.csv"), Period::Monthly, OutputFormat::Text)
            .unwrap_err();

        assert!(err.to_string().contains("cannot open"));
    }

    #[test]
    fn brackets_json_lists_both_regimes() {
        let out = run_brackets(OutputFormat::Json).unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(json.as_array().map(Vec::len), Some(2));
        assert_eq!(json[0]["regime"], "old");
        assert_eq!(json[0]["brackets"].as_array().map(Vec::len), Some(7));
        assert_eq!(json[1]["brackets"].as_array().map(Vec::len), Some(5));
    }
}
