//! Plain-text and JSON rendering of engine results.

use std::fmt::Write as _;

use comfy_table::{Attribute, Cell, CellAlignment, Color, Table};
use pit_core::calculations::insurance::{HEALTH_RATE, SOCIAL_HEALTH_CEILING, SOCIAL_RATE, UNEMPLOYMENT_RATE};
use pit_core::{
    BracketLine, ComparisonResult, InsuranceBreakdown, InvalidInput, Regime, RegimeResult, Region,
};
use pit_data::Scenario;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use crate::format::{format_currency, format_currency_short, format_percent, format_rate};

const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Display period. Yearly multiplies every amount by 12; percentages and
/// bracket bounds are left alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    #[default]
    Monthly,
    Yearly,
}

impl Period {
    pub fn from_yearly(yearly: bool) -> Self {
        if yearly { Self::Yearly } else { Self::Monthly }
    }

    pub fn multiplier(&self) -> Decimal {
        match self {
            Self::Monthly => Decimal::ONE,
            Self::Yearly => MONTHS_PER_YEAR,
        }
    }

    pub fn suffix(&self) -> &'static str {
        match self {
            Self::Monthly => "/month",
            Self::Yearly => "/year",
        }
    }
}

// ============================================================================
// Period scaling
// ============================================================================

fn scale_insurance(
    insurance: &InsuranceBreakdown,
    factor: Decimal,
) -> InsuranceBreakdown {
    InsuranceBreakdown {
        social: insurance.social * factor,
        health: insurance.health * factor,
        unemployment: insurance.unemployment * factor,
        total: insurance.total * factor,
    }
}

fn scale_line(
    line: &BracketLine,
    factor: Decimal,
) -> BracketLine {
    BracketLine {
        taxable_amount: line.taxable_amount * factor,
        tax_amount: line.tax_amount * factor,
        ..line.clone()
    }
}

fn scale_regime(
    result: &RegimeResult,
    factor: Decimal,
) -> RegimeResult {
    RegimeResult {
        gross_salary: result.gross_salary * factor,
        insurance: scale_insurance(&result.insurance, factor),
        personal_deduction: result.personal_deduction * factor,
        dependent_deduction: result.dependent_deduction * factor,
        total_deduction: result.total_deduction * factor,
        taxable_income: result.taxable_income * factor,
        tax_amount: result.tax_amount * factor,
        net_salary: result.net_salary * factor,
        current_bracket_label: result.current_bracket_label.clone(),
        bracket_lines: result.bracket_lines.iter().map(|l| scale_line(l, factor)).collect(),
    }
}

/// Returns a copy of `result` with amounts expressed per `period`.
pub fn scale_comparison(
    result: &ComparisonResult,
    period: Period,
) -> ComparisonResult {
    let factor = period.multiplier();
    ComparisonResult {
        old_regime: scale_regime(&result.old_regime, factor),
        new_regime: scale_regime(&result.new_regime, factor),
        savings_amount: result.savings_amount * factor,
        savings_percent: result.savings_percent,
    }
}

// ============================================================================
// JSON reports
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReport {
    pub period: Period,
    #[serde(flatten)]
    pub result: ComparisonResult,
}

impl ComparisonReport {
    pub fn new(
        result: &ComparisonResult,
        period: Period,
    ) -> Self {
        Self {
            period,
            result: scale_comparison(result, period),
        }
    }
}

/// One batch row: either a comparison or the reason the row was rejected.
#[derive(Debug, Clone, Serialize)]
pub struct BatchEntry {
    pub label: String,
    pub basis: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<ComparisonResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub fn batch_entries(
    scenarios: &[Scenario],
    results: &[Result<ComparisonResult, InvalidInput>],
    period: Period,
) -> Vec<BatchEntry> {
    scenarios
        .iter()
        .zip(results)
        .map(|(scenario, result)| {
            let (result, error) = match result {
                Ok(r) => (Some(scale_comparison(r, period)), None),
                Err(e) => (None, Some(e.to_string())),
            };
            BatchEntry {
                label: scenario.label.clone(),
                basis: scenario.basis.to_string(),
                result,
                error,
            }
        })
        .collect()
}

// ============================================================================
// Text tables
// ============================================================================

fn amount_cell(amount: Decimal) -> Cell {
    Cell::new(format_currency(amount)).set_alignment(CellAlignment::Right)
}

fn difference_cell(difference: Decimal) -> Cell {
    let cell = amount_cell(difference);
    if difference > Decimal::ZERO {
        cell.fg(Color::Green)
    } else if difference < Decimal::ZERO {
        cell.fg(Color::Red)
    } else {
        cell
    }
}

/// Side-by-side old/new table followed by the savings line. With
/// `details`, the per-bracket breakdown of both regimes is appended.
pub fn render_comparison(
    result: &ComparisonResult,
    period: Period,
    details: bool,
) -> String {
    let scaled = scale_comparison(result, period);
    let old = &scaled.old_regime;
    let new = &scaled.new_regime;

    let mut table = Table::new();
    table.set_header(vec![
        Cell::new(format!("VND{}", period.suffix())),
        Cell::new(Regime::Old.name()),
        Cell::new(Regime::New.name()),
        Cell::new("Difference"),
    ]);

    let rows: [(&str, fn(&RegimeResult) -> Decimal); 10] = [
        ("Gross salary", |r| r.gross_salary),
        ("Social insurance (8%)", |r| r.insurance.social),
        ("Health insurance (1.5%)", |r| r.insurance.health),
        ("Unemployment insurance (1%)", |r| r.insurance.unemployment),
        ("Total insurance", |r| r.insurance.total),
        ("Personal deduction", |r| r.personal_deduction),
        ("Dependent deduction", |r| r.dependent_deduction),
        ("Taxable income", |r| r.taxable_income),
        ("Income tax", |r| r.tax_amount),
        ("Net salary", |r| r.net_salary),
    ];
    for (label, field) in rows {
        let (a, b) = (field(old), field(new));
        let row = vec![Cell::new(label), amount_cell(a), amount_cell(b), difference_cell(b - a)];
        if label == "Net salary" {
            table.add_row(row.into_iter().map(|c| c.add_attribute(Attribute::Bold)).collect::<Vec<_>>());
        } else {
            table.add_row(row);
        }
    }
    table.add_row(vec![
        Cell::new("Highest bracket"),
        Cell::new(&old.current_bracket_label),
        Cell::new(&new.current_bracket_label),
        Cell::new(""),
    ]);

    let mut out = format!("{table}\n");
    let _ = writeln!(
        out,
        "Savings under the new law: {} VND{} ({}, {})",
        format_currency(scaled.savings_amount),
        period.suffix(),
        format_currency_short(scaled.savings_amount),
        format_percent(scaled.savings_percent),
    );

    if details {
        for (regime, regime_result) in [(Regime::Old, old), (Regime::New, new)] {
            let _ = writeln!(out, "\n{}", regime.name());
            out.push_str(&render_bracket_lines(&regime_result.bracket_lines));
            out.push('\n');
        }
    }
    out
}

/// Per-bracket breakdown. An empty slice means nothing was taxable.
pub fn render_bracket_lines(lines: &[BracketLine]) -> String {
    if lines.is_empty() {
        return "No taxable income.".to_string();
    }

    let mut table = Table::new();
    table.set_header(vec![
        Cell::new("Bracket"),
        Cell::new("Range"),
        Cell::new("Rate"),
        Cell::new("Taxed amount"),
        Cell::new("Tax"),
    ]);
    for line in lines {
        let label = if line.is_highest_reached {
            Cell::new(&line.label).add_attribute(Attribute::Bold)
        } else {
            Cell::new(&line.label)
        };
        table.add_row(vec![
            label,
            Cell::new(range_text(line.lower_bound, line.upper_bound)),
            Cell::new(format_rate(line.rate)).set_alignment(CellAlignment::Right),
            amount_cell(line.taxable_amount),
            amount_cell(line.tax_amount),
        ]);
    }
    let total: Decimal = lines.iter().map(|l| l.tax_amount).sum();
    table.add_row(vec![
        Cell::new("Total").add_attribute(Attribute::Bold),
        Cell::new(""),
        Cell::new(""),
        Cell::new(""),
        amount_cell(total).add_attribute(Attribute::Bold),
    ]);
    table.to_string()
}

fn range_text(
    lower: Decimal,
    upper: Option<Decimal>,
) -> String {
    match upper {
        Some(upper) => format!("{} - {}", format_currency_short(lower), format_currency_short(upper)),
        None => format!("over {}", format_currency_short(lower)),
    }
}

/// One summary row per scenario; rejected rows carry the error message.
pub fn render_batch(
    scenarios: &[Scenario],
    results: &[Result<ComparisonResult, InvalidInput>],
    period: Period,
) -> String {
    let mut table = Table::new();
    table.set_header(vec![
        Cell::new("Label"),
        Cell::new("Basis"),
        Cell::new(format!("Gross{}", period.suffix())),
        Cell::new("Old net"),
        Cell::new("New net"),
        Cell::new("Savings"),
        Cell::new("Savings %"),
    ]);

    let mut rejected = 0usize;
    for (scenario, result) in scenarios.iter().zip(results) {
        match result {
            Ok(result) => {
                let scaled = scale_comparison(result, period);
                table.add_row(vec![
                    Cell::new(&scenario.label),
                    Cell::new(scenario.basis),
                    amount_cell(scaled.old_regime.gross_salary),
                    amount_cell(scaled.old_regime.net_salary),
                    amount_cell(scaled.new_regime.net_salary),
                    difference_cell(scaled.savings_amount),
                    Cell::new(format_percent(scaled.savings_percent)).set_alignment(CellAlignment::Right),
                ]);
            }
            Err(e) => {
                rejected += 1;
                table.add_row(vec![
                    Cell::new(&scenario.label),
                    Cell::new(scenario.basis),
                    Cell::new(format!("error: {e}")).fg(Color::Red),
                    Cell::new("-"),
                    Cell::new("-"),
                    Cell::new("-"),
                    Cell::new("-"),
                ]);
            }
        }
    }

    format!(
        "{table}\n{} scenarios, {} rejected\n",
        scenarios.len(),
        rejected
    )
}

/// Deductions, bracket schedules and insurance ceilings of both regimes.
pub fn render_regime_tables() -> String {
    let mut out = String::new();

    for regime in Regime::all() {
        let config = regime.config();
        let _ = writeln!(out, "{}", regime.name());
        let _ = writeln!(
            out,
            "  Personal deduction: {} VND/month",
            format_currency(config.personal_deduction)
        );
        let _ = writeln!(
            out,
            "  Dependent deduction: {} VND/month per dependent",
            format_currency(config.per_dependent_deduction)
        );

        let mut table = Table::new();
        table.set_header(vec![Cell::new("Bracket"), Cell::new("Taxable income"), Cell::new("Rate")]);
        let mut lower = Decimal::ZERO;
        for bracket in config.brackets {
            table.add_row(vec![
                Cell::new(bracket.label),
                Cell::new(range_text(lower, bracket.upper_limit)),
                Cell::new(format_rate(bracket.rate)).set_alignment(CellAlignment::Right),
            ]);
            if let Some(upper) = bracket.upper_limit {
                lower = upper;
            }
        }
        let _ = writeln!(out, "{table}\n");
    }

    let _ = writeln!(
        out,
        "Employee insurance: social {}, health {}, unemployment {}",
        format_rate(SOCIAL_RATE),
        format_rate(HEALTH_RATE),
        format_rate(UNEMPLOYMENT_RATE)
    );
    let _ = writeln!(
        out,
        "Social/health salary ceiling: {} VND",
        format_currency(SOCIAL_HEALTH_CEILING)
    );

    let mut table = Table::new();
    table.set_header(vec![Cell::new("Region"), Cell::new("Unemployment ceiling")]);
    for region in Region::all() {
        table.add_row(vec![
            Cell::new(format!("Region {}", region.id())),
            amount_cell(region.unemployment_ceiling()),
        ]);
    }
    let _ = writeln!(out, "{table}");
    out
}
