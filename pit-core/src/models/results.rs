use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::insurance::InsuranceBreakdown;

/// Tax attributable to one bracket for a given taxable income.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketLine {
    /// 1-based position in the schedule.
    pub bracket_index: usize,
    pub label: String,
    pub rate: Decimal,
    pub lower_bound: Decimal,
    /// `None` for the open-ended top bracket.
    pub upper_bound: Option<Decimal>,
    pub taxable_amount: Decimal,
    pub tax_amount: Decimal,
    pub is_highest_reached: bool,
}

/// Outcome of the progressive schedule for one taxable income.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressiveTax {
    pub tax: Decimal,
    pub bracket_label: String,
    pub lines: Vec<BracketLine>,
}

/// Full evaluation of one salary under one regime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegimeResult {
    pub gross_salary: Decimal,
    pub insurance: InsuranceBreakdown,
    pub personal_deduction: Decimal,
    pub dependent_deduction: Decimal,
    pub total_deduction: Decimal,
    pub taxable_income: Decimal,
    pub tax_amount: Decimal,
    pub net_salary: Decimal,
    pub current_bracket_label: String,
    pub bracket_lines: Vec<BracketLine>,
}

/// Old and new regime results for the same input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub old_regime: RegimeResult,
    pub new_regime: RegimeResult,
    /// New net minus old net.
    pub savings_amount: Decimal,
    /// Savings as a percentage of the old net salary; zero when that is not positive.
    pub savings_percent: Decimal,
}
