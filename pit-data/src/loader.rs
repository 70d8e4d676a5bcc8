use std::io::Read;

use pit_core::{ComparisonResult, InsuranceMode, InvalidInput};
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

use crate::scenario::{SalaryBasis, Scenario};

/// Errors that can occur when loading scenario data.
#[derive(Debug, Error)]
pub enum ScenarioLoaderError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("unrecognised salary basis '{value}' on row {row}")]
    InvalidBasis { value: String, row: usize },

    #[error("unrecognised insurance mode '{value}' on row {row}")]
    InvalidInsuranceMode { value: String, row: usize },

    #[error(transparent)]
    InvalidInput(#[from] InvalidInput),
}

impl From<csv::Error> for ScenarioLoaderError {
    fn from(err: csv::Error) -> Self {
        ScenarioLoaderError::CsvParse(err.to_string())
    }
}

/// A single record from a scenarios CSV file.
///
/// - `label`: free text shown in reports
/// - `basis`: `gross` or `net`
/// - `salary`: monthly amount in VND
/// - `dependents`: number of registered dependents
/// - `region`: zone 1 to 4
/// - `insurance_mode`: `official`, `none` or `custom`
/// - `custom_insurance`: monthly contribution, empty unless the mode is `custom`
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ScenarioRecord {
    pub label: String,
    pub basis: String,
    pub salary: Decimal,
    pub dependents: i32,
    pub region: u8,
    pub insurance_mode: String,
    #[serde(default, deserialize_with = "deserialize_optional_decimal")]
    pub custom_insurance: Option<Decimal>,
}

fn deserialize_optional_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => s
            .trim()
            .parse::<Decimal>()
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

impl ScenarioRecord {
    /// Converts the raw record. `row` is 1-based, for error messages.
    fn into_scenario(
        self,
        row: usize,
    ) -> Result<Scenario, ScenarioLoaderError> {
        let basis = SalaryBasis::parse(&self.basis).ok_or_else(|| {
            ScenarioLoaderError::InvalidBasis {
                value: self.basis.clone(),
                row,
            }
        })?;
        let insurance_mode = InsuranceMode::parse(&self.insurance_mode).ok_or_else(|| {
            ScenarioLoaderError::InvalidInsuranceMode {
                value: self.insurance_mode.clone(),
                row,
            }
        })?;

        Ok(Scenario {
            label: self.label,
            basis,
            salary: self.salary,
            dependents: self.dependents,
            region: self.region,
            insurance_mode,
            custom_insurance: self.custom_insurance,
        })
    }
}

/// Loader for batch comparison scenarios.
///
/// Columns are matched by header name, so their order does not matter.
///
/// ```csv
/// label,basis,salary,dependents,region,insurance_mode,custom_insurance
/// junior,gross,15000000,0,2,official,
/// target take-home,net,30000000,1,1,custom,3000000
/// ```
pub struct ScenarioLoader;

impl ScenarioLoader {
    /// Parse scenarios from a CSV reader, in file order.
    ///
    /// Field values are not checked against the engine's rules here; that
    /// happens per scenario in [`ScenarioLoader::compare_all`].
    pub fn parse<R: Read>(reader: R) -> Result<Vec<Scenario>, ScenarioLoaderError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        csv_reader
            .deserialize::<ScenarioRecord>()
            .enumerate()
            .map(|(idx, result)| {
                let record = result?;
                record.into_scenario(idx + 1)
            })
            .collect()
    }

    /// Run the comparison for every scenario.
    ///
    /// Results are returned in input order, one per scenario, so a rejected
    /// row does not stop the rest of the batch.
    pub fn compare_all(scenarios: &[Scenario]) -> Vec<Result<ComparisonResult, InvalidInput>> {
        scenarios
            .iter()
            .map(|scenario| {
                let result = scenario.compare();
                if let Err(error) = &result {
                    warn!(label = %scenario.label, %error, "scenario rejected");
                }
                result
            })
            .collect()
    }
}
