mod insurance;
mod regime_config;
mod region;
mod results;
mod tax_bracket;
mod tax_input;

pub use insurance::{InsuranceBreakdown, InsuranceMode};
pub use regime_config::{NEW_REGIME, OLD_REGIME, Regime, RegimeConfig};
pub use region::Region;
pub use results::{BracketLine, ComparisonResult, ProgressiveTax, RegimeResult};
pub use tax_bracket::{NEW_BRACKETS, OLD_BRACKETS, TaxBracket};
pub use tax_input::TaxInput;
