pub mod loader;
pub mod scenario;

pub use loader::{ScenarioLoader, ScenarioLoaderError, ScenarioRecord};
pub use scenario::{NET_RESOLUTION_REGIME, SalaryBasis, Scenario};
