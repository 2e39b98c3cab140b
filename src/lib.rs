pub mod adapters;
pub mod config;
pub mod core;
pub mod data;
pub mod domain;
pub mod report;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::farm_file::FarmFile;
pub use core::compute;
pub use data::rainfall::{RainfallLimits, RainfallTable};
pub use domain::model::{CalculationResult, FarmSnapshot};
pub use domain::ports::RainfallSource;
pub use utils::error::{Result, SlurryError};
