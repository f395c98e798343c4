pub mod error;
pub mod forecast;
pub mod loader;
pub mod model;

pub use error::{ComputeError, Result};
pub use forecast::{Forecaster, forecast_grid, value_on};
pub use loader::{LoaderConfig, load};
pub use model::PriceModel;
