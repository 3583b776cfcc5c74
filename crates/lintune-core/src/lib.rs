pub mod cmd;
pub mod dataset;
pub mod params;
pub mod plot;
pub mod session;
pub mod stats;

pub use dataset::{DataPoint, Dataset};
pub use params::{ParamRange, ParameterStore, Parameters, INTERCEPT_RANGE, SLOPE_RANGE};
pub use session::Session;
