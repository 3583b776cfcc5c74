pub mod linreg;
pub mod mse;

pub use linreg::LinReg;
pub use mse::{compute_mse, residuals};
