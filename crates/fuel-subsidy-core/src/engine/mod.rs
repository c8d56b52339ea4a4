pub mod allocation;
pub mod calculator;
pub mod comparison;
pub mod consumption;
pub mod validation;

#[cfg(feature = "sweep")]
pub mod sweep;

#[cfg(feature = "breakeven")]
pub mod breakeven;
