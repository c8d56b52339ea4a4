pub mod calculate;
pub mod sweep;
pub mod tariff;
