pub mod calendar;
pub mod dialect;
pub mod operator;
pub mod period;
pub mod week;
