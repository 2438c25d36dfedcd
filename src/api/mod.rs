pub mod alphavantage;
pub mod source;
