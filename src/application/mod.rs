// Model scoring
pub mod ml;

// Next-day forecast orchestration
pub mod forecast;
