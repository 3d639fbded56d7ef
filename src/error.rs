use chrono::NaiveDate;
use thiserror::Error;

// Problems with the caller-supplied search options
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OptionsError {
    #[error("Missing origin location")]
    MissingOrigin,

    #[error("Budget bound given without a currency")]
    BudgetWithoutCurrency,

    #[error("Stay duration flexibility given without a stay duration")]
    FlexibilityWithoutStayDuration,

    #[error("Minimum budget {min} exceeds maximum budget {max}")]
    InvertedBudget { min: u32, max: u32 },

    #[error("Earliest departure {earliest} is after latest departure {latest}")]
    InvertedDepartureWindow {
        earliest: NaiveDate,
        latest: NaiveDate,
    },

    #[error("Unknown aggregation mode: {0}")]
    UnknownAggregationMode(String),
}

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Invalid search options: {0}")]
    InvalidOptions(#[from] OptionsError),

    #[error("JSON parse error: {0}")]
    JsonParseError(String),

    #[error("XML serialization error: {0}")]
    SerializationError(String),

    #[error("Sink error: {0}")]
    SinkError(String),
}
