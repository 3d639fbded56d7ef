// Caller-facing search options for an extreme (fare range) search
use crate::error::{OptionsError, SearchError};
use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// How the remote service should roll up result rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AggregationMode {
    #[serde(rename = "dest")]
    Destination,
    #[serde(rename = "country")]
    Country,
    #[serde(rename = "destweek")]
    DestinationWeek,
    #[serde(rename = "destweekdepart")]
    DestinationWeekDepartureDay,
    #[serde(rename = "destweekdepartstay")]
    DestinationWeekDepartureDayStay,
}

impl AggregationMode {
    pub const ALL: [AggregationMode; 5] = [
        AggregationMode::Destination,
        AggregationMode::Country,
        AggregationMode::DestinationWeek,
        AggregationMode::DestinationWeekDepartureDay,
        AggregationMode::DestinationWeekDepartureDayStay,
    ];

    pub fn selector(self) -> &'static str {
        match self {
            AggregationMode::Destination => "dest",
            AggregationMode::Country => "country",
            AggregationMode::DestinationWeek => "destweek",
            AggregationMode::DestinationWeekDepartureDay => "destweekdepart",
            AggregationMode::DestinationWeekDepartureDayStay => "destweekdepartstay",
        }
    }
}

impl fmt::Display for AggregationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.selector())
    }
}

impl FromStr for AggregationMode {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AggregationMode::ALL
            .into_iter()
            .find(|mode| mode.selector() == s)
            .ok_or_else(|| OptionsError::UnknownAggregationMode(s.to_string()))
    }
}

/// Parameters of a PriceXplorer extreme search.
///
/// Every field is optional. Absent fields simply leave their part of the
/// request out; see [`crate::assembler::assemble`] for the inclusion rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    pub origin: Option<String>,
    pub destinations: Vec<String>,
    pub destination_countries: Vec<String>,
    pub earliest_departure_date: Option<NaiveDate>,
    pub latest_departure_date: Option<NaiveDate>,
    // Whole units of `currency`
    pub min_budget: Option<u32>,
    pub max_budget: Option<u32>,
    pub currency: Option<String>,
    pub stay_duration_days: Option<u32>,
    pub stay_duration_flexibility_days: Option<u32>,
    pub departure_days_inbound: Vec<Weekday>,
    pub departure_days_outbound: Vec<Weekday>,
    pub return_cheapest_non_stop: bool,
    pub return_cheapest_overall: bool,
    pub result_aggregation_option: Option<AggregationMode>,
    pub search_office: Option<String>,
}

impl SearchOptions {
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            origin: Some(origin.into()),
            ..Default::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self, SearchError> {
        serde_json::from_str(json).map_err(|e| SearchError::JsonParseError(e.to_string()))
    }

    pub fn has_budget_bound(&self) -> bool {
        self.min_budget.is_some() || self.max_budget.is_some()
    }

    pub fn has_departure_window(&self) -> bool {
        self.earliest_departure_date.is_some() || self.latest_departure_date.is_some()
    }

    pub fn wants_cheapest(&self) -> bool {
        self.return_cheapest_non_stop || self.return_cheapest_overall
    }

    // Checks used by strict assembly; the first violation found is returned
    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.origin.as_deref().map_or(true, str::is_empty) {
            return Err(OptionsError::MissingOrigin);
        }

        if self.has_budget_bound() && self.currency.is_none() {
            return Err(OptionsError::BudgetWithoutCurrency);
        }

        if let (Some(min), Some(max)) = (self.min_budget, self.max_budget) {
            if min > max {
                return Err(OptionsError::InvertedBudget { min, max });
            }
        }

        if self.stay_duration_flexibility_days.is_some() && self.stay_duration_days.is_none() {
            return Err(OptionsError::FlexibilityWithoutStayDuration);
        }

        if let (Some(earliest), Some(latest)) =
            (self.earliest_departure_date, self.latest_departure_date)
        {
            if earliest > latest {
                return Err(OptionsError::InvertedDepartureWindow { earliest, latest });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_options_from_json() {
        let json = r#"{
            "origin": "BRU",
            "destinations": ["MAD", "LIS"],
            "earliest_departure_date": "2017-08-17",
            "max_budget": 650,
            "currency": "EUR",
            "departure_days_outbound": ["Mon", "Fri"],
            "return_cheapest_overall": true,
            "result_aggregation_option": "destweek"
        }"#;

        let options = SearchOptions::from_json(json).unwrap();
        assert_eq!(options.origin.as_deref(), Some("BRU"));
        assert_eq!(options.destinations, vec!["MAD", "LIS"]);
        assert_eq!(
            options.earliest_departure_date,
            NaiveDate::from_ymd_opt(2017, 8, 17)
        );
        assert_eq!(options.latest_departure_date, None);
        assert_eq!(options.max_budget, Some(650));
        assert_eq!(options.departure_days_outbound, vec![Weekday::Mon, Weekday::Fri]);
        assert!(options.return_cheapest_overall);
        assert!(!options.return_cheapest_non_stop);
        assert_eq!(
            options.result_aggregation_option,
            Some(AggregationMode::DestinationWeek)
        );
    }

    #[test]
    fn test_unknown_aggregation_rejected_in_json() {
        let result = SearchOptions::from_json(r#"{"result_aggregation_option": "weekly"}"#);
        assert!(matches!(result, Err(SearchError::JsonParseError(_))));
    }

    #[test]
    fn test_aggregation_selector_round_trip() {
        for mode in AggregationMode::ALL {
            assert_eq!(mode.to_string().parse::<AggregationMode>(), Ok(mode));
        }
    }

    #[test]
    fn test_unknown_aggregation_selector() {
        assert_eq!(
            "bycity".parse::<AggregationMode>(),
            Err(OptionsError::UnknownAggregationMode("bycity".to_string()))
        );
    }

    #[test_case(SearchOptions::default(), Err(OptionsError::MissingOrigin); "#1 no origin")]
    #[test_case(SearchOptions { min_budget: Some(100), ..SearchOptions::new("LON") },
        Err(OptionsError::BudgetWithoutCurrency); "#2 budget without currency")]
    #[test_case(SearchOptions { min_budget: Some(500), max_budget: Some(100), currency: Some("EUR".to_string()), ..SearchOptions::new("LON") },
        Err(OptionsError::InvertedBudget { min: 500, max: 100 }); "#3 inverted budget")]
    #[test_case(SearchOptions { stay_duration_flexibility_days: Some(3), ..SearchOptions::new("LON") },
        Err(OptionsError::FlexibilityWithoutStayDuration); "#4 flexibility alone")]
    #[test_case(SearchOptions { earliest_departure_date: NaiveDate::from_ymd_opt(2025, 7, 2), latest_departure_date: NaiveDate::from_ymd_opt(2025, 7, 1), ..SearchOptions::new("LON") },
        Err(OptionsError::InvertedDepartureWindow { earliest: NaiveDate::from_ymd_opt(2025, 7, 2).unwrap(), latest: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap() }); "#5 inverted window")]
    #[test_case(SearchOptions { min_budget: Some(100), max_budget: Some(500), currency: Some("EUR".to_string()), stay_duration_days: Some(7), stay_duration_flexibility_days: Some(2), ..SearchOptions::new("LON") },
        Ok(()); "#6 consistent options")]
    fn test_validate(options: SearchOptions, expected: Result<(), OptionsError>) {
        assert_eq!(options.validate(), expected);
    }
}
