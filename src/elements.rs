// Leaf elements of the PriceXplorer_ExtremeSearch message
use crate::codes::{
    AttributeType, LocationQualifier, LocationType, QuantityQualifier, SelectionOption,
};
use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;

#[derive(Debug, PartialEq, Eq, Default, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationDescription {
    pub code: String,
    pub qualifier: LocationQualifier,
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationInfo {
    pub location_type: LocationType,
    pub location_description: LocationDescription,
}

impl LocationInfo {
    pub fn destination_country(country_code: &str) -> Self {
        Self {
            location_type: LocationType::Country,
            location_description: LocationDescription {
                code: country_code.to_string(),
                qualifier: LocationQualifier::Destination,
            },
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct DateDetails {
    pub year: String,
    pub month: String,
    pub day: String,
}

impl From<NaiveDate> for DateDetails {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: format!("{:04}", date.year()),
            month: format!("{:02}", date.month()),
            day: format!("{:02}", date.day()),
        }
    }
}

// Departure date range, open-ended on either side
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelDates {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub earliest_date: Option<DateDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_date: Option<DateDetails>,
}

impl TravelDates {
    pub fn new(earliest: Option<NaiveDate>, latest: Option<NaiveDate>) -> Option<Self> {
        if earliest.is_none() && latest.is_none() {
            return None;
        }

        Some(Self {
            earliest_date: earliest.map(DateDetails::from),
            latest_date: latest.map(DateDetails::from),
        })
    }
}

// The currency is mandatory: a bound without one is not representable
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_amount: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_amount: Option<u32>,
    pub currency: String,
}

impl Budget {
    pub fn new(max: Option<u32>, min: Option<u32>, currency: &str) -> Option<Self> {
        if max.is_none() && min.is_none() {
            return None;
        }

        Some(Self {
            max_amount: max,
            min_amount: min,
            currency: currency.to_string(),
        })
    }
}

/// A count paired with what it counts.
///
/// The count is left out for the cheapest-result qualifiers, where the
/// remote service decides how many rows to return.
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberOfUnitDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_units: Option<u32>,
    pub unit_qualifier: QuantityQualifier,
}

impl NumberOfUnitDetails {
    pub fn new(number_of_units: Option<u32>, unit_qualifier: QuantityQualifier) -> Self {
        Self {
            number_of_units,
            unit_qualifier,
        }
    }

    pub fn days(days: u32) -> Self {
        Self::new(Some(days), QuantityQualifier::Days)
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlexibilityInfo {
    pub quantity_details: NumberOfUnitDetails,
}

// Flexibility only exists inside a stay duration
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StayDuration {
    pub nb_of_units_info: NumberOfUnitDetails,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flexibility_info: Option<FlexibilityInfo>,
}

impl StayDuration {
    pub fn new(days: u32, flexibility_days: Option<u32>) -> Self {
        Self {
            nb_of_units_info: NumberOfUnitDetails::days(days),
            flexibility_info: flexibility_days.map(|flex| FlexibilityInfo {
                quantity_details: NumberOfUnitDetails::days(flex),
            }),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionDetails {
    pub option: SelectionOption,
}

impl SelectionDetails {
    pub fn new(option: SelectionOption) -> Self {
        Self { option }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DaysInfo {
    // ISO weekday digits, Monday = 1
    pub days_of_week: String,
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartureDays {
    pub days: DaysInfo,
    pub option_info: SelectionDetails,
}

impl DepartureDays {
    pub fn new(days: &[Weekday], option: SelectionOption) -> Self {
        Self {
            days: DaysInfo {
                days_of_week: days
                    .iter()
                    .map(|day| day.number_from_monday().to_string())
                    .collect(),
            },
            option_info: SelectionDetails::new(option),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OfficeIdentification {
    pub office_code: String,
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OfficeIdInfo {
    pub office_id_information: OfficeIdentification,
}

impl OfficeIdInfo {
    pub fn new(office_id: &str) -> Self {
        Self {
            office_id_information: OfficeIdentification {
                office_code: office_id.to_string(),
            },
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeDetails {
    pub attribute_type: AttributeType,
}

// Reserved by the protocol; the assembler never fills it
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AirlineInfo {
    pub airline_code: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_details_are_zero_padded() {
        let date = NaiveDate::from_ymd_opt(2017, 1, 5).unwrap();
        let details = DateDetails::from(date);
        assert_eq!(details.year, "2017");
        assert_eq!(details.month, "01");
        assert_eq!(details.day, "05");
    }

    #[test]
    fn test_travel_dates_open_ended() {
        let latest = NaiveDate::from_ymd_opt(2025, 9, 30);
        let dates = TravelDates::new(None, latest).unwrap();
        assert_eq!(dates.earliest_date, None);
        assert_eq!(dates.latest_date.unwrap().month, "09");

        assert_eq!(TravelDates::new(None, None), None);
    }

    #[test]
    fn test_budget_needs_a_bound() {
        assert_eq!(Budget::new(None, None, "EUR"), None);

        let budget = Budget::new(Some(500), None, "EUR").unwrap();
        assert_eq!(budget.max_amount, Some(500));
        assert_eq!(budget.min_amount, None);
        assert_eq!(budget.currency, "EUR");
    }

    #[test]
    fn test_stay_duration_flexibility_nesting() {
        let stay = StayDuration::new(7, None);
        assert_eq!(stay.nb_of_units_info.number_of_units, Some(7));
        assert_eq!(stay.nb_of_units_info.unit_qualifier, QuantityQualifier::Days);
        assert!(stay.flexibility_info.is_none());

        let stay = StayDuration::new(7, Some(2));
        let flex = stay.flexibility_info.unwrap();
        assert_eq!(flex.quantity_details, NumberOfUnitDetails::days(2));
    }

    #[test]
    fn test_departure_days_encoding_keeps_caller_order() {
        let days = DepartureDays::new(
            &[Weekday::Fri, Weekday::Mon, Weekday::Sun],
            SelectionOption::OutboundDepartureDays,
        );
        assert_eq!(days.days.days_of_week, "517");
        assert_eq!(days.option_info.option, SelectionOption::OutboundDepartureDays);
    }

    #[test]
    fn test_destination_country_location() {
        let location = LocationInfo::destination_country("FR");
        assert_eq!(location.location_type, LocationType::Country);
        assert_eq!(location.location_description.code, "FR");
        assert_eq!(
            location.location_description.qualifier,
            LocationQualifier::Destination
        );
    }
}
