// Composite groups and the top-level PriceXplorer_ExtremeSearch message
use crate::codes::{AttributeFunction, AttributeType};
use crate::elements::{
    AirlineInfo, AttributeDetails, Budget, DepartureDays, ItineraryInfo, LocationInfo,
    NumberOfUnitDetails, OfficeIdInfo, SelectionDetails, StayDuration, TravelDates,
};
use serde::Serialize;

#[derive(Debug, PartialEq, Eq, Default, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryGrp {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub itinerary_info: Option<ItineraryInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_info: Option<LocationInfo>,
}

impl ItineraryGrp {
    // The origin group is always sent, with an empty location when unknown
    pub fn origin(origin: Option<&str>) -> Self {
        Self {
            itinerary_info: Some(ItineraryInfo {
                origin: origin.map(str::to_string),
                destination: None,
            }),
            location_info: None,
        }
    }

    pub fn destination(destination: &str) -> Self {
        Self {
            itinerary_info: Some(ItineraryInfo {
                origin: None,
                destination: Some(destination.to_string()),
            }),
            location_info: None,
        }
    }

    pub fn destination_country(country_code: &str) -> Self {
        Self {
            itinerary_info: None,
            location_info: Some(LocationInfo::destination_country(country_code)),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Default, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionDetailsInfo {
    pub selection_details: Vec<SelectionDetails>,
}

#[derive(Debug, PartialEq, Eq, Default, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NbOfUnitsInfo {
    pub quantity_details: Vec<NumberOfUnitDetails>,
}

#[derive(Debug, PartialEq, Eq, Default, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionDetailsGroup {
    pub selection_details_info: SelectionDetailsInfo,
    pub nb_of_units_info: NbOfUnitsInfo,
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeInfo {
    pub attribute_function: AttributeFunction,
    pub attribute_details: Vec<AttributeDetails>,
}

impl AttributeInfo {
    pub fn new(function: AttributeFunction, types: Vec<AttributeType>) -> Self {
        Self {
            attribute_function: function,
            attribute_details: types
                .into_iter()
                .map(|attribute_type| AttributeDetails { attribute_type })
                .collect(),
        }
    }

    pub fn attribute_types(&self) -> Vec<AttributeType> {
        self.attribute_details
            .iter()
            .map(|d| d.attribute_type)
            .collect()
    }
}

/// The assembled `PriceXplorer_ExtremeSearch` request.
///
/// Field order is the element order the remote schema expects.
#[derive(Debug, PartialEq, Eq, Default, Clone, Serialize)]
#[serde(rename = "PriceXplorer_ExtremeSearch", rename_all = "camelCase")]
pub struct ExtremeSearch {
    pub itinerary_grp: Vec<ItineraryGrp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<Budget>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub travel_dates: Option<TravelDates>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stay_duration: Option<StayDuration>,
    pub attribute_info: Vec<AttributeInfo>,
    pub selection_details_group: Vec<SelectionDetailsGroup>,
    pub departure_days: Vec<DepartureDays>,
    pub airline_info: Vec<AirlineInfo>,
    pub office_id_info: Vec<OfficeIdInfo>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::{LocationQualifier, LocationType};

    #[test]
    fn test_origin_group_without_location() {
        let grp = ItineraryGrp::origin(None);
        assert_eq!(grp.itinerary_info, Some(ItineraryInfo::default()));
        assert!(grp.location_info.is_none());
    }

    #[test]
    fn test_destination_country_group() {
        let grp = ItineraryGrp::destination_country("ES");
        assert!(grp.itinerary_info.is_none());

        let location = grp.location_info.unwrap();
        assert_eq!(location.location_type, LocationType::Country);
        assert_eq!(location.location_description.code, "ES");
        assert_eq!(
            location.location_description.qualifier,
            LocationQualifier::Destination
        );
    }

    #[test]
    fn test_attribute_info_keeps_dimension_order() {
        let info = AttributeInfo::new(
            AttributeFunction::Grouping,
            vec![AttributeType::Week, AttributeType::Destination],
        );
        assert_eq!(
            info.attribute_types(),
            vec![AttributeType::Week, AttributeType::Destination]
        );
    }

    #[test]
    fn test_message_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ExtremeSearch>();
    }
}
