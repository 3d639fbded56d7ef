// Builds a PriceXplorer_ExtremeSearch message from search options
//
// Each part of the message has its own builder below. A builder reads only the
// option fields it depends on and returns its part, or nothing when those
// fields are absent.
use crate::codes::{AttributeFunction, AttributeType, QuantityQualifier, SelectionOption};
use crate::config::{AssemblerConfig, ValidationMode};
use crate::elements::{
    Budget, DepartureDays, NumberOfUnitDetails, OfficeIdInfo, SelectionDetails, StayDuration,
    TravelDates,
};
use crate::error::SearchError;
use crate::message::{
    AttributeInfo, ExtremeSearch, ItineraryGrp, NbOfUnitsInfo, SelectionDetailsGroup,
    SelectionDetailsInfo,
};
use crate::options::{AggregationMode, SearchOptions};
use tracing::{debug, trace, warn};

/// Assembles the request message for `options`.
///
/// Never fails. Incomplete inputs (a budget bound without a currency, a
/// flexibility window without a stay duration) are left out of the message.
/// Use [`RequestAssembler`] in strict mode to reject them instead.
pub fn assemble(options: &SearchOptions) -> ExtremeSearch {
    let message = ExtremeSearch {
        itinerary_grp: itinerary_groups(options),
        budget: budget(options),
        travel_dates: travel_dates(options),
        stay_duration: stay_duration(options),
        attribute_info: attribute_info(options),
        selection_details_group: selection_details_group(options),
        departure_days: departure_days(options),
        airline_info: Vec::new(),
        office_id_info: office_id_info(options),
    };

    trace!(
        itinerary_groups = message.itinerary_grp.len(),
        budget = message.budget.is_some(),
        travel_dates = message.travel_dates.is_some(),
        stay_duration = message.stay_duration.is_some(),
        attribute_info = message.attribute_info.len(),
        selection_details = message.selection_details_group.len(),
        departure_days = message.departure_days.len(),
        office_ids = message.office_id_info.len(),
        "assembled extreme search request"
    );

    message
}

// Dimensions the results are grouped by, in display order
pub fn resolve_aggregation(mode: AggregationMode) -> Vec<AttributeType> {
    match mode {
        AggregationMode::Destination => vec![AttributeType::Destination],
        AggregationMode::Country => vec![AttributeType::Country],
        AggregationMode::DestinationWeek => {
            vec![AttributeType::Destination, AttributeType::Week]
        }
        AggregationMode::DestinationWeekDepartureDay => vec![
            AttributeType::Destination,
            AttributeType::Week,
            AttributeType::DepartureDay,
        ],
        AggregationMode::DestinationWeekDepartureDayStay => vec![
            AttributeType::Destination,
            AttributeType::Week,
            AttributeType::DepartureDay,
            AttributeType::StayDuration,
        ],
    }
}

// Origin first, then destinations, then destination countries
pub fn itinerary_groups(options: &SearchOptions) -> Vec<ItineraryGrp> {
    let mut groups = Vec::with_capacity(
        1 + options.destinations.len() + options.destination_countries.len(),
    );

    groups.push(ItineraryGrp::origin(options.origin.as_deref()));
    groups.extend(
        options
            .destinations
            .iter()
            .map(|destination| ItineraryGrp::destination(destination)),
    );
    groups.extend(
        options
            .destination_countries
            .iter()
            .map(|country| ItineraryGrp::destination_country(country)),
    );

    groups
}

pub fn budget(options: &SearchOptions) -> Option<Budget> {
    match options.currency.as_deref() {
        Some(currency) => Budget::new(options.max_budget, options.min_budget, currency),
        None => {
            if options.has_budget_bound() {
                debug!(
                    min = ?options.min_budget,
                    max = ?options.max_budget,
                    "budget bound without currency dropped"
                );
            }
            None
        }
    }
}

pub fn travel_dates(options: &SearchOptions) -> Option<TravelDates> {
    TravelDates::new(
        options.earliest_departure_date,
        options.latest_departure_date,
    )
}

pub fn stay_duration(options: &SearchOptions) -> Option<StayDuration> {
    match options.stay_duration_days {
        Some(days) => Some(StayDuration::new(
            days,
            options.stay_duration_flexibility_days,
        )),
        None => {
            if let Some(flex) = options.stay_duration_flexibility_days {
                debug!(flexibility_days = flex, "stay flexibility without duration dropped");
            }
            None
        }
    }
}

pub fn attribute_info(options: &SearchOptions) -> Vec<AttributeInfo> {
    options
        .result_aggregation_option
        .map(|mode| {
            AttributeInfo::new(AttributeFunction::Grouping, resolve_aggregation(mode))
        })
        .into_iter()
        .collect()
}

// One price distribution option carrying the requested cheapest flavours,
// non-stop before overall
pub fn selection_details_group(options: &SearchOptions) -> Vec<SelectionDetailsGroup> {
    if !options.wants_cheapest() {
        return Vec::new();
    }

    let quantity_details = [
        (options.return_cheapest_non_stop, QuantityQualifier::CheapestNonStop),
        (options.return_cheapest_overall, QuantityQualifier::CheapestOverall),
    ]
    .into_iter()
    .filter(|(requested, _)| *requested)
    .map(|(_, qualifier)| NumberOfUnitDetails::new(None, qualifier))
    .collect();

    vec![SelectionDetailsGroup {
        selection_details_info: SelectionDetailsInfo {
            selection_details: vec![SelectionDetails::new(
                SelectionOption::PriceResultDistribution,
            )],
        },
        nb_of_units_info: NbOfUnitsInfo { quantity_details },
    }]
}

// Inbound constraint first, then outbound
pub fn departure_days(options: &SearchOptions) -> Vec<DepartureDays> {
    [
        (
            &options.departure_days_inbound,
            SelectionOption::InboundDepartureDays,
        ),
        (
            &options.departure_days_outbound,
            SelectionOption::OutboundDepartureDays,
        ),
    ]
    .into_iter()
    .filter(|(days, _)| !days.is_empty())
    .map(|(days, option)| DepartureDays::new(days, option))
    .collect()
}

pub fn office_id_info(options: &SearchOptions) -> Vec<OfficeIdInfo> {
    options
        .search_office
        .as_deref()
        .map(OfficeIdInfo::new)
        .into_iter()
        .collect()
}

// Assembler with a configurable stance on inconsistent options
#[derive(Debug, Clone, Default)]
pub struct RequestAssembler {
    config: AssemblerConfig,
}

impl RequestAssembler {
    pub fn new(config: AssemblerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AssemblerConfig {
        &self.config
    }

    pub fn assemble(&self, options: &SearchOptions) -> Result<ExtremeSearch, SearchError> {
        if self.config.validation == ValidationMode::Strict {
            if let Err(e) = options.validate() {
                warn!(error = %e, "rejected extreme search options");
                return Err(SearchError::InvalidOptions(e));
            }
        }

        Ok(assemble(options))
    }
}
