// Request assembly for the PriceXplorer_ExtremeSearch fare-range search

pub mod assembler;
pub mod codes;
pub mod config;
pub mod elements;
pub mod error;
pub mod message;
pub mod options;
pub mod sink;
pub mod wire;

// Re-export key types for convenience
pub use assembler::{assemble, resolve_aggregation, RequestAssembler};
pub use codes::{
    AttributeFunction, AttributeType, LocationQualifier, LocationType, QuantityQualifier,
    SelectionOption,
};
pub use config::{AssemblerConfig, ValidationMode};
pub use error::{OptionsError, SearchError};
pub use message::{AttributeInfo, ExtremeSearch, ItineraryGrp, SelectionDetailsGroup};
pub use options::{AggregationMode, SearchOptions};
pub use sink::{dispatch, dispatch_all, MessageSink, XmlBufferSink};
pub use wire::{to_xml, to_xml_bytes};
