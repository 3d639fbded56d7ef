// XML encoding of an assembled message for the SOAP transport layer
use crate::error::SearchError;
use crate::message::ExtremeSearch;
use bytes::Bytes;

pub fn to_xml(message: &ExtremeSearch) -> Result<String, SearchError> {
    quick_xml::se::to_string(message).map_err(|e| SearchError::SerializationError(e.to_string()))
}

pub fn to_xml_bytes(message: &ExtremeSearch) -> Result<Bytes, SearchError> {
    to_xml(message).map(Bytes::from)
}
