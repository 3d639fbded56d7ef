// Hand-off point between the assembler and whatever transmits the message
use crate::assembler::RequestAssembler;
use crate::error::SearchError;
use crate::message::ExtremeSearch;
use crate::options::SearchOptions;
use crate::wire::to_xml_bytes;
use async_trait::async_trait;
use bytes::Bytes;
use futures::future::try_join_all;
use parking_lot::Mutex;
use tracing::debug;

#[async_trait]
pub trait MessageSink: Send + Sync {
    // Takes ownership of a fully assembled message
    async fn submit(&self, message: ExtremeSearch) -> Result<(), SearchError>;
}

// Encodes every submitted message to XML and keeps the payloads in memory
#[derive(Debug, Default)]
pub struct XmlBufferSink {
    payloads: Mutex<Vec<Bytes>>,
}

impl XmlBufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn payloads(&self) -> Vec<Bytes> {
        self.payloads.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.payloads.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.payloads.lock().is_empty()
    }
}

#[async_trait]
impl MessageSink for XmlBufferSink {
    async fn submit(&self, message: ExtremeSearch) -> Result<(), SearchError> {
        let payload = to_xml_bytes(&message)?;
        debug!(bytes = payload.len(), "buffered extreme search payload");
        self.payloads.lock().push(payload);
        Ok(())
    }
}

pub async fn dispatch<S: MessageSink + ?Sized>(
    assembler: &RequestAssembler,
    options: &SearchOptions,
    sink: &S,
) -> Result<(), SearchError> {
    let message = assembler.assemble(options)?;
    sink.submit(message).await
}

// Every message is assembled before anything is submitted, so an invalid
// entry leaves the sink untouched
pub async fn dispatch_all<S: MessageSink + ?Sized>(
    assembler: &RequestAssembler,
    batch: &[SearchOptions],
    sink: &S,
) -> Result<usize, SearchError> {
    let messages = batch
        .iter()
        .map(|options| assembler.assemble(options))
        .collect::<Result<Vec<_>, _>>()?;

    let count = messages.len();
    try_join_all(messages.into_iter().map(|message| sink.submit(message))).await?;
    Ok(count)
}
