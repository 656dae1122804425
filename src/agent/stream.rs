//! Completion stream
//!
//! Turns the raw response byte stream into ordered [`CompletionEvent`]s.

use bytes::Bytes;
use futures::{Stream, StreamExt};
use serde_json::Value;
use std::pin::Pin;
use std::task::{Context, Poll};
use tracing::warn;

use super::errors::AgentErrorMapper;
use super::event_stream::{EventStreamDecoder, EventStreamMessage};
use super::types::{CompletionEvent, PayloadPart};
use crate::utils::error::{AgentError, Result};

type ByteStream = Pin<Box<dyn Stream<Item = Result<Bytes>> + Send>>;

/// Stream of completion events from an InvokeAgent response
///
/// Ends after the first error.
pub struct CompletionStream {
    inner: ByteStream,
    decoder: EventStreamDecoder,
    mapper: AgentErrorMapper,
    done: bool,
}

impl CompletionStream {
    /// Wrap a response body stream
    pub fn new(stream: impl Stream<Item = reqwest::Result<Bytes>> + Send + 'static) -> Self {
        Self::from_bytes_stream(stream.map(|chunk| chunk.map_err(AgentError::from)))
    }

    /// Wrap any byte stream
    pub fn from_bytes_stream(stream: impl Stream<Item = Result<Bytes>> + Send + 'static) -> Self {
        Self {
            inner: Box::pin(stream),
            decoder: EventStreamDecoder::new(),
            mapper: AgentErrorMapper,
            done: false,
        }
    }

    fn convert(&self, message: EventStreamMessage) -> Result<CompletionEvent> {
        match message.header_str(":message-type").unwrap_or("event") {
            "event" => {
                let event_type = message.header_str(":event-type").unwrap_or_default();
                match event_type {
                    "chunk" => {
                        let part: PayloadPart = serde_json::from_slice(&message.payload)?;
                        Ok(CompletionEvent::Chunk(part))
                    }
                    "trace" => Ok(CompletionEvent::Trace(payload_value(&message.payload))),
                    "returnControl" => {
                        Ok(CompletionEvent::ReturnControl(payload_value(&message.payload)))
                    }
                    other => Ok(CompletionEvent::Other {
                        event_type: other.to_string(),
                        payload: payload_value(&message.payload),
                    }),
                }
            }
            "exception" => {
                let exception_type = message
                    .header_str(":exception-type")
                    .unwrap_or("unknownException");
                Err(self
                    .mapper
                    .map_stream_exception(exception_type, &message.payload))
            }
            "error" => {
                let code = message.header_str(":error-code").unwrap_or("UnknownError");
                let text = message.header_str(":error-message").unwrap_or_default();
                Err(AgentError::Stream(format!("{}: {}", code, text)))
            }
            other => Err(AgentError::Stream(format!(
                "unexpected message type '{}'",
                other
            ))),
        }
    }
}

fn payload_value(payload: &[u8]) -> Value {
    serde_json::from_slice(payload)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(payload).into_owned()))
}

impl Stream for CompletionStream {
    type Item = Result<CompletionEvent>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        if self.done {
            return Poll::Ready(None);
        }

        loop {
            match self.decoder.next_message() {
                Ok(Some(message)) => {
                    let event = self.convert(message);
                    if event.is_err() {
                        self.done = true;
                    }
                    return Poll::Ready(Some(event));
                }
                Ok(None) => {}
                Err(e) => {
                    self.done = true;
                    return Poll::Ready(Some(Err(e)));
                }
            }

            match self.inner.as_mut().poll_next(cx) {
                Poll::Ready(Some(Ok(bytes))) => self.decoder.push(&bytes),
                Poll::Ready(Some(Err(e))) => {
                    self.done = true;
                    return Poll::Ready(Some(Err(e)));
                }
                Poll::Ready(None) => {
                    self.done = true;
                    if self.decoder.pending() > 0 {
                        warn!(
                            pending_bytes = self.decoder.pending(),
                            "Completion stream ended inside a frame, discarding partial data"
                        );
                    }
                    return Poll::Ready(None);
                }
                Poll::Pending => return Poll::Pending,
            }
        }
    }
}
