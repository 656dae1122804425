//! AWS event stream framing
//!
//! Decoder (and encoder) for `application/vnd.amazon.eventstream` messages:
//!
//! ```text
//! total_len:u32 | headers_len:u32 | prelude_crc:u32 | headers | payload | message_crc:u32
//! ```
//!
//! All integers are big-endian and both checksums are CRC32 (IEEE).

use bytes::{Buf, Bytes, BytesMut};

use crate::utils::error::{AgentError, Result};

const PRELUDE_LEN: usize = 12;
const CRC_LEN: usize = 4;
const MIN_MESSAGE_LEN: usize = PRELUDE_LEN + CRC_LEN;
const MAX_MESSAGE_LEN: usize = 24 * 1024 * 1024;

/// Typed header value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderValue {
    Bool(bool),
    Byte(i8),
    Short(i16),
    Integer(i32),
    Long(i64),
    ByteArray(Vec<u8>),
    String(String),
    Timestamp(i64),
    Uuid([u8; 16]),
}

impl HeaderValue {
    /// String content, if this is a string header
    pub fn as_str(&self) -> Option<&str> {
        match self {
            HeaderValue::String(s) => Some(s),
            _ => None,
        }
    }
}

/// Event stream header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventStreamHeader {
    pub name: String,
    pub value: HeaderValue,
}

/// One decoded message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventStreamMessage {
    pub headers: Vec<EventStreamHeader>,
    pub payload: Bytes,
}

impl EventStreamMessage {
    /// Message with string headers only
    pub fn new(headers: &[(&str, &str)], payload: impl Into<Bytes>) -> Self {
        Self {
            headers: headers
                .iter()
                .map(|(name, value)| EventStreamHeader {
                    name: name.to_string(),
                    value: HeaderValue::String(value.to_string()),
                })
                .collect(),
            payload: payload.into(),
        }
    }

    /// Look up a header by name
    pub fn header(&self, name: &str) -> Option<&HeaderValue> {
        self.headers.iter().find(|h| h.name == name).map(|h| &h.value)
    }

    /// Look up a string header by name
    pub fn header_str(&self, name: &str) -> Option<&str> {
        self.header(name).and_then(HeaderValue::as_str)
    }

    /// Encode the message into its wire form
    pub fn encode(&self) -> Vec<u8> {
        let mut headers = Vec::new();
        for header in &self.headers {
            headers.push(header.name.len() as u8);
            headers.extend_from_slice(header.name.as_bytes());
            encode_header_value(&header.value, &mut headers);
        }

        let total_len = PRELUDE_LEN + headers.len() + self.payload.len() + CRC_LEN;
        let mut out = Vec::with_capacity(total_len);
        out.extend_from_slice(&(total_len as u32).to_be_bytes());
        out.extend_from_slice(&(headers.len() as u32).to_be_bytes());
        let prelude_crc = crc32fast::hash(&out);
        out.extend_from_slice(&prelude_crc.to_be_bytes());
        out.extend_from_slice(&headers);
        out.extend_from_slice(&self.payload);
        let message_crc = crc32fast::hash(&out);
        out.extend_from_slice(&message_crc.to_be_bytes());
        out
    }
}

fn encode_header_value(value: &HeaderValue, out: &mut Vec<u8>) {
    match value {
        HeaderValue::Bool(true) => out.push(0),
        HeaderValue::Bool(false) => out.push(1),
        HeaderValue::Byte(v) => {
            out.push(2);
            out.extend_from_slice(&v.to_be_bytes());
        }
        HeaderValue::Short(v) => {
            out.push(3);
            out.extend_from_slice(&v.to_be_bytes());
        }
        HeaderValue::Integer(v) => {
            out.push(4);
            out.extend_from_slice(&v.to_be_bytes());
        }
        HeaderValue::Long(v) => {
            out.push(5);
            out.extend_from_slice(&v.to_be_bytes());
        }
        HeaderValue::ByteArray(v) => {
            out.push(6);
            out.extend_from_slice(&(v.len() as u16).to_be_bytes());
            out.extend_from_slice(v);
        }
        HeaderValue::String(v) => {
            out.push(7);
            out.extend_from_slice(&(v.len() as u16).to_be_bytes());
            out.extend_from_slice(v.as_bytes());
        }
        HeaderValue::Timestamp(v) => {
            out.push(8);
            out.extend_from_slice(&v.to_be_bytes());
        }
        HeaderValue::Uuid(v) => {
            out.push(9);
            out.extend_from_slice(v);
        }
    }
}

/// Incremental decoder fed with arbitrary byte slices
#[derive(Debug, Default)]
pub struct EventStreamDecoder {
    buffer: BytesMut,
}

impl EventStreamDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append received bytes
    pub fn push(&mut self, data: &[u8]) {
        self.buffer.extend_from_slice(data);
    }

    /// Bytes buffered but not yet forming a complete message
    pub fn pending(&self) -> usize {
        self.buffer.len()
    }

    /// Take the next complete message, if one is buffered
    pub fn next_message(&mut self) -> Result<Option<EventStreamMessage>> {
        if self.buffer.len() < PRELUDE_LEN {
            return Ok(None);
        }

        let total_len = read_u32(&self.buffer[0..4]) as usize;
        let headers_len = read_u32(&self.buffer[4..8]) as usize;
        let prelude_crc = read_u32(&self.buffer[8..12]);

        if crc32fast::hash(&self.buffer[..8]) != prelude_crc {
            return Err(stream_error("prelude checksum mismatch"));
        }
        if !(MIN_MESSAGE_LEN..=MAX_MESSAGE_LEN).contains(&total_len) {
            return Err(stream_error(format!("invalid message length {}", total_len)));
        }
        if PRELUDE_LEN + headers_len + CRC_LEN > total_len {
            return Err(stream_error(format!(
                "headers length {} exceeds message length {}",
                headers_len, total_len
            )));
        }
        if self.buffer.len() < total_len {
            return Ok(None);
        }

        let frame = self.buffer.split_to(total_len).freeze();
        let message_crc = read_u32(&frame[total_len - CRC_LEN..]);
        if crc32fast::hash(&frame[..total_len - CRC_LEN]) != message_crc {
            return Err(stream_error("message checksum mismatch"));
        }

        let headers = decode_headers(frame.slice(PRELUDE_LEN..PRELUDE_LEN + headers_len))?;
        let payload = frame.slice(PRELUDE_LEN + headers_len..total_len - CRC_LEN);

        Ok(Some(EventStreamMessage { headers, payload }))
    }
}

fn read_u32(bytes: &[u8]) -> u32 {
    u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

fn stream_error(message: impl Into<String>) -> AgentError {
    AgentError::Stream(format!("event stream: {}", message.into()))
}

fn decode_headers(mut data: Bytes) -> Result<Vec<EventStreamHeader>> {
    let mut headers = Vec::new();

    while data.has_remaining() {
        let name_len = data.get_u8() as usize;
        ensure(&data, name_len + 1)?;
        let name = String::from_utf8(data.split_to(name_len).to_vec())
            .map_err(|_| stream_error("header name is not UTF-8"))?;

        let value = match data.get_u8() {
            0 => HeaderValue::Bool(true),
            1 => HeaderValue::Bool(false),
            2 => {
                ensure(&data, 1)?;
                HeaderValue::Byte(data.get_i8())
            }
            3 => {
                ensure(&data, 2)?;
                HeaderValue::Short(data.get_i16())
            }
            4 => {
                ensure(&data, 4)?;
                HeaderValue::Integer(data.get_i32())
            }
            5 => {
                ensure(&data, 8)?;
                HeaderValue::Long(data.get_i64())
            }
            6 => {
                ensure(&data, 2)?;
                let len = data.get_u16() as usize;
                ensure(&data, len)?;
                HeaderValue::ByteArray(data.split_to(len).to_vec())
            }
            7 => {
                ensure(&data, 2)?;
                let len = data.get_u16() as usize;
                ensure(&data, len)?;
                let value = String::from_utf8(data.split_to(len).to_vec())
                    .map_err(|_| stream_error("string header is not UTF-8"))?;
                HeaderValue::String(value)
            }
            8 => {
                ensure(&data, 8)?;
                HeaderValue::Timestamp(data.get_i64())
            }
            9 => {
                ensure(&data, 16)?;
                let mut uuid = [0u8; 16];
                data.copy_to_slice(&mut uuid);
                HeaderValue::Uuid(uuid)
            }
            other => return Err(stream_error(format!("unknown header type {}", other))),
        };

        headers.push(EventStreamHeader { name, value });
    }

    Ok(headers)
}

fn ensure(data: &Bytes, needed: usize) -> Result<()> {
    if data.remaining() < needed {
        Err(stream_error("truncated header"))
    } else {
        Ok(())
    }
}
