#![allow(dead_code)]

use std::collections::VecDeque;

use openssl::hash::{hash, MessageDigest};
use tcg_common_verifier::{AlgorithmId, Endianness, LogCheckError, Spec};
use tcg_logcheck_verifier::{Event, EventData, EventStream, EventType, StreamItem, TpmDigestEntry};

/// Compute a digest directly through OpenSSL, independent of the crate's
/// own hashing path
pub fn digest(alg: AlgorithmId, data: &[u8]) -> Vec<u8> {
    let md = match alg {
        AlgorithmId::Sha1 => MessageDigest::sha1(),
        AlgorithmId::Sha256 => MessageDigest::sha256(),
        AlgorithmId::Sha384 => MessageDigest::sha384(),
        AlgorithmId::Sha512 => MessageDigest::sha512(),
    };
    hash(md, data).unwrap().to_vec()
}

pub fn zero_digest(alg: AlgorithmId) -> Vec<u8> {
    vec![0u8; alg.digest_size()]
}

/// Build an event with explicit digest entries
pub fn event(
    event_number: u32,
    pcr_index: u32,
    event_type: EventType,
    digests: Vec<(AlgorithmId, Vec<u8>)>,
    data: EventData,
) -> Event {
    Event {
        event_number,
        pcr_index,
        event_type,
        digests: digests
            .into_iter()
            .map(|(alg, value)| TpmDigestEntry::new(alg, value))
            .collect(),
        data,
    }
}

/// Build an event whose sha256 digest is computed over `measured`, the
/// bytes the checker is expected to derive for it
pub fn measured_event(
    event_number: u32,
    pcr_index: u32,
    event_type: EventType,
    data: EventData,
    measured: &[u8],
) -> Event {
    let value = digest(AlgorithmId::Sha256, measured);
    event(event_number, pcr_index, event_type, vec![(AlgorithmId::Sha256, value)], data)
}

/// In-memory event stream standing in for the external decoder
pub struct VecEventStream {
    spec: Spec,
    order: Endianness,
    items: VecDeque<Result<StreamItem, LogCheckError>>,
}

impl VecEventStream {
    pub fn new(spec: Spec, order: Endianness) -> Self {
        Self { spec, order, items: VecDeque::new() }
    }

    /// Stream yielding the given events followed by a clean end
    pub fn from_events(events: Vec<Event>) -> Self {
        let mut stream = Self::new(Spec::Efi2, Endianness::Little);
        for event in events {
            stream.push_event(event);
        }
        stream
    }

    pub fn push_event(&mut self, event: Event) -> &mut Self {
        self.items.push_back(Ok(StreamItem::Record { event, decode_error: None }));
        self
    }

    pub fn push_record(&mut self, event: Event, decode_error: LogCheckError) -> &mut Self {
        self.items.push_back(Ok(StreamItem::Record { event, decode_error: Some(decode_error) }));
        self
    }

    pub fn push_fatal(&mut self, error: LogCheckError) -> &mut Self {
        self.items.push_back(Err(error));
        self
    }
}

impl EventStream for VecEventStream {
    fn spec(&self) -> Spec {
        self.spec
    }

    fn byte_order(&self) -> Endianness {
        self.order
    }

    fn next_event(&mut self) -> Result<StreamItem, LogCheckError> {
        self.items.pop_front().unwrap_or(Ok(StreamItem::End))
    }
}
