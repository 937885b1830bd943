/*
 * Copyright (c) Huawei Technologies Co., Ltd. 2025. All rights reserved.
 * Global Trust Authority is licensed under the Mulan PSL v2.
 * You can use this software according to the terms and conditions of the Mulan PSL v2.
 * You may obtain a copy of Mulan PSL v2 at:
 *     http://license.coscl.org.cn/MulanPSL2
 * THIS SOFTWARE IS PROVIDED ON AN "AS IS" BASIS, WITHOUT WARRANTIES OF ANY KIND, EITHER EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO NON-INFRINGEMENT, MERCHANTABILITY OR FIT FOR A PARTICULAR
 * PURPOSE.
 * See the Mulan PSL v2 for more details.
 */

//! Log Check Report
//!
//! Anomalies accumulate in log order with no deduplication and no severity
//! ranking; interpretation is the caller's responsibility. The report owns
//! the validated events and entries reference them by index, so an entry
//! can never outlive its event.

use serde_json::{json, Value};
use tcg_common_verifier::{AlgorithmId, LogCheckError};

use crate::event::model::Event;

/// One anomaly found in the log
#[derive(Debug)]
pub enum ReportEntry {
    /// The event type is not permitted at its PCR index
    UnexpectedEventType { event: usize },
    /// The payload is malformed, or the record carried a decode error
    InvalidEventData { event: usize, cause: LogCheckError },
    /// A recorded digest differs from the recomputed expectation
    UnexpectedDigestValue {
        event: usize,
        algorithm: AlgorithmId,
        expected: Vec<u8>,
    },
}

impl ReportEntry {
    /// Index of the offending event in the report's event list
    pub fn event_index(&self) -> usize {
        match self {
            ReportEntry::UnexpectedEventType { event }
            | ReportEntry::InvalidEventData { event, .. }
            | ReportEntry::UnexpectedDigestValue { event, .. } => *event,
        }
    }
}

/// Ordered validation report over one log
#[derive(Debug, Default)]
pub struct LogCheckReport {
    pub(crate) events: Vec<Event>,
    pub entries: Vec<ReportEntry>,
}

impl LogCheckReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// The validated events, in log order
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// The event a report entry refers to
    pub fn event(&self, entry: &ReportEntry) -> &Event {
        &self.events[entry.event_index()]
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn push_event(&mut self, event: Event) -> usize {
        self.events.push(event);
        self.events.len() - 1
    }

    /// Human-readable description of a report entry
    pub fn describe(&self, entry: &ReportEntry) -> String {
        let event = self.event(entry);
        match entry {
            ReportEntry::UnexpectedEventType { .. } => format!(
                "Unexpected {} event type measured to PCR index {}",
                event.event_type, event.pcr_index
            ),
            ReportEntry::InvalidEventData { cause, .. } => {
                format!("Invalid event data for event type {} ({})", event.event_type, cause)
            }
            ReportEntry::UnexpectedDigestValue { algorithm, expected, .. } => {
                let recorded = event.digest_for(*algorithm).unwrap_or(&[]);
                format!(
                    "Unexpected digest value for event type {} and algorithm {} (got {}, expected {})",
                    event.event_type,
                    algorithm,
                    hex::encode(recorded),
                    hex::encode(expected)
                )
            }
        }
    }

    /// Convert the report to a JSON value
    ///
    /// One object per entry: the entry kind, its description, and the
    /// identifying fields of the offending event.
    ///
    /// # Errors
    /// * `LogCheckError::InternalError` - An entry could not be serialized
    pub fn to_json_value(&self) -> Result<Value, LogCheckError> {
        let entries = self
            .entries
            .iter()
            .map(|entry| {
                let event = self.event(entry);
                let mut obj = serde_json::Map::new();

                let kind = match entry {
                    ReportEntry::UnexpectedEventType { .. } => "unexpected_event_type",
                    ReportEntry::InvalidEventData { .. } => "invalid_event_data",
                    ReportEntry::UnexpectedDigestValue { .. } => "unexpected_digest_value",
                };
                obj.insert("kind".to_string(), json!(kind));
                obj.insert("description".to_string(), json!(self.describe(entry)));
                obj.insert("event_number".to_string(), json!(event.event_number));
                obj.insert("pcr_index".to_string(), json!(event.pcr_index));

                let event_type = serde_json::to_value(event.event_type).map_err(|e| {
                    LogCheckError::InternalError(format!("Failed to serialize event type: {}", e))
                })?;
                obj.insert("event_type".to_string(), event_type);

                if let ReportEntry::UnexpectedDigestValue { algorithm, expected, .. } = entry {
                    obj.insert("algorithm".to_string(), json!(algorithm.to_string()));
                    obj.insert("expected".to_string(), json!(hex::encode(expected)));
                }

                Ok(Value::Object(obj))
            })
            .collect::<Result<Vec<Value>, LogCheckError>>()?;

        Ok(Value::Array(entries))
    }
}
