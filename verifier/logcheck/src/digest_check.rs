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

//! Digest Cross-Check
//!
//! Recomputes the expected digest for every (algorithm, digest) pair an
//! event records and compares it against the recorded value. EV_NO_ACTION
//! events are expected to carry the all-zero digest of each algorithm;
//! other events are checked against the resolved measured bytes, or skipped
//! when no independent expectation exists.

use tcg_common_verifier::{DigestCalculator, Endianness, LogCheckError};

use crate::check::LogCheckOptions;
use crate::event::model::{Event, EventType};
use crate::measured::determine_measured_bytes;
use crate::report::ReportEntry;

/// Cross-check all recorded digests of one event
///
/// Appends one `UnexpectedDigestValue` entry per mismatching algorithm to
/// `entries`; `event_index` is the event's position in the report's event
/// list.
///
/// # Errors
/// * `LogCheckError::InternalError` - A digest could not be recomputed
pub fn check_event_digests(
    event: &Event,
    event_index: usize,
    order: Endianness,
    options: &LogCheckOptions,
    entries: &mut Vec<ReportEntry>,
) -> Result<(), LogCheckError> {
    let measured_bytes = determine_measured_bytes(event, order, options)?;

    for entry in &event.digests {
        let expected: Option<Vec<u8>> = if event.event_type == EventType::EvNoAction {
            Some(DigestCalculator::zero_digest(entry.algorithm_id))
        } else if let Some(bytes) = measured_bytes.as_deref() {
            Some(DigestCalculator::compute_digest(entry.algorithm_id, bytes)?)
        } else {
            None
        };

        if let Some(expected) = expected {
            if expected != entry.digest {
                entries.push(ReportEntry::UnexpectedDigestValue {
                    event: event_index,
                    algorithm: entry.algorithm_id,
                    expected,
                });
            }
        }
    }

    Ok(())
}
