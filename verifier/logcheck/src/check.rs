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

//! Log Check Driver
//!
//! Pulls decoded records from the event stream one at a time and runs the
//! placement, structural, and digest checks against each, accumulating
//! anomalies into the report in log order. Only stream corruption aborts
//! the run; a single bad record never does.

use std::fs::File;
use std::io::Cursor;

use tcg_common_verifier::{Endianness, LogCheckError, Spec};

use crate::data_check::check_event_data;
use crate::digest_check::check_event_digests;
use crate::event::model::Event;
use crate::event::stream::{EventStream, OpenEventStream, StreamItem};
use crate::policy::is_expected_event_type_for_index;
use crate::report::{LogCheckReport, ReportEntry};

/// Options controlling log checking
#[derive(Debug, Clone, Copy, Default)]
pub struct LogCheckOptions {
    /// Interpret bootloader command and kernel command-line measurements,
    /// deriving their expected digests from the decoded text
    pub enable_bootloader: bool,
    /// Expect EV_EFI_VARIABLE_BOOT digests over the full encoded variable
    /// record, reproducing a known firmware bug, instead of over the
    /// variable value alone
    pub efi_variable_boot_quirk: bool,
}

/// Run every check against one event, collecting new report entries
///
/// The checks run in a fixed order: placement, carried decode error,
/// structural payload, digest cross-check.
fn check_event(
    event: &Event,
    event_index: usize,
    decode_error: Option<LogCheckError>,
    spec: Spec,
    order: Endianness,
    options: &LogCheckOptions,
) -> Result<Vec<ReportEntry>, LogCheckError> {
    let mut entries = Vec::new();

    if !is_expected_event_type_for_index(event.event_type, event.pcr_index, spec) {
        entries.push(ReportEntry::UnexpectedEventType { event: event_index });
    }

    if let Some(cause) = decode_error {
        entries.push(ReportEntry::InvalidEventData { event: event_index, cause });
    }

    if let Err(cause) = check_event_data(event, order) {
        match cause {
            LogCheckError::InvalidEventData(_) => {
                entries.push(ReportEntry::InvalidEventData { event: event_index, cause });
            }
            other => return Err(other),
        }
    }

    check_event_digests(event, event_index, order, options, &mut entries)?;

    if !entries.is_empty() {
        log::debug!(
            "event {} ({} at PCR {}) produced {} report entries",
            event.event_number,
            event.event_type,
            event.pcr_index,
            entries.len()
        );
    }

    Ok(entries)
}

/// Check a whole log pulled from `stream`
///
/// # Returns
/// * `Ok(LogCheckReport)` - The accumulated report; empty when the log is
///   clean
///
/// # Errors
/// * `LogCheckError::StreamCorruption` - The stream failed mid-log; the
///   partial report is discarded
/// * `LogCheckError::InternalError` - A digest could not be recomputed
pub fn check_log<S: EventStream>(
    mut stream: S,
    options: &LogCheckOptions,
) -> Result<LogCheckReport, LogCheckError> {
    let spec = stream.spec();
    let order = stream.byte_order();
    let mut report = LogCheckReport::new();

    loop {
        match stream.next_event()? {
            StreamItem::End => {
                log::debug!(
                    "checked {} events, {} report entries",
                    report.events().len(),
                    report.len()
                );
                return Ok(report);
            }
            StreamItem::Record { event, decode_error } => {
                let index = report.push_event(event);
                let entries =
                    check_event(&report.events[index], index, decode_error, spec, order, options)?;
                report.entries.extend(entries);
            }
        }
    }
}

/// Check a log held in an in-memory buffer
///
/// Pure adapter: wraps the buffer in a cursor, lets the decoder `S` parse
/// the header, and delegates to `check_log`.
pub fn check_log_from_buffer<S>(
    data: Vec<u8>,
    options: LogCheckOptions,
) -> Result<LogCheckReport, LogCheckError>
where
    S: OpenEventStream<Cursor<Vec<u8>>>,
{
    let stream = S::open(Cursor::new(data), &options)?;
    check_log(stream, &options)
}

/// Check a log read from a seekable file
///
/// Pure adapter: hands the file to the decoder `S` and delegates to
/// `check_log`.
pub fn check_log_from_file<S>(
    file: File,
    options: LogCheckOptions,
) -> Result<LogCheckReport, LogCheckError>
where
    S: OpenEventStream<File>,
{
    let stream = S::open(file, &options)?;
    check_log(stream, &options)
}
