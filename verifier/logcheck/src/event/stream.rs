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

//! Event Stream Contract
//!
//! The wire-format decoder lives outside this crate; the checker consumes it
//! through the `EventStream` trait. The decoder parses the log header first
//! (profile version, enabled algorithm set, byte order) and then yields one
//! record per pull. A record may carry a recoverable decode error, in which
//! case its best-effort fields are still checked.

use std::io::{Read, Seek};

use tcg_common_verifier::{Endianness, LogCheckError, Spec};

use crate::check::LogCheckOptions;
use crate::event::model::Event;

/// Result of pulling one record from the stream
#[derive(Debug)]
pub enum StreamItem {
    /// One decoded record; `decode_error` is set when the payload was only
    /// partially or suspiciously decoded but checks can still run
    Record {
        event: Event,
        decode_error: Option<LogCheckError>,
    },
    /// Clean end of the log
    End,
}

/// Pull-based source of decoded log records
///
/// A fatal `Err` (stream corruption) aborts the whole validation; the
/// partial report is discarded by the driver.
pub trait EventStream {
    /// Profile version declared by the log header
    fn spec(&self) -> Spec;

    /// Byte order declared by the log header
    fn byte_order(&self) -> Endianness;

    /// Pull the next record
    ///
    /// # Returns
    /// * `Ok(StreamItem::Record { .. })` - One decoded record
    /// * `Ok(StreamItem::End)` - Clean end of stream
    /// * `Err(LogCheckError::StreamCorruption(_))` - Unrecoverable corruption
    fn next_event(&mut self) -> Result<StreamItem, LogCheckError>;
}

/// Stream construction over random-access input
///
/// Header parsing needs to seek, so the input must support random access.
/// Implemented by the external decoder; the buffer and file entry points
/// are written against this trait.
pub trait OpenEventStream<R: Read + Seek>: EventStream + Sized {
    /// Decode the log header from `reader` and return a positioned stream
    ///
    /// # Errors
    /// * `LogCheckError::StreamCorruption` - The header is unreadable
    fn open(reader: R, options: &LogCheckOptions) -> Result<Self, LogCheckError>;
}
