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

//! Measured Bytes Resolution
//!
//! Derives, per event type and payload encoding, the canonical byte sequence
//! whose hash the recorded digest is claimed to be. Event types whose digest
//! cannot be derived from the logged payload resolve to `None` and are
//! skipped by the digest cross-check.

use tcg_common_verifier::{DigestCalculator, Endianness, LogCheckError};

use crate::check::LogCheckOptions;
use crate::event::model::{Event, EventData, EventType};

/// Separator value firmware measures to acknowledge a detected error
/// condition before the pre-OS to OS-present transition
pub const SEPARATOR_ERROR_VALUE: u32 = 1;

/// Separator values of a normal boot-phase transition
pub const SEPARATOR_NORMAL_VALUES: [u32; 2] = [0, u32::MAX];

/// Whether a separator event acknowledges a firmware-detected error
///
/// An error separator carries hash(1) instead of the hash of its payload,
/// with the 32-bit value encoded in the log's declared byte order. The
/// check uses the first digest in header declaration order; real logs
/// extend the same value into every bank, so one consistent pick suffices.
///
/// Only the driver routes events here, and only for EV_SEPARATOR.
///
/// # Errors
/// * `LogCheckError::InternalError` - Digest computation failed
pub(crate) fn is_separator_error(event: &Event, order: Endianness) -> Result<bool, LogCheckError> {
    debug_assert_eq!(event.event_type, EventType::EvSeparator);

    let entry = match event.digests.first() {
        Some(entry) => entry,
        None => return Ok(false),
    };

    let error_value = order.encode_u32(SEPARATOR_ERROR_VALUE);
    let expected = DigestCalculator::compute_digest(entry.algorithm_id, &error_value)?;
    Ok(expected == entry.digest)
}

/// Resolve the canonical bytes the event's digests should hash over
///
/// # Returns
/// * `Ok(Some(bytes))` - The digests are expected to equal hash(bytes)
/// * `Ok(None)` - No independent expectation exists for this event
///
/// # Errors
/// * `LogCheckError::InternalError` - Separator error detection could not
///   recompute a digest
pub fn determine_measured_bytes(
    event: &Event,
    order: Endianness,
    options: &LogCheckOptions,
) -> Result<Option<Vec<u8>>, LogCheckError> {
    let out: Option<Vec<u8>> = match &event.data {
        EventData::Opaque(bytes) => match event.event_type {
            EventType::EvEventTag
            | EventType::EvSCrtmVersion
            | EventType::EvPlatformConfigFlags
            | EventType::EvTableOfDevices
            | EventType::EvNonhostInfo
            | EventType::EvOmitBootDeviceEvents => Some(bytes.clone()),
            EventType::EvSeparator if !is_separator_error(event, order)? => Some(bytes.clone()),
            _ => None,
        },
        EventData::AsciiString(value) => match event.event_type {
            EventType::EvAction | EventType::EvEfiAction => Some(value.as_bytes().to_vec()),
            _ => None,
        },
        EventData::EfiVariable(data) => {
            // A known firmware bug hashes the whole UEFI_VARIABLE_DATA
            // record of a boot variable instead of just the variable value;
            // the quirk option reproduces that behavior.
            if event.event_type == EventType::EvEfiVariableBoot && !options.efi_variable_boot_quirk {
                Some(data.variable_data.clone())
            } else {
                Some(data.raw.clone())
            }
        }
        EventData::EfiGpt(bytes) => Some(bytes.clone()),
        EventData::GrubCmd(data) if options.enable_bootloader => Some(data.cmd.as_bytes().to_vec()),
        EventData::KernelCmdline(data) if options.enable_bootloader => {
            Some(data.cmdline.as_bytes().to_vec())
        }
        _ => None,
    };

    if out.is_some() {
        return Ok(out);
    }

    // An error separator measures the encoded error value, not its payload
    if event.event_type == EventType::EvSeparator {
        return Ok(Some(order.encode_u32(SEPARATOR_ERROR_VALUE).to_vec()));
    }

    Ok(None)
}
