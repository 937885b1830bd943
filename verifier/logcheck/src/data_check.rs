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

//! Structural Event Data Validation
//!
//! Well-formedness checks for the small set of event types whose payload
//! encoding is fixed by the PC Client profiles. All other types are
//! unconstrained and always pass.

use tcg_common_verifier::{Endianness, LogCheckError};

use crate::event::model::{Event, EventType};
use crate::measured::{is_separator_error, SEPARATOR_NORMAL_VALUES};

/// Required payload of an EV_OMIT_BOOT_DEVICE_EVENTS event
pub const OMIT_BOOT_DEVICE_EVENTS_DATA: &str = "BOOT ATTEMPTS OMITTED";

/// Required payload of an EV_EFI_HCRTM_EVENT event
pub const HCRTM_EVENT_DATA: &str = "HCRTM";

/// Check the structural well-formedness of an event's payload
///
/// # Errors
/// * `LogCheckError::InvalidEventData` - The payload violates the fixed
///   encoding of its event type
/// * `LogCheckError::InternalError` - Separator error detection could not
///   recompute a digest
pub fn check_event_data(event: &Event, order: Endianness) -> Result<(), LogCheckError> {
    match event.event_type {
        EventType::EvSeparator => {
            // An acknowledged error separator measures the error value; its
            // payload is firmware defined and not checked further
            if is_separator_error(event, order)? {
                return Ok(());
            }
            let bytes = event.data.raw_bytes();
            if bytes.len() != 4 {
                return Err(LogCheckError::InvalidEventData(format!(
                    "unexpected event data size of {}",
                    bytes.len()
                )));
            }
            let value = order.decode_u32([bytes[0], bytes[1], bytes[2], bytes[3]]);
            if SEPARATOR_NORMAL_VALUES.contains(&value) {
                return Ok(());
            }
            Err(LogCheckError::InvalidEventData("unexpected event data contents".to_string()))
        }
        EventType::EvCompactHash => {
            let size = event.data.raw_bytes().len();
            if size == 4 {
                return Ok(());
            }
            Err(LogCheckError::InvalidEventData(format!("unexpected event data size of {}", size)))
        }
        EventType::EvOmitBootDeviceEvents => {
            if event.data.raw_bytes() == OMIT_BOOT_DEVICE_EVENTS_DATA.as_bytes() {
                return Ok(());
            }
            Err(LogCheckError::InvalidEventData(format!(
                "unexpected event data contents - expected \"{}\"",
                OMIT_BOOT_DEVICE_EVENTS_DATA
            )))
        }
        EventType::EvEfiHcrtmEvent => {
            if event.data.raw_bytes() == HCRTM_EVENT_DATA.as_bytes() {
                return Ok(());
            }
            Err(LogCheckError::InvalidEventData(format!(
                "unexpected event data contents - expected \"{}\"",
                HCRTM_EVENT_DATA
            )))
        }
        _ => Ok(()),
    }
}
