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

//! Event Placement Policy
//!
//! PCR usage rules of the TCG PC Client platform profiles:
//! - PC Client Implementation Specification 1.21, sections 3.3.2.2 and 8.2.3
//! - PC Client Platform Firmware Profile for TPM 2.0, sections 2.3.2,
//!   2.3.4 and 7.2
//!
//! Indices 0-7 are firmware reserved and carry strict per-type rules;
//! indices above 7 are OS territory and accept any event type. Types the
//! profiles leave unconstrained are accepted permissively.

use tcg_common_verifier::Spec;

use crate::event::model::EventType;

/// Whether `event_type` may be measured to `pcr_index` under `spec`
pub fn is_expected_event_type_for_index(event_type: EventType, pcr_index: u32, spec: Spec) -> bool {
    if pcr_index > 7 {
        return true;
    }

    match event_type {
        EventType::EvPostCode
        | EventType::EvSCrtmContents
        | EventType::EvSCrtmVersion
        | EventType::EvNonhostCode
        | EventType::EvNonhostInfo
        | EventType::EvEfiHcrtmEvent => pcr_index == 0,
        EventType::EvNoAction => pcr_index == 0 || pcr_index == 6,
        EventType::EvAction | EventType::EvEfiAction => (1..=6).contains(&pcr_index),
        EventType::EvEventTag => pcr_index <= 4 && spec <= Spec::PcClient,
        EventType::EvCpuMicrocode
        | EventType::EvPlatformConfigFlags
        | EventType::EvTableOfDevices
        | EventType::EvNonhostConfig
        | EventType::EvEfiVariableBoot
        | EventType::EvEfiHandoffTables => pcr_index == 1,
        EventType::EvCompactHash => pcr_index >= 4,
        EventType::EvIpl => pcr_index == 4 && spec <= Spec::PcClient,
        EventType::EvIplPartitionData => pcr_index == 5 && spec <= Spec::PcClient,
        EventType::EvOmitBootDeviceEvents => pcr_index == 4,
        EventType::EvEfiVariableDriverConfig => matches!(pcr_index, 1 | 3 | 5 | 7),
        EventType::EvEfiBootServicesApplication => matches!(pcr_index, 2 | 4),
        EventType::EvEfiBootServicesDriver | EventType::EvEfiRuntimeServicesDriver => {
            matches!(pcr_index, 0 | 2)
        }
        EventType::EvEfiGptEvent => pcr_index == 5,
        EventType::EvEfiPlatformFirmwareBlob => matches!(pcr_index, 0 | 2 | 4),
        EventType::EvEfiVariableAuthority => pcr_index == 7,
        _ => true,
    }
}
