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

//! Event Model Definitions
//!
//! This module defines the decoded form of a TCG event log record as the
//! checker consumes it: the event type enumeration, the per-algorithm digest
//! entries, and the closed set of payload encodings. The wire-format decoder
//! that produces these values lives outside this crate.

use serde::{Serialize, Serializer};
use std::fmt;
use tcg_common_verifier::AlgorithmId;
use uuid::Uuid;

/// TCG Event Type Enumeration
///
/// Covers the standard PC Client event types and the UEFI-specific event
/// types. Types without a dedicated placement or payload rule are accepted
/// permissively by the checker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum EventType {
    EvPrebootCert = 0x00000000,
    EvPostCode = 0x00000001,
    EvUnused = 0x00000002,
    EvNoAction = 0x00000003,
    EvSeparator = 0x00000004,
    EvAction = 0x00000005,
    EvEventTag = 0x00000006,
    EvSCrtmContents = 0x00000007,
    EvSCrtmVersion = 0x00000008,
    EvCpuMicrocode = 0x00000009,
    EvPlatformConfigFlags = 0x0000000A,
    EvTableOfDevices = 0x0000000B,
    EvCompactHash = 0x0000000C,
    EvIpl = 0x0000000D,
    EvIplPartitionData = 0x0000000E,
    EvNonhostCode = 0x0000000F,
    EvNonhostConfig = 0x00000010,
    EvNonhostInfo = 0x00000011,
    EvOmitBootDeviceEvents = 0x00000012,
    EvPostCode2 = 0x00000013,

    // EFI specific event types
    EvEfiEventBase = 0x80000000,
    EvEfiVariableDriverConfig = 0x80000001,
    EvEfiVariableBoot = 0x80000002,
    EvEfiBootServicesApplication = 0x80000003,
    EvEfiBootServicesDriver = 0x80000004,
    EvEfiRuntimeServicesDriver = 0x80000005,
    EvEfiGptEvent = 0x80000006,
    EvEfiAction = 0x80000007,
    EvEfiPlatformFirmwareBlob = 0x80000008,
    EvEfiHandoffTables = 0x80000009,
    EvEfiPlatformFirmwareBlob2 = 0x8000000A,
    EvEfiHandoffTables2 = 0x8000000B,
    EvEfiVariableBoot2 = 0x8000000C,
    EvEfiGptEvent2 = 0x8000000D,
    EvEfiHcrtmEvent = 0x80000010,

    EvEfiVariableAuthority = 0x800000E0,
    EvEfiSpdmFirmwareBlob = 0x800000E1,
    EvEfiSpdmFirmwareConfig = 0x800000E2,
    Unknown = 0xFFFFFFFF,
}

impl EventType {
    pub fn from_u32(value: u32) -> Option<Self> {
        match value {
            0x00000000 => Some(Self::EvPrebootCert),
            0x00000001 => Some(Self::EvPostCode),
            0x00000002 => Some(Self::EvUnused),
            0x00000003 => Some(Self::EvNoAction),
            0x00000004 => Some(Self::EvSeparator),
            0x00000005 => Some(Self::EvAction),
            0x00000006 => Some(Self::EvEventTag),
            0x00000007 => Some(Self::EvSCrtmContents),
            0x00000008 => Some(Self::EvSCrtmVersion),
            0x00000009 => Some(Self::EvCpuMicrocode),
            0x0000000A => Some(Self::EvPlatformConfigFlags),
            0x0000000B => Some(Self::EvTableOfDevices),
            0x0000000C => Some(Self::EvCompactHash),
            0x0000000D => Some(Self::EvIpl),
            0x0000000E => Some(Self::EvIplPartitionData),
            0x0000000F => Some(Self::EvNonhostCode),
            0x00000010 => Some(Self::EvNonhostConfig),
            0x00000011 => Some(Self::EvNonhostInfo),
            0x00000012 => Some(Self::EvOmitBootDeviceEvents),
            0x00000013 => Some(Self::EvPostCode2),

            0x80000000 => Some(Self::EvEfiEventBase),
            0x80000001 => Some(Self::EvEfiVariableDriverConfig),
            0x80000002 => Some(Self::EvEfiVariableBoot),
            0x80000003 => Some(Self::EvEfiBootServicesApplication),
            0x80000004 => Some(Self::EvEfiBootServicesDriver),
            0x80000005 => Some(Self::EvEfiRuntimeServicesDriver),
            0x80000006 => Some(Self::EvEfiGptEvent),
            0x80000007 => Some(Self::EvEfiAction),
            0x80000008 => Some(Self::EvEfiPlatformFirmwareBlob),
            0x80000009 => Some(Self::EvEfiHandoffTables),
            0x8000000A => Some(Self::EvEfiPlatformFirmwareBlob2),
            0x8000000B => Some(Self::EvEfiHandoffTables2),
            0x8000000C => Some(Self::EvEfiVariableBoot2),
            0x8000000D => Some(Self::EvEfiGptEvent2),
            0x80000010 => Some(Self::EvEfiHcrtmEvent),

            0x800000E0 => Some(Self::EvEfiVariableAuthority),
            0x800000E1 => Some(Self::EvEfiSpdmFirmwareBlob),
            0x800000E2 => Some(Self::EvEfiSpdmFirmwareConfig),
            _ => None,
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EvPrebootCert => write!(f, "EV_PREBOOT_CERT"),
            Self::EvPostCode => write!(f, "EV_POST_CODE"),
            Self::EvUnused => write!(f, "EV_UNUSED"),
            Self::EvNoAction => write!(f, "EV_NO_ACTION"),
            Self::EvSeparator => write!(f, "EV_SEPARATOR"),
            Self::EvAction => write!(f, "EV_ACTION"),
            Self::EvEventTag => write!(f, "EV_EVENT_TAG"),
            Self::EvSCrtmContents => write!(f, "EV_S_CRTM_CONTENTS"),
            Self::EvSCrtmVersion => write!(f, "EV_S_CRTM_VERSION"),
            Self::EvCpuMicrocode => write!(f, "EV_CPU_MICROCODE"),
            Self::EvPlatformConfigFlags => write!(f, "EV_PLATFORM_CONFIG_FLAGS"),
            Self::EvTableOfDevices => write!(f, "EV_TABLE_OF_DEVICES"),
            Self::EvCompactHash => write!(f, "EV_COMPACT_HASH"),
            Self::EvIpl => write!(f, "EV_IPL"),
            Self::EvIplPartitionData => write!(f, "EV_IPL_PARTITION_DATA"),
            Self::EvNonhostCode => write!(f, "EV_NONHOST_CODE"),
            Self::EvNonhostConfig => write!(f, "EV_NONHOST_CONFIG"),
            Self::EvNonhostInfo => write!(f, "EV_NONHOST_INFO"),
            Self::EvOmitBootDeviceEvents => write!(f, "EV_OMIT_BOOT_DEVICE_EVENTS"),
            Self::EvPostCode2 => write!(f, "EV_POST_CODE2"),
            Self::EvEfiEventBase => write!(f, "EV_EFI_EVENT_BASE"),
            Self::EvEfiVariableDriverConfig => write!(f, "EV_EFI_VARIABLE_DRIVER_CONFIG"),
            Self::EvEfiVariableBoot => write!(f, "EV_EFI_VARIABLE_BOOT"),
            Self::EvEfiBootServicesApplication => write!(f, "EV_EFI_BOOT_SERVICES_APPLICATION"),
            Self::EvEfiBootServicesDriver => write!(f, "EV_EFI_BOOT_SERVICES_DRIVER"),
            Self::EvEfiRuntimeServicesDriver => write!(f, "EV_EFI_RUNTIME_SERVICES_DRIVER"),
            Self::EvEfiGptEvent => write!(f, "EV_EFI_GPT_EVENT"),
            Self::EvEfiAction => write!(f, "EV_EFI_ACTION"),
            Self::EvEfiPlatformFirmwareBlob => write!(f, "EV_EFI_PLATFORM_FIRMWARE_BLOB"),
            Self::EvEfiHandoffTables => write!(f, "EV_EFI_HANDOFF_TABLES"),
            Self::EvEfiPlatformFirmwareBlob2 => write!(f, "EV_EFI_PLATFORM_FIRMWARE_BLOB2"),
            Self::EvEfiHandoffTables2 => write!(f, "EV_EFI_HANDOFF_TABLES2"),
            Self::EvEfiVariableBoot2 => write!(f, "EV_EFI_VARIABLE_BOOT2"),
            Self::EvEfiGptEvent2 => write!(f, "EV_EFI_GPT_EVENT2"),
            Self::EvEfiHcrtmEvent => write!(f, "EV_EFI_HCRTM_EVENT"),
            Self::EvEfiVariableAuthority => write!(f, "EV_EFI_VARIABLE_AUTHORITY"),
            Self::EvEfiSpdmFirmwareBlob => write!(f, "EV_EFI_SPDM_FIRMWARE_BLOB"),
            Self::EvEfiSpdmFirmwareConfig => write!(f, "EV_EFI_SPDM_FIRMWARE_CONFIG"),
            Self::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

/// Serialized as the standard EV_* spelling, e.g. EvNoAction -> EV_NO_ACTION
impl Serialize for EventType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// One recorded (algorithm, digest) pair of an event
///
/// The decoder only emits algorithms declared in the log header, and the
/// digest length always equals the algorithm's fixed size; neither is
/// re-checked here.
#[derive(Debug, Clone)]
pub struct TpmDigestEntry {
    pub algorithm_id: AlgorithmId,
    pub digest: Vec<u8>,
}

impl TpmDigestEntry {
    pub fn new(algorithm_id: AlgorithmId, digest: Vec<u8>) -> Self {
        Self { algorithm_id, digest }
    }
}

/// UEFI variable event payload
///
/// A logged snapshot of a named, GUID-scoped firmware variable. `raw` is the
/// full encoded UEFI_VARIABLE_DATA record as it appears in the log; the
/// digest of an EV_EFI_VARIABLE_BOOT event is expected over `variable_data`
/// alone unless the boot quirk is enabled.
#[derive(Debug, Clone)]
pub struct EfiVariableData {
    pub variable_guid: Uuid,
    pub unicode_name: String,
    pub variable_data: Vec<u8>,
    pub raw: Vec<u8>,
}

/// Bootloader command payload, decoded from a measured IPL event
#[derive(Debug, Clone)]
pub struct GrubCmdData {
    pub cmd: String,
    pub raw: Vec<u8>,
}

/// Kernel command line payload, decoded from a measured IPL event
#[derive(Debug, Clone)]
pub struct KernelCmdlineData {
    pub cmdline: String,
    pub raw: Vec<u8>,
}

/// Command line measured by the systemd EFI stub (UTF-16 in the raw form)
#[derive(Debug, Clone)]
pub struct SystemdStubCmdlineData {
    pub cmdline: String,
    pub raw: Vec<u8>,
}

/// Decoded event payload
///
/// Closed set of payload encodings the external decoder produces. Every
/// variant exposes its full raw encoded byte form through `raw_bytes`;
/// the measured-bytes resolver and the data validator match exhaustively
/// on this enum, so adding a kind touches exactly those two places.
#[derive(Debug, Clone)]
pub enum EventData {
    /// Payload with no decoded structure
    Opaque(Vec<u8>),
    /// Printable ASCII payload (EV_ACTION, EV_EFI_ACTION and similar)
    AsciiString(String),
    /// UEFI variable record
    EfiVariable(EfiVariableData),
    /// Full encoded UEFI_GPT_DATA record
    EfiGpt(Vec<u8>),
    /// Bootloader command text
    GrubCmd(GrubCmdData),
    /// Kernel command line text
    KernelCmdline(KernelCmdlineData),
    /// systemd EFI stub command line text
    SystemdStubCmdline(SystemdStubCmdlineData),
}

impl EventData {
    /// Full raw encoded byte form of the payload as recorded in the log
    pub fn raw_bytes(&self) -> &[u8] {
        match self {
            EventData::Opaque(bytes) => bytes,
            EventData::AsciiString(value) => value.as_bytes(),
            EventData::EfiVariable(data) => &data.raw,
            EventData::EfiGpt(bytes) => bytes,
            EventData::GrubCmd(data) => &data.raw,
            EventData::KernelCmdline(data) => &data.raw,
            EventData::SystemdStubCmdline(data) => &data.raw,
        }
    }
}

/// One decoded log record
///
/// `digests` preserves the algorithm declaration order of the log header.
#[derive(Debug, Clone)]
pub struct Event {
    pub event_number: u32,
    pub pcr_index: u32,
    pub event_type: EventType,
    pub digests: Vec<TpmDigestEntry>,
    pub data: EventData,
}

impl Event {
    /// Recorded digest for an algorithm, if the log carries one
    pub fn digest_for(&self, alg: AlgorithmId) -> Option<&[u8]> {
        self.digests
            .iter()
            .find(|entry| entry.algorithm_id == alg)
            .map(|entry| entry.digest.as_slice())
    }
}
