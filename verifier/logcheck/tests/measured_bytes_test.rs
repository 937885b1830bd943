mod utils;

use tcg_common_verifier::{AlgorithmId, Endianness};
use tcg_logcheck_verifier::{
    determine_measured_bytes, EfiVariableData, EventData, EventType, GrubCmdData,
    KernelCmdlineData, LogCheckOptions, SystemdStubCmdlineData,
};
use utils::{digest, event};
use uuid::Uuid;

fn options() -> LogCheckOptions {
    LogCheckOptions::default()
}

fn boot_variable() -> EfiVariableData {
    // A raw UEFI_VARIABLE_DATA record is GUID + name length + data length +
    // name + value; only the value matters to the resolver, so the framing
    // here is representative rather than decoded
    let value = vec![0x01, 0x00, 0x02, 0x00];
    let mut raw = Vec::new();
    raw.extend_from_slice(&[0x61, 0xDF, 0xE4, 0x8B, 0xCA, 0x93, 0xD2, 0x11]);
    raw.extend_from_slice(&[0xAA, 0x0D, 0x00, 0xE0, 0x98, 0x03, 0x2B, 0x8C]);
    raw.extend_from_slice(b"BootOrder\0");
    raw.extend_from_slice(&value);
    EfiVariableData {
        variable_guid: Uuid::parse_str("8be4df61-93ca-11d2-aa0d-00e098032b8c").unwrap(),
        unicode_name: "BootOrder".to_string(),
        variable_data: value,
        raw,
    }
}

/// Test Objective: Verify opaque payload kinds resolve to their raw bytes
/// Expected Result: The payload itself is the measured byte sequence
#[test]
fn test_opaque_kinds_resolve_to_payload() {
    let payload = vec![0xDE, 0xAD, 0xBE, 0xEF];
    for event_type in [
        EventType::EvEventTag,
        EventType::EvSCrtmVersion,
        EventType::EvPlatformConfigFlags,
        EventType::EvTableOfDevices,
        EventType::EvNonhostInfo,
        EventType::EvOmitBootDeviceEvents,
    ] {
        let opaque = event(
            0,
            1,
            event_type,
            vec![(AlgorithmId::Sha256, digest(AlgorithmId::Sha256, &payload))],
            EventData::Opaque(payload.clone()),
        );
        let measured = determine_measured_bytes(&opaque, Endianness::Little, &options()).unwrap();
        assert_eq!(measured.as_deref(), Some(payload.as_slice()), "type {}", event_type);
    }
}

/// Test Objective: Verify opaque kinds without a resolution rule resolve to none
/// Expected Result: No expectation for EV_POST_CODE or EV_NO_ACTION payloads
#[test]
fn test_unresolved_kinds_have_no_expectation() {
    for event_type in [EventType::EvPostCode, EventType::EvNoAction, EventType::Unknown] {
        let opaque = event(
            0,
            0,
            event_type,
            vec![(AlgorithmId::Sha256, vec![0u8; 32])],
            EventData::Opaque(vec![1, 2, 3]),
        );
        let measured = determine_measured_bytes(&opaque, Endianness::Little, &options()).unwrap();
        assert!(measured.is_none(), "type {}", event_type);
    }
}

/// Test Objective: Verify normal separators measure their payload
/// Expected Result: The 4-byte payload is the measured sequence
#[test]
fn test_separator_normal_resolves_to_payload() {
    let payload = [0u8; 4];
    let separator = event(
        0,
        0,
        EventType::EvSeparator,
        vec![(AlgorithmId::Sha256, digest(AlgorithmId::Sha256, &payload))],
        EventData::Opaque(payload.to_vec()),
    );
    let measured = determine_measured_bytes(&separator, Endianness::Little, &options()).unwrap();
    assert_eq!(measured.as_deref(), Some(payload.as_slice()));
}

/// Test Objective: Verify error separators measure the encoded error value
/// Expected Result: The canonical encoding of 1 in the declared byte order,
/// regardless of payload contents
#[test]
fn test_separator_error_resolves_to_error_value() {
    for order in [Endianness::Little, Endianness::Big] {
        let error_value = order.encode_u32(1);
        let separator = event(
            0,
            0,
            EventType::EvSeparator,
            vec![(AlgorithmId::Sha256, digest(AlgorithmId::Sha256, &error_value))],
            EventData::Opaque(b"CMOS checksum invalid".to_vec()),
        );
        let measured = determine_measured_bytes(&separator, order, &options()).unwrap();
        assert_eq!(measured.as_deref(), Some(error_value.as_slice()));
    }
}

/// Test Objective: Verify action strings resolve to their bytes
/// Expected Result: EV_ACTION and EV_EFI_ACTION measure the string
#[test]
fn test_action_strings_resolve_to_bytes() {
    for event_type in [EventType::EvAction, EventType::EvEfiAction] {
        let action = event(
            0,
            4,
            event_type,
            vec![(AlgorithmId::Sha256, vec![0u8; 32])],
            EventData::AsciiString("Calling EFI Application from Boot Option".to_string()),
        );
        let measured = determine_measured_bytes(&action, Endianness::Little, &options()).unwrap();
        assert_eq!(
            measured.as_deref(),
            Some(b"Calling EFI Application from Boot Option".as_slice())
        );
    }
}

/// Test Objective: Verify the EV_EFI_VARIABLE_BOOT quirk switch
/// Expected Result: Quirk off measures the variable value alone; quirk on
/// measures the full encoded record
#[test]
fn test_efi_variable_boot_quirk() {
    let data = boot_variable();
    let boot = event(
        0,
        1,
        EventType::EvEfiVariableBoot,
        vec![(AlgorithmId::Sha256, vec![0u8; 32])],
        EventData::EfiVariable(data.clone()),
    );

    let strict = determine_measured_bytes(&boot, Endianness::Little, &options()).unwrap();
    assert_eq!(strict.as_deref(), Some(data.variable_data.as_slice()));

    let quirk_options = LogCheckOptions { efi_variable_boot_quirk: true, ..options() };
    let quirk = determine_measured_bytes(&boot, Endianness::Little, &quirk_options).unwrap();
    assert_eq!(quirk.as_deref(), Some(data.raw.as_slice()));
    assert_ne!(strict, quirk);
}

/// Test Objective: Verify non-boot variable events measure the full record
/// Expected Result: The full encoded record irrespective of the quirk option
#[test]
fn test_other_efi_variable_events_measure_full_record() {
    let data = boot_variable();
    for event_type in
        [EventType::EvEfiVariableDriverConfig, EventType::EvEfiVariableAuthority, EventType::EvEfiVariableBoot2]
    {
        let variable = event(
            0,
            7,
            event_type,
            vec![(AlgorithmId::Sha256, vec![0u8; 32])],
            EventData::EfiVariable(data.clone()),
        );
        let measured = determine_measured_bytes(&variable, Endianness::Little, &options()).unwrap();
        assert_eq!(measured.as_deref(), Some(data.raw.as_slice()), "type {}", event_type);
    }
}

/// Test Objective: Verify GPT events measure the full encoded record
/// Expected Result: The raw UEFI_GPT_DATA bytes
#[test]
fn test_gpt_event_measures_full_record() {
    let raw = b"EFI PART\x00\x00\x01\x00".to_vec();
    let gpt = event(
        0,
        5,
        EventType::EvEfiGptEvent,
        vec![(AlgorithmId::Sha256, vec![0u8; 32])],
        EventData::EfiGpt(raw.clone()),
    );
    let measured = determine_measured_bytes(&gpt, Endianness::Little, &options()).unwrap();
    assert_eq!(measured.as_deref(), Some(raw.as_slice()));
}

/// Test Objective: Verify bootloader text resolution is gated by the option
/// Expected Result: Command and kernel command-line text resolve only when
/// bootloader interpretation is enabled
#[test]
fn test_bootloader_text_gated_by_option() {
    let grub = event(
        0,
        8,
        EventType::EvIpl,
        vec![(AlgorithmId::Sha256, vec![0u8; 32])],
        EventData::GrubCmd(GrubCmdData {
            cmd: "set root=hd0,gpt2".to_string(),
            raw: b"grub_cmd set root=hd0,gpt2\0".to_vec(),
        }),
    );
    let kernel = event(
        1,
        8,
        EventType::EvIpl,
        vec![(AlgorithmId::Sha256, vec![0u8; 32])],
        EventData::KernelCmdline(KernelCmdlineData {
            cmdline: "ro quiet splash".to_string(),
            raw: b"kernel_cmdline ro quiet splash\0".to_vec(),
        }),
    );

    for measured in [
        determine_measured_bytes(&grub, Endianness::Little, &options()).unwrap(),
        determine_measured_bytes(&kernel, Endianness::Little, &options()).unwrap(),
    ] {
        assert!(measured.is_none());
    }

    let bootloader_options = LogCheckOptions { enable_bootloader: true, ..options() };
    let grub_measured =
        determine_measured_bytes(&grub, Endianness::Little, &bootloader_options).unwrap();
    assert_eq!(grub_measured.as_deref(), Some(b"set root=hd0,gpt2".as_slice()));

    let kernel_measured =
        determine_measured_bytes(&kernel, Endianness::Little, &bootloader_options).unwrap();
    assert_eq!(kernel_measured.as_deref(), Some(b"ro quiet splash".as_slice()));
}

/// Test Objective: Verify the systemd stub command line carries no expectation
/// Expected Result: No measured bytes even with bootloader interpretation on
#[test]
fn test_systemd_stub_cmdline_has_no_expectation() {
    let stub = event(
        0,
        8,
        EventType::EvIpl,
        vec![(AlgorithmId::Sha256, vec![0u8; 32])],
        EventData::SystemdStubCmdline(SystemdStubCmdlineData {
            cmdline: "ro quiet".to_string(),
            raw: b"r\0o\0 \0q\0u\0i\0e\0t\0".to_vec(),
        }),
    );
    let bootloader_options = LogCheckOptions { enable_bootloader: true, ..options() };
    let measured = determine_measured_bytes(&stub, Endianness::Little, &bootloader_options).unwrap();
    assert!(measured.is_none());
}
