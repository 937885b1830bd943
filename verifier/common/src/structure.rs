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

//! Shared TCG structures: digest algorithm identifiers, the PC Client
//! profile version ordering, and the byte order declared by a log header.

use byteorder::{BigEndian, ByteOrder, LittleEndian};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::LogCheckError;

/// TPM digest algorithm identifier (TPM_ALG_ID values)
///
/// The set is closed: a log header may only declare algorithms from this
/// enumeration, and the decoder rejects anything else before it reaches
/// the checker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u16)]
pub enum AlgorithmId {
    Sha1 = 0x0004,
    Sha256 = 0x000B,
    Sha384 = 0x000C,
    Sha512 = 0x000D,
}

impl AlgorithmId {
    pub fn from_u16(value: u16) -> Option<Self> {
        match value {
            0x0004 => Some(AlgorithmId::Sha1),
            0x000B => Some(AlgorithmId::Sha256),
            0x000C => Some(AlgorithmId::Sha384),
            0x000D => Some(AlgorithmId::Sha512),
            _ => None,
        }
    }

    /// Fixed digest length in bytes
    pub const fn digest_size(&self) -> usize {
        match self {
            AlgorithmId::Sha1 => 20,
            AlgorithmId::Sha256 => 32,
            AlgorithmId::Sha384 => 48,
            AlgorithmId::Sha512 => 64,
        }
    }
}

impl fmt::Display for AlgorithmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlgorithmId::Sha1 => write!(f, "sha1"),
            AlgorithmId::Sha256 => write!(f, "sha256"),
            AlgorithmId::Sha384 => write!(f, "sha384"),
            AlgorithmId::Sha512 => write!(f, "sha512"),
        }
    }
}

impl FromStr for AlgorithmId {
    type Err = LogCheckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sha1" => Ok(AlgorithmId::Sha1),
            "sha256" => Ok(AlgorithmId::Sha256),
            "sha384" => Ok(AlgorithmId::Sha384),
            "sha512" => Ok(AlgorithmId::Sha512),
            _ => Err(LogCheckError::InvalidEventData(format!("Unsupported algorithm: {}", s))),
        }
    }
}

/// TCG PC Client profile version a log header declares
///
/// The enumeration is ordered: rules that apply only to the older
/// PC Client profile test `spec <= Spec::PcClient`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Spec {
    Unknown,
    PcClient,
    Efi12,
    Efi2,
}

impl fmt::Display for Spec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Spec::Unknown => write!(f, "unknown"),
            Spec::PcClient => write!(f, "PC Client"),
            Spec::Efi12 => write!(f, "EFI 1.2"),
            Spec::Efi2 => write!(f, "EFI 2.0"),
        }
    }
}

/// Byte order declared by the log header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endianness {
    Little,
    Big,
}

impl Endianness {
    pub fn encode_u32(&self, value: u32) -> [u8; 4] {
        let mut buf = [0u8; 4];
        match self {
            Endianness::Little => LittleEndian::write_u32(&mut buf, value),
            Endianness::Big => BigEndian::write_u32(&mut buf, value),
        }
        buf
    }

    pub fn decode_u32(&self, buf: [u8; 4]) -> u32 {
        match self {
            Endianness::Little => LittleEndian::read_u32(&buf),
            Endianness::Big => BigEndian::read_u32(&buf),
        }
    }
}
