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

//! Error type shared by the log check verifier crates.
//!
//! Only `StreamCorruption` and `InternalError` abort a whole validation call.
//! `RecordDecode` and `InvalidEventData` are recorded in the report and
//! validation continues with the next check.

use thiserror::Error;

/// Custom error type for event log check operations
#[derive(Debug, Clone, Error)]
pub enum LogCheckError {
    /// Unrecoverable corruption of the event stream; no report is produced
    #[error("Stream corruption: {0}")]
    StreamCorruption(String),

    /// A single record was only partially or suspiciously decoded;
    /// remaining checks still run against its best-effort fields
    #[error("Record decode error: {0}")]
    RecordDecode(String),

    /// A known event payload is structurally malformed
    #[error("Invalid event data: {0}")]
    InvalidEventData(String),

    /// An internal invariant failed, e.g. the crypto backend refused a
    /// digest computation for an algorithm of the closed set
    #[error("Internal error: {0}")]
    InternalError(String),
}
