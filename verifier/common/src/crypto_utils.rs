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

//! Digest computation helpers
//!
//! Wraps the OpenSSL hash API for the closed algorithm set and provides the
//! per-algorithm all-zero digest used for EV_NO_ACTION events.

use openssl::hash::{DigestBytes, Hasher, MessageDigest};

use crate::error::LogCheckError;
use crate::structure::AlgorithmId;

pub struct DigestCalculator;

impl DigestCalculator {
    /// Map an algorithm id to the OpenSSL message digest
    ///
    /// Total over the closed algorithm set, so callers never see an
    /// "unsupported algorithm" condition here.
    pub fn algorithm_to_message_digest(alg: AlgorithmId) -> MessageDigest {
        match alg {
            AlgorithmId::Sha1 => MessageDigest::sha1(),
            AlgorithmId::Sha256 => MessageDigest::sha256(),
            AlgorithmId::Sha384 => MessageDigest::sha384(),
            AlgorithmId::Sha512 => MessageDigest::sha512(),
        }
    }

    /// Compute the digest of `data` under `alg`
    ///
    /// # Errors
    /// * Returns `LogCheckError::InternalError` if the OpenSSL hasher
    ///   cannot be constructed or driven; this indicates a broken crypto
    ///   backend, not bad input
    pub fn compute_digest(alg: AlgorithmId, data: &[u8]) -> Result<Vec<u8>, LogCheckError> {
        let mut hasher: Hasher = Hasher::new(Self::algorithm_to_message_digest(alg))
            .map_err(|e| LogCheckError::InternalError(format!("Failed to create hasher: {}", e)))?;

        hasher.update(data)
            .map_err(|e| LogCheckError::InternalError(format!("Failed to update hasher: {}", e)))?;

        let digest: DigestBytes = hasher.finish()
            .map_err(|e| LogCheckError::InternalError(format!("Failed to finish hasher: {}", e)))?;

        Ok(digest.to_vec())
    }

    /// All-zero digest of the algorithm's fixed length
    pub fn zero_digest(alg: AlgorithmId) -> Vec<u8> {
        vec![0u8; alg.digest_size()]
    }
}
