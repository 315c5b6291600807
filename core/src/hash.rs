// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Hash related utils.

use crate::sha256::digest;
use crate::Error;

/// SHA-256 of `content`, as raw bytes.
pub fn sha256(content: &[u8]) -> [u8; 32] {
    digest(content)
}

/// Hex encoded SHA-256 hash.
///
/// Always exactly 64 lowercase hex characters.
pub fn hex_sha256(content: &[u8]) -> String {
    hex::encode(sha256(content))
}

/// Hex encoded SHA-256 of a one-byte-per-character string.
///
/// The gateway wire contract hashes credential strings one character per
/// byte: a character up to U+00FF contributes its code point as a single
/// byte, and anything above that range fails with
/// [`ErrorKind::InvalidByte`][crate::ErrorKind::InvalidByte]. The caller
/// decides whether to re-encode or abort; a signature is never silently
/// dropped or truncated.
pub fn hex_sha256_text(content: &str) -> crate::Result<String> {
    let mut bytes = Vec::with_capacity(content.len());
    for c in content.chars() {
        let code = c as u32;
        if code > 0xFF {
            return Err(Error::invalid_byte(format!(
                "character {c:?} (U+{code:04X}) does not fit in one byte"
            )));
        }
        bytes.push(code as u8);
    }

    Ok(hex_sha256(&bytes))
}
