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

//! String to sign for exoscale API V2.

use std::collections::BTreeMap;

use exosign_core::time::{format_timestamp, DateTime};

/// The canonical form of one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalRequest {
    /// Names of the query parameters covered by the signature, ascending.
    pub signed_query_args: Vec<String>,
    /// Bytes fed to the HMAC.
    pub string_to_sign: Vec<u8>,
}

impl CanonicalRequest {
    /// Lossy utf-8 view of the string to sign, for logging.
    pub fn string_to_sign_lossy(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.string_to_sign)
    }
}

/// Construct string to sign
///
/// ## Format
///
/// ```text
/// METHOD + " " + PATH + "\n" +
/// BODY + "\n" +
/// SINGLE_VALUED_QUERY_VALUES + "\n" +
/// SIGNED_HEADERS + "\n" +
/// EXPIRES
/// ```
///
/// - `PATH` carries no query string.
/// - `BODY` is the raw body, empty if there is none.
/// - `SINGLE_VALUED_QUERY_VALUES` concatenates, without separator, the value
///   of every parameter that appears exactly once, sorted by name. Other
///   parameters are not signed at all.
/// - `SIGNED_HEADERS` is reserved and always empty.
/// - `EXPIRES` is the unix timestamp in seconds, without trailing newline.
pub fn canonicalize(
    method: &str,
    path: &[u8],
    body: &[u8],
    query: &BTreeMap<&str, Vec<&str>>,
    expires_at: DateTime,
) -> CanonicalRequest {
    let mut signed_query_args = Vec::new();
    let mut values = Vec::new();
    // BTreeMap iterates names in ascending byte order.
    for (name, vs) in query {
        if let [v] = vs.as_slice() {
            signed_query_args.push(name.to_string());
            values.extend_from_slice(v.as_bytes());
        }
    }

    let expires = format_timestamp(expires_at);

    let mut s = Vec::with_capacity(
        method.len() + path.len() + body.len() + values.len() + expires.len() + 5,
    );
    s.extend_from_slice(method.as_bytes());
    s.push(b' ');
    s.extend_from_slice(path);
    s.push(b'\n');
    s.extend_from_slice(body);
    s.push(b'\n');
    s.extend_from_slice(&values);
    s.push(b'\n');
    // Signed headers: none at the moment.
    s.push(b'\n');
    s.extend_from_slice(expires.as_bytes());

    CanonicalRequest {
        signed_query_args,
        string_to_sign: s,
    }
}
