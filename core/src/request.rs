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

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::mem;

use bytes::Bytes;
use http::HeaderMap;
use http::Method;
use http::Uri;

/// Signing context for request.
///
/// Built fresh for every request and consumed by [`SigningRequest::apply`].
/// Only the headers are moved out of the request; method, uri and body are
/// left untouched.
#[derive(Debug)]
pub struct SigningRequest {
    /// HTTP method.
    pub method: Method,
    /// HTTP path, as it appears on the wire (still percent encoded).
    pub path: String,
    /// HTTP query parameters, percent decoded, in request order.
    pub query: Vec<(String, String)>,
    /// Buffered request body, empty if the request carries none.
    pub body: Bytes,
    /// HTTP headers.
    pub headers: HeaderMap,
}

impl SigningRequest {
    /// Build a signing context from http::request::Parts.
    pub fn build(parts: &mut http::request::Parts, body: Bytes) -> Self {
        Self::build_with(&parts.method, &parts.uri, &mut parts.headers, body)
    }

    /// Build a signing context from the pieces of a request.
    pub fn build_with(method: &Method, uri: &Uri, headers: &mut HeaderMap, body: Bytes) -> Self {
        SigningRequest {
            method: method.clone(),
            path: uri.path().to_string(),
            query: uri.query().map(parse_query).unwrap_or_default(),
            body,

            // Take the headers out of the request to avoid copy.
            // We will return it back when apply the context.
            headers: mem::take(headers),
        }
    }

    /// Apply the signing context back to http::request::Parts.
    pub fn apply(self, parts: &mut http::request::Parts) {
        self.apply_headers(&mut parts.headers)
    }

    /// Return the (possibly signed) headers back to the request.
    pub fn apply_headers(mut self, headers: &mut HeaderMap) {
        mem::swap(headers, &mut self.headers);
    }

    /// Get the path percent decoded.
    ///
    /// The result is raw bytes: a path escaping invalid utf-8 is kept as is.
    pub fn path_percent_decoded(&self) -> Cow<'_, [u8]> {
        percent_encoding::percent_decode_str(&self.path).into()
    }

    /// Group query values by name, names in ascending order.
    ///
    /// ```shell
    /// [(b, 2), (a, 1), (b, 3)] => {a: [1], b: [2, 3]}
    /// ```
    pub fn query_multimap(&self) -> BTreeMap<&str, Vec<&str>> {
        let mut m: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
        for (k, v) in &self.query {
            m.entry(k.as_str()).or_default().push(v.as_str());
        }
        m
    }
}

/// Parse query pairs the way the server does.
///
/// Pairs holding `;` or a malformed percent escape are dropped entirely.
fn parse_query(query: &str) -> Vec<(String, String)> {
    query
        .split('&')
        .filter(|pair| !pair.contains(';') && has_valid_escapes(pair))
        .flat_map(|pair| form_urlencoded::parse(pair.as_bytes()))
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

/// Every `%` must be followed by two hex digits.
fn has_valid_escapes(s: &str) -> bool {
    let bs = s.as_bytes();
    let mut i = 0;
    while i < bs.len() {
        if bs[i] != b'%' {
            i += 1;
            continue;
        }
        match (bs.get(i + 1), bs.get(i + 2)) {
            (Some(a), Some(b)) if a.is_ascii_hexdigit() && b.is_ascii_hexdigit() => i += 3,
            _ => return false,
        }
    }
    true
}
