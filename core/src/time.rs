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

//! Time related utils.

use std::time::Duration;

use chrono::{TimeDelta, TimeZone, Utc};

use crate::{Error, Result};

/// DateTime is the alias for `chrono::DateTime<Utc>`.
pub type DateTime = chrono::DateTime<Utc>;

/// Create a datetime of now.
pub fn now() -> DateTime {
    Utc::now()
}

/// Add a std duration to the given time.
///
/// Returns a config error if the duration can't be represented.
pub fn add_duration(time: DateTime, d: Duration) -> Result<DateTime> {
    let delta = TimeDelta::from_std(d).map_err(|e| {
        Error::config_invalid(format!("duration {d:?} is out of range")).with_source(e)
    })?;

    time.checked_add_signed(delta)
        .ok_or_else(|| Error::config_invalid(format!("duration {d:?} overflows the clock")))
}

/// Format time into unix timestamp in whole seconds: "1700000000"
pub fn format_timestamp(t: DateTime) -> String {
    t.timestamp().to_string()
}

/// Build a datetime from unix timestamp in whole seconds.
pub fn from_timestamp(secs: i64) -> Result<DateTime> {
    Utc.timestamp_opt(secs, 0)
        .single()
        .ok_or_else(|| Error::unexpected(format!("timestamp {secs} is out of range")))
}
