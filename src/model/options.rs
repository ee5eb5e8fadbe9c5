/*
MIT License

Copyright (c) 2026 Raja Lehtihet and Wael El Oraiby

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
*/

//! Solve options builder.

use std::collections::BTreeMap;
use std::time::Duration;

/// Per-call solver settings.
///
/// This builder owns:
/// - `timeout`: wall-clock bound handed to the backend (none by default).
/// - `fixed`: integer variables pinned to known values before solving.
#[derive(Debug, Clone, Default)]
pub struct SolveOptions {
    pub(crate) timeout: Option<Duration>,
    pub(crate) fixed: BTreeMap<String, i64>,
}

impl SolveOptions {
    /// Creates options with no timeout and no fixed values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bounds the backend check. An expired check surfaces as
    /// [`SolveError::Unknown`](super::SolveError::Unknown).
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Pins integer variable `name` to `value`.
    pub fn fix_int(mut self, name: &str, value: i64) -> Self {
        self.fixed.insert(name.to_string(), value);
        self
    }

    /// Returns the configured timeout.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Returns the timeout in whole milliseconds, saturating at `u32::MAX`.
    pub(crate) fn timeout_ms(&self) -> Option<u32> {
        self.timeout
            .map(|timeout| u32::try_from(timeout.as_millis()).unwrap_or(u32::MAX))
    }
}
