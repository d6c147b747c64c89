// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Wall clock timer for diagnostics. Reports nothing without `std`.
#[derive(Debug)]
pub(crate) struct Stopwatch {
    #[cfg(feature = "std")]
    start: std::time::Instant,
}

impl Stopwatch {
    pub(crate) fn start() -> Self {
        Self {
            #[cfg(feature = "std")]
            start: std::time::Instant::now(),
        }
    }

    /// Microseconds since [`Stopwatch::start`], saturating.
    pub(crate) fn elapsed_us(&self) -> Option<u64> {
        #[cfg(feature = "std")]
        {
            Some(u64::try_from(self.start.elapsed().as_micros()).unwrap_or(u64::MAX))
        }
        #[cfg(not(feature = "std"))]
        {
            None
        }
    }
}
