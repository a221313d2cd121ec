/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Time sources
//!
//! Signers never call [`SystemTime::now`] directly. They ask a [`TimeSource`], which lets tests move
//! the clock across a refresh boundary without sleeping.

use std::fmt::Debug;
use std::sync::Arc;
use std::time::SystemTime;

/// Source of the current time
pub trait TimeSource: Debug + Send + Sync {
    fn now(&self) -> SystemTime;
}

/// [`TimeSource`] backed by the system clock
#[derive(Debug, Default, Clone, Copy)]
#[non_exhaustive]
pub struct SystemTimeSource;

impl SystemTimeSource {
    pub fn new() -> Self {
        SystemTimeSource
    }
}

impl TimeSource for SystemTimeSource {
    fn now(&self) -> SystemTime {
        SystemTime::now()
    }
}

/// Shareable handle to a [`TimeSource`]
#[derive(Debug, Clone)]
pub struct SharedTimeSource(Arc<dyn TimeSource>);

impl SharedTimeSource {
    pub fn new(time_source: impl TimeSource + 'static) -> Self {
        SharedTimeSource(Arc::new(time_source))
    }

    pub fn now(&self) -> SystemTime {
        self.0.now()
    }
}

impl Default for SharedTimeSource {
    fn default() -> Self {
        SharedTimeSource::new(SystemTimeSource)
    }
}

#[cfg(any(test, feature = "test-util"))]
pub use manual::ManualTimeSource;

#[cfg(any(test, feature = "test-util"))]
mod manual {
    use super::TimeSource;
    use std::sync::{Arc, Mutex};
    use std::time::{Duration, SystemTime};

    /// Time source that only moves when told to
    ///
    /// Clones share the same clock. Requires the `test-util` feature.
    #[derive(Debug, Clone)]
    pub struct ManualTimeSource {
        now: Arc<Mutex<SystemTime>>,
    }

    impl ManualTimeSource {
        pub fn new(start_time: SystemTime) -> Self {
            ManualTimeSource {
                now: Arc::new(Mutex::new(start_time)),
            }
        }

        pub fn set_time(&self, time: SystemTime) {
            *self.now.lock().unwrap() = time;
        }

        pub fn advance(&self, delta: Duration) {
            *self.now.lock().unwrap() += delta;
        }
    }

    impl TimeSource for ManualTimeSource {
        fn now(&self) -> SystemTime {
            *self.now.lock().unwrap()
        }
    }
}

#[cfg(test)]
mod test {
    use crate::time::{ManualTimeSource, SharedTimeSource, TimeSource};
    use std::time::{Duration, UNIX_EPOCH};

    #[test]
    fn manual_time_source_is_shared_between_clones() {
        let time = ManualTimeSource::new(UNIX_EPOCH);
        let shared = SharedTimeSource::new(time.clone());
        assert_eq!(shared.now(), UNIX_EPOCH);

        time.advance(Duration::from_secs(10));
        assert_eq!(shared.now(), UNIX_EPOCH + Duration::from_secs(10));

        time.set_time(UNIX_EPOCH + Duration::from_secs(5));
        assert_eq!(time.now(), UNIX_EPOCH + Duration::from_secs(5));
    }
}
