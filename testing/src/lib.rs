//! # Taskpad Testing
//!
//! Testing utilities and helpers for the Taskpad architecture.
//!
//! This crate provides:
//! - Mock implementations of Environment traits
//! - A fluent Given-When-Then harness for reducers
//! - Assertion helpers for effects
//!
//! ## Example
//!
//! ```ignore
//! use taskpad_testing::{ReducerTest, test_clock};
//!
//! #[test]
//! fn test_add_task() {
//!     ReducerTest::new(AppReducer::new())
//!         .with_env(test_environment())
//!         .given_state(AppState::default())
//!         .when_action(AppAction::AddTask { text: "buy milk".to_string() })
//!         .then_state(|state| {
//!             assert_eq!(state.tasks.total_count(), 1);
//!         })
//!         .run();
//! }
//! ```

use chrono::{DateTime, Utc};
use taskpad_core::environment::{Clock, IdGenerator};

/// Reducer test harness with Given-When-Then syntax
pub mod reducer_test;

/// Mock implementations of Environment traits
///
/// Deterministic stand-ins for the production clock and id source, so
/// reducer tests can assert on exact timestamps and identifiers.
pub mod mocks {
    use super::{Clock, DateTime, IdGenerator, Utc};
    use std::sync::atomic::{AtomicU64, Ordering};
    use uuid::Uuid;

    /// Fixed clock for deterministic tests
    ///
    /// Always returns the same time, making tests reproducible.
    ///
    /// # Example
    ///
    /// ```
    /// use taskpad_testing::mocks::FixedClock;
    /// use taskpad_core::environment::Clock;
    /// use chrono::Utc;
    ///
    /// let clock = FixedClock::new(Utc::now());
    /// let time1 = clock.now();
    /// let time2 = clock.now();
    /// assert_eq!(time1, time2); // Always the same!
    /// ```
    #[derive(Debug, Clone)]
    pub struct FixedClock {
        time: DateTime<Utc>,
    }

    impl FixedClock {
        /// Create a new fixed clock with the given time
        #[must_use]
        pub const fn new(time: DateTime<Utc>) -> Self {
            Self { time }
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.time
        }
    }

    /// Create a default fixed clock for tests (2025-01-01 00:00:00 UTC)
    ///
    /// # Panics
    ///
    /// This function will panic if the hardcoded timestamp fails to parse,
    /// which should never happen in practice.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn test_clock() -> FixedClock {
        FixedClock::new(
            DateTime::parse_from_rfc3339("2025-01-01T00:00:00Z")
                .expect("hardcoded timestamp should always parse")
                .with_timezone(&Utc),
        )
    }

    /// Sequential id source for predictable identifiers
    ///
    /// Mints `Uuid::from_u128(1)`, `Uuid::from_u128(2)`, ... in order, so
    /// tests can anticipate the ids a reducer assigns.
    ///
    /// # Example
    ///
    /// ```
    /// use taskpad_testing::mocks::SequentialIdGenerator;
    /// use taskpad_core::environment::IdGenerator;
    /// use uuid::Uuid;
    ///
    /// let ids = SequentialIdGenerator::new();
    /// assert_eq!(ids.generate(), Uuid::from_u128(1));
    /// assert_eq!(ids.generate(), Uuid::from_u128(2));
    /// ```
    #[derive(Debug, Default)]
    pub struct SequentialIdGenerator {
        next: AtomicU64,
    }

    impl SequentialIdGenerator {
        /// Create a new generator starting at 1
        #[must_use]
        pub const fn new() -> Self {
            Self {
                next: AtomicU64::new(0),
            }
        }
    }

    impl IdGenerator for SequentialIdGenerator {
        fn generate(&self) -> Uuid {
            let n = self.next.fetch_add(1, Ordering::Relaxed) + 1;
            Uuid::from_u128(u128::from(n))
        }
    }
}

// Re-export commonly used items
pub use mocks::{FixedClock, SequentialIdGenerator, test_clock};
pub use reducer_test::{ReducerTest, assertions};

#[cfg(test)]
mod tests {
    use super::*;
    use taskpad_core::environment::IdGenerator;
    use uuid::Uuid;

    #[test]
    fn test_fixed_clock() {
        let clock = test_clock();
        let time1 = clock.now();
        let time2 = clock.now();
        assert_eq!(time1, time2);
    }

    #[test]
    fn test_sequential_ids_are_predictable_and_distinct() {
        let ids = SequentialIdGenerator::new();
        let first = ids.generate();
        let second = ids.generate();
        assert_eq!(first, Uuid::from_u128(1));
        assert_eq!(second, Uuid::from_u128(2));
        assert_ne!(first, second);
    }
}
