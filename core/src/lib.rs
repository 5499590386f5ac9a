//! # Taskpad Core
//!
//! Core traits and types for the Taskpad architecture.
//!
//! This crate provides the fundamental abstractions for building the task-list
//! state model as a unidirectional state machine: state is owned by a store,
//! actions describe user intent, and a pure reducer performs every transition.
//!
//! ## Core Concepts
//!
//! - **State**: Owned domain state for a feature
//! - **Action**: All possible inputs to a reducer
//! - **Reducer**: Pure function `(State, Action, Environment) → Effects`
//! - **Effect**: Side effect descriptions (not execution)
//! - **Environment**: Injected dependencies via traits
//!
//! ## Architecture Principles
//!
//! - Functional Core, Imperative Shell
//! - Unidirectional Data Flow
//! - Explicit Effects (no hidden I/O)
//! - Dependency Injection via Environment
//!
//! ## Example
//!
//! ```ignore
//! use taskpad_core::*;
//!
//! #[derive(Clone, Debug)]
//! struct ChecklistState {
//!     entries: Vec<Entry>,
//! }
//!
//! #[derive(Clone, Debug)]
//! enum ChecklistAction {
//!     Append { text: String },
//!     Clear,
//! }
//!
//! impl Reducer for ChecklistReducer {
//!     type State = ChecklistState;
//!     type Action = ChecklistAction;
//!     type Environment = ChecklistEnvironment;
//!
//!     fn reduce(
//!         &self,
//!         state: &mut ChecklistState,
//!         action: ChecklistAction,
//!         env: &ChecklistEnvironment,
//!     ) -> SmallVec<[Effect<ChecklistAction>; 4]> {
//!         // Business logic goes here
//!         smallvec![Effect::None]
//!     }
//! }
//! ```

// Re-export commonly used types
pub use chrono::{DateTime, Utc};
pub use smallvec::{SmallVec, smallvec};

/// Reducer module - The core trait for business logic
///
/// Reducers are pure functions: `(State, Action, Environment) → Effects`.
/// They contain all transition logic and are deterministic and testable.
pub mod reducer {
    use super::SmallVec;
    use super::effect::Effect;

    /// The Reducer trait - core abstraction for business logic
    ///
    /// # Type Parameters
    ///
    /// - `State`: The domain state this reducer operates on
    /// - `Action`: The action type this reducer processes
    /// - `Environment`: The injected dependencies this reducer needs
    ///
    /// # Example
    ///
    /// ```ignore
    /// impl Reducer for ChecklistReducer {
    ///     type State = ChecklistState;
    ///     type Action = ChecklistAction;
    ///     type Environment = ChecklistEnvironment;
    ///
    ///     fn reduce(
    ///         &self,
    ///         state: &mut ChecklistState,
    ///         action: ChecklistAction,
    ///         env: &ChecklistEnvironment,
    ///     ) -> SmallVec<[Effect<ChecklistAction>; 4]> {
    ///         match action {
    ///             ChecklistAction::Append { text } => {
    ///                 // Transition logic here
    ///                 smallvec![Effect::None]
    ///             }
    ///             _ => smallvec![Effect::None],
    ///         }
    ///     }
    /// }
    /// ```
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected dependencies
        type Environment;

        /// Reduce an action into state changes and effects
        ///
        /// This is a pure function that:
        /// 1. Validates the action
        /// 2. Updates state in place
        /// 3. Returns effect descriptions to be executed
        ///
        /// # Arguments
        ///
        /// - `state`: Mutable reference to current state
        /// - `action`: The action to process
        /// - `env`: Reference to injected dependencies
        ///
        /// # Returns
        ///
        /// Effects to be executed by the runtime. Most transitions return
        /// `smallvec![Effect::None]`; the inline capacity keeps the common
        /// case off the heap.
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]>;
    }
}

/// Effect module - Side effect descriptions
///
/// Effects describe side effects to be performed by the runtime.
/// They are values (not execution), returned from reducers and executed
/// by the Store.
pub mod effect {
    use std::future::Future;
    use std::pin::Pin;
    use std::time::Duration;

    /// Effect type - describes a side effect to be executed
    ///
    /// Effects are NOT executed immediately. They are descriptions of what
    /// should happen, returned from reducers and executed by the Store
    /// runtime. Actions produced by effects feed back into the reducer.
    ///
    /// # Type Parameters
    ///
    /// - `Action`: The action type that effects can produce (feedback loop)
    pub enum Effect<Action> {
        /// No-op effect
        None,

        /// Delayed action (timers in front of a transition)
        Delay {
            /// How long to wait
            duration: Duration,
            /// Action to dispatch after the delay
            action: Box<Action>,
        },

        /// Arbitrary async computation
        ///
        /// Returns `Option<Action>` - if Some, the action is fed back into
        /// the reducer
        Future(Pin<Box<dyn Future<Output = Option<Action>> + Send>>),
    }

    // Manual Debug implementation since Future doesn't implement Debug
    impl<Action> std::fmt::Debug for Effect<Action>
    where
        Action: std::fmt::Debug,
    {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match self {
                Effect::None => write!(f, "Effect::None"),
                Effect::Delay { duration, action } => f
                    .debug_struct("Effect::Delay")
                    .field("duration", duration)
                    .field("action", action)
                    .finish(),
                Effect::Future(_) => write!(f, "Effect::Future(<future>)"),
            }
        }
    }

    impl<Action> Effect<Action> {
        /// Whether this effect schedules no work
        #[must_use]
        pub const fn is_none(&self) -> bool {
            matches!(self, Effect::None)
        }
    }
}

/// Environment module - Dependency injection traits
///
/// All external dependencies of a reducer are abstracted behind traits and
/// injected via the Environment parameter: the current time and the source
/// of unique identifiers. Production implementations live here; test doubles
/// live in the testing crate.
pub mod environment {
    use chrono::{DateTime, Utc};
    use uuid::Uuid;

    /// Clock trait - abstracts time operations for testability
    ///
    /// Production code uses [`SystemClock`]; tests inject a fixed clock so
    /// timestamps are deterministic.
    pub trait Clock: Send + Sync {
        /// Get the current time
        fn now(&self) -> DateTime<Utc>;
    }

    /// Production clock backed by the system time
    #[derive(Debug, Clone, Copy, Default)]
    pub struct SystemClock;

    impl Clock for SystemClock {
        fn now(&self) -> DateTime<Utc> {
            Utc::now()
        }
    }

    /// `IdGenerator` trait - the source of unique identifiers
    ///
    /// Any collision-free generator satisfies the contract; production code
    /// uses [`UuidGenerator`], tests inject a sequential counter so ids are
    /// predictable.
    pub trait IdGenerator: Send + Sync {
        /// Mint a fresh identifier, never returned before
        fn generate(&self) -> Uuid;
    }

    /// Production id source backed by random (v4) UUIDs
    #[derive(Debug, Clone, Copy, Default)]
    pub struct UuidGenerator;

    impl IdGenerator for UuidGenerator {
        fn generate(&self) -> Uuid {
            Uuid::new_v4()
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)] // Test code can use unwrap

    use super::effect::Effect;
    use super::environment::{IdGenerator, UuidGenerator};
    use super::reducer::Reducer;
    use super::{SmallVec, smallvec};
    use std::time::Duration;

    #[test]
    fn effect_debug_hides_future_internals() {
        let delay: Effect<&str> = Effect::Delay {
            duration: Duration::from_millis(500),
            action: Box::new("remove"),
        };
        let rendered = format!("{delay:?}");
        assert!(rendered.contains("Effect::Delay"));
        assert!(rendered.contains("500ms"));

        let fut: Effect<&str> = Effect::Future(Box::pin(async { None }));
        assert_eq!(format!("{fut:?}"), "Effect::Future(<future>)");
    }

    #[test]
    fn effect_is_none_only_for_none() {
        assert!(Effect::<u8>::None.is_none());
        let delay: Effect<u8> = Effect::Delay {
            duration: Duration::from_secs(1),
            action: Box::new(0),
        };
        assert!(!delay.is_none());
    }

    #[test]
    fn uuid_generator_mints_distinct_ids() {
        let ids = UuidGenerator;
        assert_ne!(ids.generate(), ids.generate());
    }

    // Minimal reducer exercising the trait surface end to end.
    struct Tally;

    impl Reducer for Tally {
        type State = u32;
        type Action = u32;
        type Environment = ();

        fn reduce(
            &self,
            state: &mut u32,
            action: u32,
            _env: &(),
        ) -> SmallVec<[Effect<u32>; 4]> {
            *state += action;
            smallvec![Effect::None]
        }
    }

    #[test]
    fn reducer_trait_mutates_state_in_place() {
        let mut state = 0;
        let effects = Tally.reduce(&mut state, 3, &());
        assert_eq!(state, 3);
        assert_eq!(effects.len(), 1);
        assert!(effects[0].is_none());
    }
}
