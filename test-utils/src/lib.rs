//! Presence Watch Test Utils
//!
//! Shared testing utilities for the presence-watch bot. The crate provides factories
//! for Serenity objects so tests can exercise presence handling without a live
//! gateway connection.
//!
//! # Usage
//!
//! ```rust,ignore
//! use serenity::all::OnlineStatus;
//! use test_utils::serenity::create_test_presence;
//!
//! #[test]
//! fn maps_idle_presence() {
//!     let presence = create_test_presence(123456789, "idle");
//!     assert_eq!(presence.status, OnlineStatus::Idle);
//! }
//! ```

pub mod serenity;
