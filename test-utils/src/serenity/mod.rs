//! Test factories for creating Serenity API objects.
//!
//! These factories create valid Serenity structs by deserializing JSON, simulating
//! what Discord's gateway would deliver.
//!
//! # Available Factories
//!
//! - `presence::create_test_presence` - Create Serenity Presence objects

pub mod presence;

pub use presence::create_test_presence;
