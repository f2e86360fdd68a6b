//! Domain models for presence monitoring.
//!
//! These types sit between the Serenity layer and the services. Serenity objects are
//! converted into them at the gateway boundary and turned back into Discord builders
//! only when a reply or message is sent.

pub mod presence;
pub mod status_report;
