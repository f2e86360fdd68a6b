//! Background jobs.

pub mod presence_poll;
