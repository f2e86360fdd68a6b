//! Business logic shared by the poller and the command responder.
//!
//! Services borrow the gateway and the configuration for the duration of one
//! operation and hold no state of their own between calls.

pub mod alert;
pub mod presence;

#[cfg(test)]
mod test;
