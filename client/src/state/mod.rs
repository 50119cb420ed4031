//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` is the only durable state; `notice` holds transient toasts.

pub mod notice;
pub mod session;
