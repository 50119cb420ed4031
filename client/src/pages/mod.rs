//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its form signals and delegates the validate/submit sequence
//! to `flows`.

pub mod home;
pub mod login;
pub mod profile;
pub mod register;
