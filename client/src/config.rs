//! Compile-time client configuration: storage key, routes and API paths.

/// `localStorage` key holding the persisted session record.
pub const SESSION_STORAGE_KEY: &str = "account";

/// Schema version written next to the persisted session. Records carrying a
/// different version load as signed out.
pub const SESSION_STORAGE_VERSION: u32 = 0;

pub const HOME_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";
pub const PROFILE_PATH: &str = "/profile";

pub const LOGIN_ENDPOINT: &str = "/api/auth/login";
pub const REGISTER_ENDPOINT: &str = "/api/auth/register";
pub const SIGNOUT_ENDPOINT: &str = "/api/auth/signout";

/// How long a toast stays on screen before it dismisses itself.
pub const NOTICE_TIMEOUT_MS: u32 = 4_000;
