//! Exit code constants for the CLI application.
//!
//! Every command maps its outcome onto one of these through [`crate::run`].

/// Success exit code (standard Unix convention).
pub const SUCCESS: i32 = 0;

/// General error exit code.
pub const ERROR: i32 = 2;

/// The session was cut short, e.g. input closed in the middle of a prompt.
pub const INTERRUPTED: i32 = 130;
