//! Exit code constants for the csb CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unreadable files, invalid config)
//! - 2: Invalid roster (missing inputs, invalid agent or customer)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, unreadable or unparsable files, invalid config.
pub const USER_ERROR: i32 = 1;

/// The roster was rejected by balancing validation.
pub const INVALID_ROSTER: i32 = 2;
