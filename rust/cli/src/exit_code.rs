//! Process exit codes.

pub const SUCCESS: i32 = 0;

/// Any failure: bad arguments, unreadable files, rejected configuration.
pub const ERROR: i32 = 2;
