//! Unified exit codes for the sonda binary.
//! Absence of cache data is a normal result, never a failure.

pub const SUCCESS: i32 = 0;
pub const INTERNAL_ERROR: i32 = 2; // Read/decode failure or bad targets file
