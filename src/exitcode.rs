//! Exit statuses (BSD sysexits.h compatible)

/// Successful termination
pub const OK: i32 = 0;

/// The outline is malformed
pub const DATAERR: i32 = 65;

/// The input file cannot be opened
pub const NOINPUT: i32 = 66;

/// Reading or writing a stream failed
pub const IOERR: i32 = 74;
