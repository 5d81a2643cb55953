//! Exit statuses (BSD sysexits.h compatible)

/// Successful termination, also used for reported input errors unless
/// `--strict` is given
pub const OK: u8 = 0;

/// Malformed or empty triangle under `--strict`
pub const DATAERR: u8 = 65;

/// Cannot open input
pub const NOINPUT: u8 = 66;

/// Internal software error
pub const SOFTWARE: u8 = 70;

/// Input/output error
pub const IOERR: u8 = 74;
