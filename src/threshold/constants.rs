/// Pattern an increase-over-time-frame threshold must match
///
/// Groups: delta digits, time-frame digits, time unit literal.
pub const INCREASE_OVER_TIME_FRAME_PATTERN: &str = r"^\+([0-9]*\.?[0-9]*)%/([0-9]*\.?[0-9]*)([A-Za-z]+)$";

/// Time-frame magnitude used when the threshold omits it (`+10%/s`)
pub const DEFAULT_TIME_FRAME: f64 = 1.0;

/// Smallest accepted explicit time-frame magnitude
pub const MIN_TIME_FRAME: f64 = 1.0;
