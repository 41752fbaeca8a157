//! Persisted key names shared with the clock-in action.

pub const IS_CLOCKED_IN: &str = "isClockedIn";
pub const CLOCK_IN_TIME: &str = "clockInTime";

pub const IS_ON_BREAK: &str = "isOnBreak";
pub const BREAK_TYPE: &str = "breakType";
pub const BREAK_START_TIME: &str = "breakStartTime";

/// Break time accumulated during the open shift, in seconds.
pub const BREAK_SECONDS: &str = "breakSeconds";

pub const TRUE: &str = "true";

pub const BREAK_KEYS: [&str; 3] = [IS_ON_BREAK, BREAK_TYPE, BREAK_START_TIME];
