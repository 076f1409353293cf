use chrono::Local;

/// `YYMMDDHHMMSS`, whole seconds
pub const TIMESTAMP_FORMAT: &str = "%y%m%d%H%M%S";

/// Source of the collision-avoidance suffix for saved files.
pub trait Clock {
    fn timestamp(&self) -> String;
}

/// Local wall-clock time.
pub struct LocalClock;

impl Clock for LocalClock {
    fn timestamp(&self) -> String {
        Local::now().format(TIMESTAMP_FORMAT).to_string()
    }
}
