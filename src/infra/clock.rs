use crate::app::ports::ClockPort;

pub struct SystemClock;

impl ClockPort for SystemClock {
    fn now_millis(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}
