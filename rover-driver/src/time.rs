use std::thread;
use std::time::Duration;

pub(crate) fn sleep_ms(duration_ms: u64) {
    thread::sleep(Duration::from_millis(duration_ms));
}
