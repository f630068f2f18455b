//! Integration test: the default observer routes diagnostics through `log`.
//!
//! Installs a capturing logger (process-global, so this file holds a
//! single test) and checks level, target and message of each event kind.

use std::sync::Mutex;

use growvec::observer::LOG_TARGET;
use growvec::GrowVec;
use log::{Level, LevelFilter, Log, Metadata, Record};

struct CaptureLogger {
    records: Mutex<Vec<(Level, String, String)>>,
}

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        if let Ok(mut records) = self.records.lock() {
            records.push((
                record.level(),
                record.target().to_string(),
                record.args().to_string(),
            ));
        }
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger {
    records: Mutex::new(Vec::new()),
};

#[test]
fn log_observer_emits_growth_rejection_and_dump() {
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(LevelFilter::Trace);

    let mut vec: GrowVec<u32> = GrowVec::new();
    vec.append(5);
    assert!(vec.append_at(6, 4).is_err());
    vec.dump();

    let records = LOGGER.records.lock().unwrap().clone();
    assert!(records.iter().all(|(_, target, _)| target == LOG_TARGET));
    assert_eq!(
        records,
        vec![
            (
                Level::Debug,
                LOG_TARGET.to_string(),
                "grew buffer 0 -> 2 slots (0 live, 1 requested)".to_string(),
            ),
            (
                Level::Warn,
                LOG_TARGET.to_string(),
                "append_at rejected: index 4 out of bounds for length 1".to_string(),
            ),
            (
                Level::Debug,
                LOG_TARGET.to_string(),
                "element at 0 is 5".to_string(),
            ),
        ]
    );
}
