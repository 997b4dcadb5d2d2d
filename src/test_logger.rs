//! A `log` implementation that records messages emitted on the current thread.
use std::{cell::RefCell, sync::Once};

use log::{Level, Log, Metadata, Record};

struct CapturingLogger;

thread_local! {
    static RECORDS: RefCell<Vec<(Level, String)>> = const { RefCell::new(Vec::new()) };
}

static LOGGER: CapturingLogger = CapturingLogger;
static INSTALL: Once = Once::new();

impl Log for CapturingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.target() == "storefront_tracking"
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            RECORDS.with(|records| {
                records
                    .borrow_mut()
                    .push((record.level(), record.args().to_string()))
            });
        }
    }

    fn flush(&self) {}
}

/// Install the logger (once per process) and clear this thread's records.
pub(crate) fn capture() {
    INSTALL.call_once(|| {
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(log::LevelFilter::Trace);
        }
    });
    RECORDS.with(|records| records.borrow_mut().clear());
}

/// Take the records logged on this thread since the last call to [`capture`].
pub(crate) fn take() -> Vec<(Level, String)> {
    RECORDS.with(|records| std::mem::take(&mut *records.borrow_mut()))
}

/// Messages among `records` logged at `level`.
pub(crate) fn messages_at(records: &[(Level, String)], level: Level) -> Vec<&str> {
    records
        .iter()
        .filter(|(record_level, _)| *record_level == level)
        .map(|(_, message)| message.as_str())
        .collect()
}
