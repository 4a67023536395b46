use log::{Level, LevelFilter, Log, Metadata, Record};
use rewind_data::samplers::Sampler;
use rewind_data::SamplerState;
use std::sync::Mutex;

// Shared by several test crates; not every helper is used by each.
#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Pulls every remaining item of the current pass.
#[allow(dead_code)]
pub fn drain<S: Sampler + ?Sized>(sampler: &mut S) -> Vec<S::Item> {
    let mut items = Vec::new();
    while let Ok(item) = sampler.advance() {
        items.push(item);
    }
    items
}

/// Sends a snapshot through JSON, the way a host would persist it.
#[allow(dead_code)]
pub fn persist(state: &SamplerState) -> SamplerState {
    let json = serde_json::to_string(state).expect("SamplerState should serialize");
    serde_json::from_str(&json).expect("SamplerState should deserialize")
}

/// Logger keeping every record emitted by this crate, for tests asserting on
/// diagnostics. It replaces `init_logger` in the test binaries that use it.
#[allow(dead_code)]
pub struct CaptureLogger {
    records: Mutex<Vec<(Level, String)>>,
}

#[allow(dead_code)]
static CAPTURE: CaptureLogger = CaptureLogger {
    records: Mutex::new(Vec::new()),
};

impl Log for CaptureLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.target().starts_with("rewind")
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            if let Ok(mut records) = self.records.lock() {
                records.push((record.level(), record.args().to_string()));
            }
        }
    }

    fn flush(&self) {}
}

#[allow(dead_code)]
impl CaptureLogger {
    /// Drains the records captured so far.
    pub fn take(&self) -> Vec<(Level, String)> {
        std::mem::take(&mut *self.records.lock().expect("capture lock poisoned"))
    }
}

#[allow(dead_code)]
pub fn capture_logs() -> &'static CaptureLogger {
    let _ = log::set_logger(&CAPTURE);
    log::set_max_level(LevelFilter::Trace);
    &CAPTURE
}
