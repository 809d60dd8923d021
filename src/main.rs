use log::{info, LevelFilter, Log, Metadata, Record};

const EXPRESSION: &str = "a + b * c - d / e";

/// Writes every record to stderr, tagged with its module and line.
struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        eprintln!(
            "[{}][{}] {}",
            record.module_path().unwrap_or("?"),
            record.line().unwrap_or(0),
            record.args()
        );
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn main() {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(LevelFilter::Trace);
    }

    match postfix::to_postfix(EXPRESSION) {
        Ok(postfix) => info!("Postfix: {}", postfix),
        Err(error) => info!("conversion failed: {}", error),
    }
}
