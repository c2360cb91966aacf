use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "Snackscan -- ", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "Snackscan -- ", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "Snackscan -- ", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "Snackscan -- ", "{}", message);
    }
}
