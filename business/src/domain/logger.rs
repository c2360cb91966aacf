/// Logging port for the upload and analysis pipeline.
///
/// Keeps the use cases free of any logging backend; the CLI wires a
/// tracing-backed implementation in at startup.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
