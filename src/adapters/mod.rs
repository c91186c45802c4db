// Adapters layer: concrete sinks for rendered pages and exported records.

pub mod export;
pub mod json;
pub mod terminal;

pub use json::JsonSink;
pub use terminal::TerminalSink;
