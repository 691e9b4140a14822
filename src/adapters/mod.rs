// Adapters layer: terminal output, host wall clock and the Ctrl+C interrupt.

pub mod system;
pub mod terminal;

pub use system::{CtrlC, SystemClock};
pub use terminal::TerminalSink;
