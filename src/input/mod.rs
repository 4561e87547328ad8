pub mod handler;
pub mod router;
pub mod source;

pub use handler::{InputHandler, KeyAction};
pub use router::{InputRouter, Routing};
pub use source::{EventSource, TerminalEvents};
