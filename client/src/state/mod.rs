//! Application state modules.
//!
//! DESIGN
//! ======
//! State types here are plain Rust values. Pages wrap them in `RwSignal`s so
//! every mutation runs inside a single event handler and rendering observes
//! the result.

pub mod lead_form;
