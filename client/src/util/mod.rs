//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic so the SSR build and unit tests never touch `web-sys`.

pub mod alert;
pub mod clock;
