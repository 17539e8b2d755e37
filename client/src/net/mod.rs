//! Outbound lead hand-off.
//!
//! SYSTEM CONTEXT
//! ==============
//! The landing page never talks to the host server. Submitted leads go to an
//! injected [`lead_sink::LeadSink`]; the default one only writes a diagnostic
//! log line.

pub mod lead_sink;
