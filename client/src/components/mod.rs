//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the landing page's building blocks. They take their data
//! through props and never reach into page state directly.

pub mod lead_field;
pub mod logo;
pub mod site_footer;
