//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components own their local signals and report outward only through
//! callback props.

pub mod login_form;
