//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State here is plain data. Components wrap it in their own signals, so
//! the models stay testable without a browser.

pub mod login;
