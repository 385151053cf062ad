//! User interface components for Attaché.
//!
//! The whole application is one chat view; these are its pieces.

mod chat_input; // Message input row: text field, send control, file picker
pub mod home;   // The chat view (public for routing)
mod message;    // Single message block
