//! Core UI functionality for todocards.
//!
//! This module contains the building blocks every component uses:
//!
//! - [`actions`] - Action definitions produced by components and routed by the app
//! - [`component`] - Base component trait
//! - [`event_handler`] - Terminal event polling and ticks
//!
//! Components turn terminal events into [`Action`]s, the app routes each
//! action through the component hierarchy, and whatever is left is handled at
//! app level (session, quitting, messages).

pub mod actions;
pub mod component;
pub mod event_handler;

pub use actions::Action;
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
