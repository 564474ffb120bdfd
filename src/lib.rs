//! todocards - a card-based todo list for the terminal
//!
//! This library provides the todo list state machine and a terminal UI built
//! with Ratatui around it. Access to the list is gated by a user session
//! backed by a pluggable identity provider. Todo items live in memory only.
//!
//! # Modules
//!
//! * [`todo`] - Todo items, the add-item panel lifecycle and edit selection
//! * [`session`] - Identity providers and the user session
//! * [`config`] - Application configuration management
//! * [`ui`] - Terminal user interface components

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Icon definitions for visual representation in the TUI
pub mod icons;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Transient user-facing messages
pub mod message;

/// User session and identity providers
pub mod session;

/// Todo list state
pub mod todo;

/// Terminal user interface components and rendering
pub mod ui;
