//! Feedback and voting board with a local admin gate.
//!
//! ARCHITECTURE
//! ============
//! Everything one client owns lives behind a [`storage::Storage`] handle:
//! the feedback list, the vote ledger, the voter identifier and the admin
//! session. [`board::FeedbackBoard`] is the only mutation surface for items
//! and votes; [`admin::AdminGate`] owns the session. [`commands::App`] ties
//! them together for the CLI and the interactive shell.

pub mod admin;
pub mod board;
pub mod commands;
pub mod config;
pub mod feedback;
pub mod identity;
pub mod media;
pub mod model;
pub mod query;
pub mod render;
pub mod seed;
pub mod shell;
pub mod storage;
pub mod vote;
pub mod watch;
