//! Heartbeat forwarder for the Code Tracker API.
//!
//! Reads a JSON heartbeat batch from stdin and forwards it as a single HTTP
//! POST, translating the outcome into the process exit codes the host editor
//! extension understands.

pub mod config;
pub mod error;
pub mod input;
pub mod sender;

pub use config::Config;
pub use error::{Result, TrackioError};
pub use sender::HeartbeatSender;
