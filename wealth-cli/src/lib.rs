//! Interactive front end: parses commands, drives the session, renders
//! text and configures logging.

pub mod app;
pub mod command;
pub mod logging;
pub mod utils;
pub mod views;

pub use app::Session;
pub use command::{Command, CommandError};
