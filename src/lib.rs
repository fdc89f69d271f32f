pub mod config;
pub mod logging;
pub mod journal;
pub mod view;
pub mod session;
pub mod command;
