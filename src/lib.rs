//! IPv4 address and CIDR block calculator.
//!
//! Parsing and validation live in [`models`], subnet computations in
//! [`processing`], text and JSON rendering in [`output`], and the
//! subcommand runners in [`commands`].

pub mod cli;
pub mod commands;
pub mod config;
pub mod models;
pub mod output;
pub mod processing;

pub use cli::{CliOpt, Command};
pub use models::{Cidr, IpError};
