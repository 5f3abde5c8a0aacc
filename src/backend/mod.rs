//! Backend module for the Nimbus Mail shell.

pub mod services;
pub mod utils;
