//! Frontend module for the Nimbus Mail shell.

pub mod app;
pub mod components;
pub mod pages;
pub mod services;
