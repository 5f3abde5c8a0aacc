//! Backend utilities.

pub mod paths;
