//! Application root: routing and route guarding.

pub mod guard;
pub mod main;
