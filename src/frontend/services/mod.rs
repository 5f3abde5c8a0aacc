//! Frontend state holders.

pub mod session;
pub mod theme;
