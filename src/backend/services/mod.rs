//! Backend services.

pub mod credentials;
