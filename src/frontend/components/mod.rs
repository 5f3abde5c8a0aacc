//! Shared UI components.

pub mod page_loader;
