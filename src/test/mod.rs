//! Shared helpers for the in-crate test suites.

pub(crate) mod quick;
