//! Helpers for the process environment.

pub mod stdin;
