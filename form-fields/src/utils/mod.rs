//! Shared helpers for the field components

pub mod classes;
pub mod constants;
