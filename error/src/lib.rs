//! Errors raised and captured by the Upshot result algebra.

pub mod error;
