//! Core types shared across VList facilities
//!
//! This crate provides the canonical schema constants used by both the
//! error facility and the logging facility. It has no dependencies so that
//! every layer can agree on field names without pulling in the others.

pub mod schema;
