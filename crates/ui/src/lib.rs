#![forbid(unsafe_code)]

//! Presentation view models: pure mappings from engine state and catalog
//! records to display-ready values.

pub mod vm;
