// src/utils/mod.rs

//! Utility modules for HTTP, filesystem and URL handling.

pub mod fs;
pub mod http;
pub mod url;
