//! Ferrous Lookup Infrastructure Layer
pub mod http;
pub mod repositories;
pub mod system;
