//! Shared wiring for the ferrous-lookup binaries.
pub mod bootstrap;
pub mod di;
