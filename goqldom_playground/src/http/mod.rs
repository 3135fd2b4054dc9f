//! Utilities for serving the Playground over HTTP in a library-agnostic manner.

pub mod playground;
