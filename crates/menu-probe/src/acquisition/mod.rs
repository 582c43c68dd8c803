//! Page acquisition: a single HTTP GET decoded into an in-memory document.

pub mod document;
pub mod fetcher;
