//! Regex-level extraction over a fetched [`Document`](crate::Document).

pub mod header;
pub mod markers;
