//! menu-probe: inspect the served HTML of a page for its header block and
//! navigation-menu affordances without a browser.
//!
//! The library is split the same way a probe run flows:
//!
//! 1. [`acquisition`] fetches one page and decodes it into a [`Document`].
//! 2. [`extraction`] runs regex-level scans over that document.
//! 3. [`cli`] renders reports and maps outcomes to exit codes for the
//!    `check-home-html` and `extract-header-html` binaries.

pub mod acquisition;
pub mod cli;
pub mod extraction;

pub use acquisition::document::{DecodePolicy, Document};
pub use acquisition::fetcher::{fetch, FetchConfig, FetchError};
pub use extraction::header::{extract_header, HeaderExtract, HeaderExtractor};
pub use extraction::markers::{MarkerScanner, ScanConfig, ScanReport};
