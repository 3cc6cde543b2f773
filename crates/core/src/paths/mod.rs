//! Storage path definitions for regulations.gov records.
//!
//! This module defines the slash-separated paths that records and their attachments are
//! stored under. It contains **no I/O logic** - only typed path construction.

pub mod attachment;
pub mod docket;
