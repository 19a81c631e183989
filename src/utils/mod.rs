//! Utility modules for nodelink.
//!
//! Common helpers shared by the binary and by front-ends embedding the
//! library.
//!
//! # Available Utilities
//!
//! - [`datetime`] - Date and UTC offset formatting

pub mod datetime;
