//! Core library for causelist
//!
//! This crate implements the **Functional Core** of the causelist application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! The causelist project uses a two-crate architecture to enforce separation of concerns:
//!
//! - **`causelist_core`** (this crate): Pure transformation functions with zero I/O
//! - **`causelist`**: File system, HTTP and terminal I/O (the Imperative Shell)
//!
//! ## Functional Core Principles
//!
//! All functions in this crate adhere to these principles:
//!
//! - **Pure functions**: Same input always produces the same output
//! - **No side effects**: No I/O operations, no external state mutations
//! - **Deterministic**: Behavior is predictable and reproducible
//! - **Testable**: Can be tested with simple fixture data, no mocking required
//!
//! # Module Organization
//!
//! - [`causelist`]: The extraction engine that turns causelist HTML into case records
//! - [`upload`]: Response shapes and policies used by the upload server
//!
//! # Example Usage
//!
//! ```rust
//! use causelist_core::causelist::extract_cases;
//!
//! let html = "<div>Court No : 3</div>\
//!     <table><tr><td>1</td><td>CRL.M.PET. 5/2024</td><td>State vs Kumar</td></tr></table>";
//!
//! let records = extract_cases(html);
//!
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].court_no, "3");
//! assert_eq!(records[0].stage, "Unknown");
//! ```

pub mod causelist;
pub mod upload;
