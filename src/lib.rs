//! arc-blog: fetch blog posts and external articles for research ingestion
//!
//! Ingestion is a stub for now: `fetch` validates its sources and reports
//! what it would do.
//!
//! Architecture:
//! - `domain`: fetch request and result, request invariants
//! - `application`: fetch service, output format resolution and rendering
//! - `cli`: clap definitions, dispatch, exit codes

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;
