//! Command Line Interface module
//!
//! This module contains all CLI commands:
//! - `get`: one-shot lyric lookup
//! - `interactive`: interactive lookup session with recent-search history
//! - `serve`: HTTP server exposing the lookup over a small JSON API
//! - `config`: configuration inspection

pub mod config;
pub mod get;
pub mod interactive;
pub mod serve;
