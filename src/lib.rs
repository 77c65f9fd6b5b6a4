// src/lib.rs
//! cpplint-gate library.

#![deny(missing_docs)]

pub mod assemble;
pub mod changes;
pub mod cli;
pub mod config;
pub mod discover;
pub mod dispatch;
pub mod error;
pub mod exclusions;
pub mod exec;
pub mod matcher;
pub mod path;
pub mod report;
