//! CLI module graph.

pub mod catalog;
pub mod command;
pub mod config;
pub mod output;
pub mod run;
pub mod serve;
pub mod stay;
