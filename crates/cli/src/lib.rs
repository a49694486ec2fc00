//! Command-line front end for the tschain pipeline plugin

pub mod cli;
pub mod commands;
