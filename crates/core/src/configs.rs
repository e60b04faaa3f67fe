//! Configuration parsing for the optional task file

pub mod tasks;
