//! Command implementations for the folder-matrix CLI

pub mod run;
