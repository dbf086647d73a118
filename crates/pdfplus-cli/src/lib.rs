//! Library side of the `pdfplus` command-line tool.

pub mod cli;
pub mod commands;
pub mod logging;
