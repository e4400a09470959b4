//! CLI subcommands

pub mod apply;
pub mod check;
pub mod clean;
pub mod init;
