pub mod config;
pub mod holidays;
pub mod init;
pub mod report;
pub mod service;
