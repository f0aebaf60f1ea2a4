pub mod build;
pub mod generate;
pub mod init;
pub mod list;
