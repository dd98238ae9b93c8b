pub mod archive_http;
pub mod process_command;
pub mod zip_extractor;
