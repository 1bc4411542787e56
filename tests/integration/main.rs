//! Integration test suite entry point.

#[macro_use]
mod fixture;

mod chat_tests;
mod cli_tests;
mod error_handling_tests;
mod import_tests;
mod output_format_tests;
mod search_tests;
