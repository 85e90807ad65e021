//! Integration tests for the mathpad binary

mod completions_test;
mod config_test;
mod helpers;
mod insert_test;
