//! Integration tests

mod align_test;
mod e2e_test;
mod feed_test;
