#![allow(dead_code)]

use std::error::Error;

pub use colocate_test_utils::init_tracing;

pub type TestResult = Result<(), Box<dyn Error>>;
