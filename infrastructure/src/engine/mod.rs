//! Execution engine adapters

mod http;

pub use http::HttpExecutionEngine;
