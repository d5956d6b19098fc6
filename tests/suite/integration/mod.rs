//! Integration tests
//!
//! Service-level tests drive registration and authentication directly
//! against an in-memory store; HTTP tests go through the full router.

mod http_test;
