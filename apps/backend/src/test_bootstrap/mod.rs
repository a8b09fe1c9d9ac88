#![cfg(test)]

//! Test-only bootstrap helpers for unit tests.
