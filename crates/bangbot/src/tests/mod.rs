//! Cross-module test suites for the command engine.

pub(crate) mod support;
