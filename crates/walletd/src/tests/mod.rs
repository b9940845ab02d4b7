//! Test suites for the lifecycle daemon.

mod support;
