//! Unit tests for the dashboard facade.
