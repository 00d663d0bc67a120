//! Unit tests for the item context.
