//! Workspace test host. See `tests/` for cross-crate golden tests.
