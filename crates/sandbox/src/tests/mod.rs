//! Integration tests driving the full engine loop headless
