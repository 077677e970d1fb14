//! Shared helpers for conversion tests
//!
//! Builds throwaway Slack export directories in a temp dir.

#![allow(dead_code)]

use serde_json::{json, Value};
use std::path::Path;
use tempfile::TempDir;

/// The single-user export used across the end-to-end tests
pub fn alice() -> Value {
    json!({
        "id": "U1",
        "name": "alice",
        "real_name": "Alice Example",
        "tz": "America/Los_Angeles",
        "tz_label": "Pacific",
        "tz_offset": -28800,
        "deleted": false,
        "image_original": "x"
    })
}

pub fn user(id: &str, name: &str, real_name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "real_name": real_name,
        "tz": "Europe/Amsterdam",
        "tz_label": "Central European Time",
        "tz_offset": 3600,
        "deleted": false,
        "image_original": format!("https://example.com/{}.png", id)
    })
}

/// A temp export whose `users.json` holds `users`
pub fn export_with_users(users: &[Value]) -> TempDir {
    let dir = TempDir::new().unwrap();
    write_users(dir.path(), &serde_json::to_string_pretty(users).unwrap());
    dir
}

/// A temp export with no files at all
pub fn empty_export() -> TempDir {
    TempDir::new().unwrap()
}

pub fn write_users(dir: &Path, content: &str) {
    std::fs::write(dir.join("users.json"), content).unwrap();
}
