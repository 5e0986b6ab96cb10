//! Extra profiles loaded from TOML or JSON files at start-up.
//!
//! TOML files hold a `[[profile]]` array. JSON files hold either
//! `{"profile": [...]}` or a bare array of profiles.

use crate::error::{Error, Result};
use crate::profile::Profile;
use crate::registry::Registry;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CatalogFile {
    profile: Vec<Profile>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonCatalog {
    Table(CatalogFile),
    List(Vec<Profile>),
}

fn parse_error(path: &Path, detail: impl std::fmt::Display) -> Error {
    Error::CatalogParse {
        path: path.to_path_buf(),
        detail: detail.to_string(),
    }
}

/// Parse catalog `content`; `path` selects the format and labels errors.
pub fn parse(path: &Path, content: &str) -> Result<Vec<Profile>> {
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let profiles = if is_json {
        match serde_json::from_str::<JsonCatalog>(content).map_err(|e| parse_error(path, e))? {
            JsonCatalog::Table(file) => file.profile,
            JsonCatalog::List(list) => list,
        }
    } else {
        toml::from_str::<CatalogFile>(content)
            .map_err(|e| parse_error(path, e))?
            .profile
    };

    if let Some(index) = profiles.iter().position(|p| p.model.trim().is_empty()) {
        return Err(Error::InvalidProfile {
            path: path.to_path_buf(),
            detail: format!("profile #{} has an empty model", index + 1),
        });
    }

    Ok(profiles)
}

/// Read and parse one catalog file.
pub fn load_file(path: &Path) -> Result<Vec<Profile>> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::CatalogRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse(path, &content)
}

/// Register every profile from every file, returning how many were added.
/// Files are applied in order, so a later file overrides an earlier one.
pub fn load_into(registry: &Registry, paths: &[PathBuf]) -> Result<usize> {
    let mut total = 0;
    for path in paths {
        let profiles = load_file(path)?;
        tracing::debug!(path = %path.display(), count = profiles.len(), "loaded catalog file");
        total += profiles.len();
        registry.register_all(profiles);
    }
    Ok(total)
}
