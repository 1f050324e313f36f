use crate::domain::model::Credential;
use crate::utils::error::{PytheusError, Result};
use std::env;
use std::path::{Path, PathBuf};

pub const DEFAULT_COOKIE_FILE: &str = "~/.pytheus/cookie";

/// Expands a leading `~` and makes the path absolute.
pub fn resolve_path(path: &Path) -> PathBuf {
    let expanded = expand_home(path);
    let absolute = if expanded.is_absolute() {
        expanded
    } else {
        match env::current_dir() {
            Ok(cwd) => cwd.join(expanded),
            Err(_) => expanded,
        }
    };
    absolute.canonicalize().unwrap_or(absolute)
}

fn expand_home(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };
    match home_dir() {
        Some(home) => home.join(rest),
        None => path.to_path_buf(),
    }
}

fn home_dir() -> Option<PathBuf> {
    env::var_os("HOME")
        .filter(|home| !home.is_empty())
        .map(PathBuf::from)
}

/// Reads the cookie value, trimmed. The file is closed before this returns.
pub async fn read_credential(path: &Path) -> Result<Credential> {
    let resolved = resolve_path(path);
    if !resolved.is_file() {
        return Err(PytheusError::CredentialNotFound { path: resolved });
    }

    let raw = match tokio::fs::read_to_string(&resolved).await {
        Ok(raw) => raw,
        Err(source) => {
            return Err(PytheusError::CredentialUnreadable {
                path: resolved,
                source,
            })
        }
    };
    let value = raw.trim();
    if value.is_empty() {
        return Err(PytheusError::CredentialEmpty { path: resolved });
    }

    tracing::debug!("Loaded cookie from {}", resolved.display());
    Ok(Credential::new(value))
}
