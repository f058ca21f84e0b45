use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use common::UserRole;

/// Stored login session: the bearer token plus enough of the profile to
/// gate commands without a round trip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user_id: i32,
    pub username: String,
    pub role: UserRole,
}

/// `<config dir>/campus/session.toml`.
fn session_path() -> Result<PathBuf> {
    let dir = dirs::config_dir().context("Could not determine the user config directory")?;
    Ok(dir.join("campus").join("session.toml"))
}

/// Persist the session after a successful login.
pub fn save(session: &Session) -> Result<()> {
    save_to(&session_path()?, session)
}

fn save_to(path: &Path, session: &Session) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    let body = toml::to_string_pretty(session).context("Failed to serialize session")?;
    fs::write(path, body).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Load the stored session, if any.
pub fn load() -> Result<Option<Session>> {
    load_from(&session_path()?)
}

fn load_from(path: &Path) -> Result<Option<Session>> {
    if !path.exists() {
        return Ok(None);
    }
    let body =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let session = toml::from_str(&body)
        .with_context(|| format!("Corrupt session file {}; run `campus login`", path.display()))?;
    Ok(Some(session))
}

/// Load the stored session or fail with a login hint.
pub fn require() -> Result<Session> {
    match load()? {
        Some(session) => Ok(session),
        None => bail!("Not logged in. Run `campus login` first"),
    }
}

/// Forget the stored session. Succeeds if none exists.
pub fn clear() -> Result<()> {
    let path = session_path()?;
    if path.exists() {
        fs::remove_file(&path).with_context(|| format!("Failed to remove {}", path.display()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Session {
        Session {
            token: "tok-abc".into(),
            user_id: 7,
            username: "alice".into(),
            role: UserRole::Lecturer,
        }
    }

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("session.toml");

        save_to(&path, &sample()).unwrap();
        let loaded = load_from(&path).unwrap().unwrap();
        assert_eq!(loaded.token, "tok-abc");
        assert_eq!(loaded.role, UserRole::Lecturer);
    }

    #[test]
    fn test_load_missing_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.toml");
        assert!(load_from(&path).unwrap().is_none());
    }

    #[test]
    fn test_load_corrupt_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.toml");
        fs::write(&path, "not really toml [").unwrap();
        assert!(load_from(&path).is_err());
    }
}
