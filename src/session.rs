//! The signed-in admin, shared by every screen.
//!
//! Loaded once at start-up from a JSON file so a restart keeps the user
//! signed in; written on login, removed on logout.

use std::fs;
use std::path::{Path, PathBuf};
use crate::error::KioskError;
use crate::records::SessionUser;

#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
    current: Option<SessionUser>,
}

impl SessionStore {
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let current = match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<SessionUser>(&contents) {
                Ok(user) => {
                    tracing::debug!("Restored session for {}", user.email);
                    Some(user)
                }
                Err(err) => {
                    tracing::warn!("Ignoring unreadable session file {}: {}", path.display(), err);
                    None
                }
            },
            Err(_) => None,
        };
        Self { path, current }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn current(&self) -> Option<&SessionUser> {
        self.current.as_ref()
    }

    pub fn is_admin(&self) -> bool {
        self.current().is_some()
    }

    pub fn display_name(&self) -> Option<&str> {
        self.current().map(|user| {
            if user.full_name.is_empty() { user.email.as_str() } else { user.full_name.as_str() }
        })
    }

    /// The in-memory state changes even when writing the file fails.
    pub fn sign_in(&mut self, user: SessionUser) -> Result<(), KioskError> {
        let json = serde_json::to_string_pretty(&user)?;
        self.current = Some(user);
        fs::write(&self.path, json)?;
        Ok(())
    }

    pub fn sign_out(&mut self) -> Result<(), KioskError> {
        self.current = None;
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn admin() -> SessionUser {
        SessionUser { email: "admin@school.ac.th".into(), full_name: "Admin".into() }
    }

    #[test]
    fn session_survives_a_restart() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        let mut store = SessionStore::load(&path);
        assert!(!store.is_admin());
        store.sign_in(admin()).unwrap();

        let restored = SessionStore::load(&path);
        assert_eq!(restored.current(), Some(&admin()));
        assert_eq!(restored.display_name(), Some("Admin"));
    }

    #[test]
    fn sign_out_removes_the_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        let mut store = SessionStore::load(&path);
        store.sign_in(admin()).unwrap();
        store.sign_out().unwrap();
        assert!(!path.exists());
        assert!(SessionStore::load(&path).current().is_none());
        store.sign_out().unwrap();
    }

    #[test]
    fn corrupt_file_loads_signed_out() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "{not json").unwrap();
        assert!(!SessionStore::load(&path).is_admin());
    }
}
