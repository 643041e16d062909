//! # Flat-file backend
//!
//! The canonical backend: one JSON file holding the whole user
//! collection as an object keyed by email. The collection is loaded
//! wholesale at open and rewritten wholesale on every successful
//! registration.
//!
//! Supported usage model is single-writer-per-file: one `FileUserStore`
//! instance owns its file. The instance itself is thread-safe (the
//! collection sits behind an `RwLock`), but nothing coordinates two
//! instances or two processes opened over the same path.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use crate::config::StoreConfig;
use crate::observability::{log_event_with_fields, Event};
use crate::registry::session::SessionIdentity;
use crate::registry::user::User;

use super::errors::{StoreError, StoreResult};
use super::{registration_permitted, UserStore};

/// File-backed user store
#[derive(Debug)]
pub struct FileUserStore {
    path: PathBuf,
    users: RwLock<BTreeMap<String, User>>,
}

impl FileUserStore {
    /// Open a store backed by `path`.
    ///
    /// A missing file is the expected bootstrap state and yields an
    /// empty collection. A file that exists but cannot be read is
    /// [`StoreError::Unreadable`]; content that does not parse as a
    /// user collection is [`StoreError::Malformed`].
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();
        let users = Self::load(&path)?;

        let count = users.len().to_string();
        log_event_with_fields(
            Event::StoreOpened,
            &[("path", &path.display().to_string()), ("users", &count)],
        );

        Ok(Self {
            path,
            users: RwLock::new(users),
        })
    }

    /// Open a store at the configured default location
    pub fn open_config(config: &StoreConfig) -> StoreResult<Self> {
        Self::open(config.user_file_path())
    }

    /// Open leniently: on any load failure, log a warning and start
    /// with an empty collection instead of failing.
    ///
    /// The file is left untouched until the next successful save, which
    /// replaces it wholesale.
    pub fn open_or_empty(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match Self::open(&path) {
            Ok(store) => store,
            Err(err) => {
                log_event_with_fields(
                    Event::StoreLoadFailed,
                    &[
                        ("path", &path.display().to_string()),
                        ("error", &err.to_string()),
                    ],
                );
                Self {
                    path,
                    users: RwLock::new(BTreeMap::new()),
                }
            }
        }
    }

    fn load(path: &Path) -> StoreResult<BTreeMap<String, User>> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Ok(BTreeMap::new());
            }
            Err(err) => {
                return Err(StoreError::Unreadable {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        Ok(serde_json::from_str(&contents)?)
    }

    /// Write the collection to disk, replacing prior content.
    ///
    /// Writes to a sibling temp file and renames it over the target, so
    /// a failed write cannot truncate the previous contents.
    fn persist(&self, users: &BTreeMap<String, User>) -> StoreResult<()> {
        let payload = serde_json::to_vec_pretty(users)?;

        let write_failed = |source: io::Error| {
            log_event_with_fields(
                Event::StoreSaveFailed,
                &[
                    ("path", &self.path.display().to_string()),
                    ("error", &source.to_string()),
                ],
            );
            StoreError::WriteFailed {
                path: self.path.clone(),
                source,
            }
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(write_failed)?;
            }
        }

        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, &payload).map_err(write_failed)?;
        fs::rename(&tmp, &self.path).map_err(write_failed)?;

        let count = users.len().to_string();
        log_event_with_fields(Event::StoreSaved, &[("users", &count)]);

        Ok(())
    }
}

impl UserStore for FileUserStore {
    fn get_user(&self, email: &str, password: &str) -> StoreResult<Option<User>> {
        let users = self.users.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(users
            .get(email)
            .filter(|user| user.password_matches(password))
            .cloned())
    }

    fn insert_user(&self, user: &User, session: &mut SessionIdentity) -> StoreResult<bool> {
        let bootstrap = self
            .users
            .read()
            .map_err(|_| StoreError::LockPoisoned)?
            .is_empty();

        if !bootstrap {
            let actor = session.resolve(self)?;
            if !registration_permitted(actor.as_ref(), user) {
                log_event_with_fields(Event::RegistrationDenied, &[("email", &user.email)]);
                return Ok(false);
            }
        }

        let mut users = self.users.write().map_err(|_| StoreError::LockPoisoned)?;
        users.insert(user.email.clone(), user.clone());
        self.persist(&users)?;

        log_event_with_fields(
            Event::UserRegistered,
            &[
                ("email", &user.email),
                ("access_level", &user.access_level.code().to_string()),
            ],
        );

        Ok(true)
    }

    fn save(&self) -> StoreResult<()> {
        let users = self.users.read().map_err(|_| StoreError::LockPoisoned)?;
        self.persist(&users)
    }

    fn admin_user_present(&self) -> StoreResult<bool> {
        let users = self.users.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(users.values().any(User::can_add_users))
    }
}
