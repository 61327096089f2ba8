//! Builder for creating and configuring Board instances.

use std::path::{Path, PathBuf};

use super::Board;
use crate::{
    clock::{Clock, SystemClock},
    db::{Database, KeyValueStore, MemoryStore},
    error::{PlanitError, Result},
    notify::{NoopNotifier, Notifier},
    persistence::Persistence,
    render::{NullRenderer, Renderer},
};

enum StorageChoice {
    Default,
    File(PathBuf),
    Memory,
    Custom(Box<dyn KeyValueStore>),
}

/// Builder for creating and configuring Board instances.
pub struct BoardBuilder {
    storage: StorageChoice,
    clock: Box<dyn Clock>,
    renderer: Box<dyn Renderer>,
    notifier: Box<dyn Notifier>,
}

impl BoardBuilder {
    /// Creates a new builder with default settings: the default database
    /// file, the system clock, no renderer and no notifications.
    pub fn new() -> Self {
        Self {
            storage: StorageChoice::Default,
            clock: Box::new(SystemClock),
            renderer: Box::new(NullRenderer),
            notifier: Box::new(NoopNotifier),
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/planit/planit.db` or `~/.local/share/planit/planit.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.storage = StorageChoice::File(path.as_ref().to_path_buf());
        }
        self
    }

    /// Keeps everything in memory; nothing survives the process.
    pub fn in_memory(mut self) -> Self {
        self.storage = StorageChoice::Memory;
        self
    }

    /// Uses the given key-value store instead of a database.
    pub fn with_store(mut self, store: impl KeyValueStore + 'static) -> Self {
        self.storage = StorageChoice::Custom(Box::new(store));
        self
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn with_renderer(mut self, renderer: impl Renderer + 'static) -> Self {
        self.renderer = Box::new(renderer);
        self
    }

    pub fn with_notifier(mut self, notifier: impl Notifier + 'static) -> Self {
        self.notifier = Box::new(notifier);
        self
    }

    /// Builds the configured board. Call [`Board::init`] before use.
    ///
    /// # Errors
    ///
    /// Returns `PlanitError::XdgDirectory` if the default location cannot be
    /// determined
    /// Returns `PlanitError::FileSystem` if the database directory cannot be
    /// created
    /// Returns `PlanitError::Database` if database initialization fails
    pub fn build(self) -> Result<Board> {
        let store: Box<dyn KeyValueStore> = match self.storage {
            StorageChoice::Default => Box::new(Self::open_database(Self::default_database_path()?)?),
            StorageChoice::File(path) => Box::new(Self::open_database(path)?),
            StorageChoice::Memory => Box::new(MemoryStore::new()),
            StorageChoice::Custom(store) => store,
        };

        Ok(Board::new(
            Persistence::new(store),
            self.clock,
            self.renderer,
            self.notifier,
        ))
    }

    fn open_database(path: PathBuf) -> Result<Database> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| PlanitError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
        Database::new(&path)
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("planit")
            .place_data_file("planit.db")
            .map_err(|e| PlanitError::XdgDirectory(e.to_string()))
    }
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}
