use std::collections::HashMap;
use std::io;
use std::sync::Mutex;

/// Key under which the display name is kept.
pub const USERNAME_KEY: &str = "username";

/// Small string key-value store local to the device.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> io::Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> io::Result<()>;
}

/// Values kept in process memory. Used on web and in tests.
#[derive(Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    fn lock(&self) -> io::Result<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.values
            .lock()
            .map_err(|_| io::Error::other("local store lock poisoned"))
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> io::Result<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> io::Result<()> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> io::Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> io::Result<()> {
        (**self).set(key, value)
    }
}

/// The store the running app should use: a settings file on native
/// targets, memory on web or when no data directory can be resolved.
pub fn platform_store() -> Box<dyn KeyValueStore> {
    #[cfg(not(target_arch = "wasm32"))]
    {
        match FileStore::open_default() {
            Ok(store) => return Box::new(store),
            Err(e) => tracing::warn!(error = %e, "No data directory, username will not persist"),
        }
    }

    Box::new(MemoryStore::default())
}

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStore;

#[cfg(not(target_arch = "wasm32"))]
mod file {
    use super::KeyValueStore;
    use directories::ProjectDirs;
    use std::collections::HashMap;
    use std::fs;
    use std::io;
    use std::path::PathBuf;

    const FILE_NAME: &str = "settings.json";

    /// JSON object file in the platform data directory.
    pub struct FileStore {
        path: PathBuf,
    }

    impl FileStore {
        /// Store under the per-user data directory for this app.
        pub fn open_default() -> io::Result<Self> {
            let proj = ProjectDirs::from("com", "household", "household-todo")
                .ok_or_else(|| io::Error::other("unable to get project dirs"))?;
            Ok(Self::at(proj.data_dir().join(FILE_NAME)))
        }

        pub fn at(path: impl Into<PathBuf>) -> Self {
            Self { path: path.into() }
        }

        fn read_all(&self) -> io::Result<HashMap<String, String>> {
            match fs::read_to_string(&self.path) {
                Ok(contents) => serde_json::from_str(&contents).map_err(io::Error::other),
                Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(HashMap::new()),
                Err(e) => Err(e),
            }
        }
    }

    impl KeyValueStore for FileStore {
        fn get(&self, key: &str) -> io::Result<Option<String>> {
            Ok(self.read_all()?.remove(key))
        }

        fn set(&self, key: &str, value: &str) -> io::Result<()> {
            let mut values = self.read_all()?;
            values.insert(key.to_string(), value.to_string());

            if let Some(dir) = self.path.parent() {
                fs::create_dir_all(dir)?;
            }
            let json = serde_json::to_string_pretty(&values).map_err(io::Error::other)?;
            fs::write(&self.path, json)?;
            tracing::debug!(path = %self.path.display(), key, "Saved local setting");
            Ok(())
        }
    }
}
