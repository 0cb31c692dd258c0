//! pwclockctl settings handling
//!
//! Settings live in `app.json` under the platform configuration
//! directory.  A missing or unreadable file silently yields the
//! defaults.  The defaults are written out only when no file exists
//! yet, so users have something to edit and their own file is never
//! touched.
//!
//! ```rust,ignore
//! let s = Settings::init(scaffold().unwrap().config_dir())?;
//! println!("{}", s.r().app().metadata_tool);
//! ```

mod app;
pub use app::AppSettings;

use crate::error::SettingsError;
use directories::ProjectDirs;
use serde::de::DeserializeOwned;
use std::{
    fs::{self, File, OpenOptions},
    io::{Read, Write},
    path::{Path, PathBuf},
    sync::{Arc, RwLock, RwLockReadGuard},
};

/// Create the required directories
pub fn scaffold() -> Option<ProjectDirs> {
    let dir = ProjectDirs::from("org", "pipewire", "pwclockctl")?;
    let _ = fs::create_dir_all(dir.config_dir()); // Eat errors for breakfast
    Some(dir)
}

/// Main settings tree
#[derive(Default, Debug)]
pub struct Settings {
    base: PathBuf,
    app: RwLock<AppSettings>,
}

impl Settings {
    /// Create a new settings tree from a config path
    pub fn init<'p>(path: impl Into<&'p Path>) -> Result<Arc<Settings>, SettingsError> {
        let base = path.into().to_path_buf();
        let file = base.join("app.json");
        let missing = !file.exists();

        let this = Arc::new(Self {
            app: RwLock::new(load_path(file)),
            base,
        });
        if missing {
            this.sync()?;
        }
        Ok(this)
    }

    /// Sync any changes back to disk
    pub fn sync(self: &Arc<Self>) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(&*self.r().app())?;
        OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(self.base.join("app.json"))
            .and_then(|mut f| f.write_all(json.as_bytes()))
            .map_err(Into::into)
    }

    /// Get read access to any stored setting
    pub fn r<'this>(self: &'this Arc<Self>) -> ReadSettings<'this> {
        ReadSettings { inner: self }
    }
}

fn load_path<T: Default + DeserializeOwned>(path: PathBuf) -> T {
    File::open(path)
        .and_then(|mut f| {
            let mut c = String::new();
            f.read_to_string(&mut c).map(|_| c)
        })
        .and_then(|s| serde_json::from_str(&s).map_err(Into::into))
        .unwrap_or_else(|_| T::default())
}

pub struct ReadSettings<'settings> {
    inner: &'settings Arc<Settings>,
}

impl<'s> ReadSettings<'s> {
    /// Get read access to the `app` settings
    pub fn app(self) -> RwLockReadGuard<'s, AppSettings> {
        match self.inner.app.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}
