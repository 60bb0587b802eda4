//! Resource file resolution.
//!
//! Named resources such as `text/en-us/date_time.json` are searched for in a
//! fixed order: an absolute path is used as given, otherwise the user
//! override directory, the system directory and the bundled data directory
//! are tried in turn. The first existing file wins.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use bon::Builder;
use tracing::debug;

/// Data directory shipped with this crate.
pub const BUNDLED_DATA_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/res");

/// Default system-wide data directory.
pub const SYSTEM_DATA_DIR: &str = "/opt/lingo/res";

/// Directories searched for locale resources.
///
/// # Example
///
/// ```
/// use lingo::ResourcePaths;
///
/// let paths = ResourcePaths::builder()
///     .bundled_dir("/usr/share/lingo")
///     .build();
/// assert!(paths.user_dir().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
pub struct ResourcePaths {
    /// Per-user override directory, usually `~/.lingo`.
    #[builder(into)]
    user_dir: Option<PathBuf>,

    /// System install directory.
    #[builder(into)]
    system_dir: Option<PathBuf>,

    /// Data bundled with the library.
    #[builder(into, default = PathBuf::from(BUNDLED_DATA_DIR))]
    bundled_dir: PathBuf,
}

impl Default for ResourcePaths {
    /// User directory from `HOME`, the standard system directory and the
    /// bundled data.
    fn default() -> Self {
        ResourcePaths::builder()
            .maybe_user_dir(env::var_os("HOME").map(|home| Path::new(&home).join(".lingo")))
            .system_dir(SYSTEM_DATA_DIR)
            .build()
    }
}

impl ResourcePaths {
    pub fn user_dir(&self) -> Option<&Path> {
        self.user_dir.as_deref()
    }

    pub fn system_dir(&self) -> Option<&Path> {
        self.system_dir.as_deref()
    }

    pub fn bundled_dir(&self) -> &Path {
        &self.bundled_dir
    }

    /// Candidate locations for `name`, in search order.
    pub fn candidates(&self, name: impl AsRef<Path>) -> Vec<PathBuf> {
        let name = name.as_ref();
        if name.is_absolute() {
            return vec![name.to_path_buf()];
        }
        self.user_dir
            .iter()
            .chain(self.system_dir.iter())
            .chain([&self.bundled_dir])
            .map(|dir| dir.join(name))
            .collect()
    }

    /// Find the first existing file for `name`.
    pub fn resolve(&self, name: impl AsRef<Path>) -> Option<PathBuf> {
        let found = self
            .candidates(&name)
            .into_iter()
            .find(|candidate| candidate.is_file());
        debug!(resource = %name.as_ref().display(), found = ?found, "resolved resource");
        found
    }

    /// Read the localized word stored in `text/<language>/<name>.word`.
    ///
    /// The word is the first non-empty line not starting with `#`. Returns
    /// `None` when no file exists or the file holds no word.
    pub fn read_word(&self, language: &str, name: &str) -> Option<String> {
        let path = self.resolve(Path::new("text").join(language).join(format!("{name}.word")))?;
        let content = fs::read_to_string(&path).ok()?;
        content
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
    }
}
