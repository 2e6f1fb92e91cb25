//! Directory resolution with a per-instance cache fallback.
//!
//! Directory settings that are left unset fall back to a subdirectory of a
//! per-instance cache directory, `<home>/.cache/<app>/<instance>` unless the
//! cache directory itself is given. Every resolved directory is created if
//! it does not exist.

use std::path::{Path, PathBuf};

use crate::env::Environment;

use super::descriptor::Descriptor;
use super::error::ConfigError;
use super::resolver::Resolver;

/// Facts about the host the launcher runs on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Host {
    home: Option<PathBuf>,
    superuser: bool,
}

impl Host {
    /// Creates a host description from explicit facts.
    #[must_use]
    pub const fn new(home: Option<PathBuf>, superuser: bool) -> Self {
        Self { home, superuser }
    }

    /// Describes the current process: its home directory and effective user.
    #[must_use]
    pub fn current() -> Self {
        Self {
            home: dirs::home_dir(),
            superuser: effective_user_is_root(),
        }
    }

    /// Home directory, if known.
    #[must_use]
    pub fn home(&self) -> Option<&Path> {
        self.home.as_deref()
    }

    /// Whether the effective user is the superuser.
    #[must_use]
    pub const fn is_superuser(&self) -> bool {
        self.superuser
    }

    /// Expands a leading `~` to the home directory.
    ///
    /// Paths without a leading `~`, or when the home directory is unknown,
    /// are returned as given.
    #[must_use]
    pub fn expand_tilde(&self, path: &str) -> PathBuf {
        let Some(home) = self.home() else {
            return PathBuf::from(path);
        };
        if path == "~" {
            return home.to_path_buf();
        }
        path.strip_prefix("~/")
            .map_or_else(|| PathBuf::from(path), |rest| home.join(rest))
    }
}

#[cfg(unix)]
fn effective_user_is_root() -> bool {
    nix::unistd::geteuid().is_root()
}

#[cfg(not(unix))]
const fn effective_user_is_root() -> bool {
    false
}

/// Variables that define the cache layout of one application.
#[derive(Debug, Clone, Copy)]
pub struct CacheLayout {
    /// Application directory name under `~/.cache`
    pub app: &'static str,
    /// Explicit cache directory variable
    pub cache_directory: Descriptor,
    /// Instance name variable, used to separate instances under the cache
    pub instance_name: Descriptor,
}

/// Resolves and creates directories.
#[derive(Debug)]
pub struct DirectoryResolver<'a, E> {
    resolver: &'a Resolver<E>,
    host: &'a Host,
    layout: CacheLayout,
}

impl<'a, E: Environment> DirectoryResolver<'a, E> {
    /// Creates a directory resolver.
    #[must_use]
    pub const fn new(resolver: &'a Resolver<E>, host: &'a Host, layout: CacheLayout) -> Self {
        Self {
            resolver,
            host,
            layout,
        }
    }

    /// Resolves the per-instance cache directory, creating it if needed.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::MissingPrerequisite`] if the instance name or home directory is unknown
    /// - [`ConfigError::PrivilegeError`] if it has to be derived while running as root
    /// - [`ConfigError::NotADirectory`] or [`ConfigError::CreateDirectory`] on filesystem problems
    pub fn cache_directory(&self) -> Result<PathBuf, ConfigError> {
        let path = match self.resolver.resolve(&self.layout.cache_directory)? {
            Some(dir) => self.host.expand_tilde(&dir),
            None => self.derived_cache_directory()?,
        };
        ensure_directory(&path)?;
        absolute(&path)
    }

    fn derived_cache_directory(&self) -> Result<PathBuf, ConfigError> {
        let instance = self
            .resolver
            .resolve(&self.layout.instance_name)?
            .ok_or_else(|| {
                ConfigError::missing(
                    "instance name",
                    "Set INSTANCE_NAME or CACHE_DIRECTORY",
                )
            })?;
        if self.host.is_superuser() {
            return Err(ConfigError::PrivilegeError {
                variable: self.layout.cache_directory.name,
            });
        }
        let home = self.host.home().ok_or_else(|| {
            ConfigError::missing("home directory", "Set CACHE_DIRECTORY explicitly")
        })?;
        Ok(home.join(".cache").join(self.layout.app).join(instance))
    }

    /// Resolves the directory named by `descriptor`, creating it if needed.
    ///
    /// When the variable is unset the directory is `<cache>/<fallback>`.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::PrivilegeError`] if it has to be derived while running as root
    /// - any error from [`cache_directory`](Self::cache_directory)
    /// - [`ConfigError::NotADirectory`] or [`ConfigError::CreateDirectory`] on filesystem problems
    pub fn directory(
        &self,
        descriptor: &Descriptor,
        fallback: &str,
    ) -> Result<PathBuf, ConfigError> {
        let path = match self.resolver.resolve(descriptor)? {
            Some(dir) => self.host.expand_tilde(&dir),
            None => {
                if self.host.is_superuser() {
                    return Err(ConfigError::PrivilegeError {
                        variable: descriptor.name,
                    });
                }
                self.cache_directory()?.join(fallback)
            }
        };
        ensure_directory(&path)?;
        absolute(&path)
    }
}

/// Creates `path` and its parents if missing.
///
/// # Errors
///
/// Returns [`ConfigError::NotADirectory`] if `path` exists but is not a
/// directory, or [`ConfigError::CreateDirectory`] if creation fails.
pub fn ensure_directory(path: &Path) -> Result<(), ConfigError> {
    if path.exists() {
        if path.is_dir() {
            return Ok(());
        }
        return Err(ConfigError::NotADirectory {
            path: path.to_path_buf(),
        });
    }

    tracing::info!("Creating directory [{}]", path.display());
    std::fs::create_dir_all(path).map_err(|source| ConfigError::CreateDirectory {
        path: path.to_path_buf(),
        source,
    })
}

fn absolute(path: &Path) -> Result<PathBuf, ConfigError> {
    std::path::absolute(path).map_err(|source| ConfigError::CreateDirectory {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
#[path = "directory_tests.rs"]
mod tests;
