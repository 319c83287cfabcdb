use std::path::{Path, PathBuf};

/// Loads the `.env` file from the current directory (or the first of its ancestors that has one) into the process
/// environment. Variables that are already set are kept.
///
/// Returns the path of the loaded file, or `None` if there is no `.env` file, which is not an error.
pub fn load_dotenv_into_env() -> Result<Option<PathBuf>, dotenvy::Error> {
  match dotenvy::dotenv() {
    Ok(path) => Ok(Some(path)),
    Err(e) if e.not_found() => Ok(None),
    Err(e) => Err(e),
  }
}

/// Loads the `.env`-formatted file at `path` into the process environment. Variables that are already set are kept.
#[inline]
pub fn load_dotenv_file_into_env(path: impl AsRef<Path>) -> Result<(), dotenvy::Error> {
  dotenvy::from_path(path)
}

/// Gets environment variable `key`, or `None` if it is not set or not valid unicode.
#[inline]
pub fn var(key: &str) -> Option<String> {
  dotenvy::var(key).ok()
}
