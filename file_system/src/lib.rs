use std::{
    fs, io,
    path::{Path, PathBuf},
};

use directories_next::ProjectDirs;

const SETTINGS_FILE_NAME: &str = "settings.json";
const LOG_DIR_NAME: &str = "logs";

/// Returns path to settings file located in the given data dir.
pub fn get_settings_path(data_dir: &Path) -> PathBuf {
    data_dir.join(SETTINGS_FILE_NAME)
}

/// Returns path to log directory located in the given data dir.
pub fn get_log_dir(data_dir: &Path) -> PathBuf {
    data_dir.join(LOG_DIR_NAME)
}

/// Resolves the per-user data dir for the application, or `override_dir` when given,
/// and makes sure it exists.
pub fn get_data_dir(override_dir: Option<&Path>) -> io::Result<PathBuf> {
    let data_dir = match override_dir {
        Some(dir) => dir.to_path_buf(),
        None => get_default_data_dir()?,
    };
    fs::create_dir_all(&data_dir)?;
    Ok(data_dir)
}

fn get_default_data_dir() -> io::Result<PathBuf> {
    ProjectDirs::from("com", "divebomb", "divebomb")
        .map(|dirs| dirs.data_local_dir().to_path_buf())
        .ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                "could not determine project directory",
            )
        })
}
