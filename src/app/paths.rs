// SPDX-License-Identifier: MPL-2.0
//! Directory resolution for settings and runtime assets.
//!
//! # Resolution Order
//!
//! Both directories are resolved in the same priority order:
//! 1. **Explicit override** - parameter to `_with_override()` functions (for tests)
//! 2. **CLI arguments** (`--config-dir`, `--assets-dir`) - set via [`init_cli_overrides`]
//! 3. **Environment variables** (`PORTFOLIO_CONFIG_DIR`, `PORTFOLIO_ASSETS_DIR`)
//! 4. **Default** - platform config dir via `dirs`, `./assets` for assets

use std::path::{Component, Path, PathBuf};
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "Portfolio";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "PORTFOLIO_CONFIG_DIR";

/// Environment variable to override the assets directory.
pub const ENV_ASSETS_DIR: &str = "PORTFOLIO_ASSETS_DIR";

/// Assets directory used when nothing else is configured, relative to the
/// working directory.
const DEFAULT_ASSETS_DIR: &str = "assets";

static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();
static CLI_ASSETS_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the `--config-dir` and `--assets-dir` arguments.
///
/// Only the first call has an effect.
pub fn init_cli_overrides(config_dir: Option<String>, assets_dir: Option<String>) {
    if CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err()
        || CLI_ASSETS_DIR.set(assets_dir.map(PathBuf::from)).is_err()
    {
        tracing::warn!("CLI path overrides already initialized");
    }
}

fn env_dir(name: &str) -> Option<PathBuf> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Returns the directory holding `settings.toml`.
///
/// Platform defaults:
/// - Linux: `~/.config/Portfolio/`
/// - macOS: `~/Library/Application Support/Portfolio/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\Portfolio\`
///
/// `override_path` wins over the CLI flag and `PORTFOLIO_CONFIG_DIR`.
/// Returns `None` if the config directory cannot be determined.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(path) = CLI_CONFIG_DIR.get().and_then(Clone::clone) {
        return Some(path);
    }

    if let Some(path) = env_dir(ENV_CONFIG_DIR) {
        return Some(path);
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Returns the directory profile icons are loaded from.
pub fn get_assets_dir() -> PathBuf {
    get_assets_dir_with_override(None)
}

pub fn get_assets_dir_with_override(override_path: Option<PathBuf>) -> PathBuf {
    override_path
        .or_else(|| CLI_ASSETS_DIR.get().and_then(Clone::clone))
        .or_else(|| env_dir(ENV_ASSETS_DIR))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_ASSETS_DIR))
}

/// Resolves `relative` inside `assets_dir`.
///
/// Returns `None` when the file does not exist or when `relative` would
/// escape the assets directory.
pub fn resolve_asset(assets_dir: &Path, relative: &str) -> Option<PathBuf> {
    let relative = Path::new(relative);
    if !relative
        .components()
        .all(|component| matches!(component, Component::Normal(_)))
    {
        tracing::debug!(path = %relative.display(), "rejecting asset path");
        return None;
    }

    let path = assets_dir.join(relative);
    if path.is_file() {
        Some(path)
    } else {
        tracing::debug!(path = %path.display(), "asset not found");
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use tempfile::tempdir;

    // Mutex to prevent parallel tests from interfering with each other's env vars
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn app_config_dir_contains_app_name() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_CONFIG_DIR);

        if let Some(path) = get_app_config_dir_with_override(None) {
            assert!(
                path.to_string_lossy().contains(APP_NAME),
                "App config dir should contain app name"
            );
        }
    }

    #[test]
    fn override_path_takes_precedence_for_config_dir() {
        let override_path = PathBuf::from("/custom/config/path");
        let result = get_app_config_dir_with_override(Some(override_path.clone()));
        assert_eq!(result, Some(override_path));
    }

    #[test]
    fn env_var_overrides_default_config_dir() {
        let _lock = ENV_MUTEX.lock().unwrap();
        let test_path = "/test/config/dir";
        std::env::set_var(ENV_CONFIG_DIR, test_path);

        let result = get_app_config_dir_with_override(None);
        assert_eq!(result, Some(PathBuf::from(test_path)));

        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn assets_dir_defaults_to_local_assets() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_ASSETS_DIR);

        assert_eq!(get_assets_dir(), PathBuf::from("assets"));
    }

    #[test]
    fn empty_env_var_uses_default_assets_dir() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_ASSETS_DIR, "");

        assert_eq!(get_assets_dir(), PathBuf::from("assets"));

        std::env::remove_var(ENV_ASSETS_DIR);
    }

    #[test]
    fn env_var_overrides_default_assets_dir() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_ASSETS_DIR, "/srv/portfolio");

        assert_eq!(get_assets_dir(), PathBuf::from("/srv/portfolio"));

        std::env::remove_var(ENV_ASSETS_DIR);
    }

    #[test]
    fn override_path_takes_precedence_over_env_var() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_ASSETS_DIR, "/env/path");

        let override_path = PathBuf::from("/override/path");
        assert_eq!(
            get_assets_dir_with_override(Some(override_path.clone())),
            override_path
        );

        std::env::remove_var(ENV_ASSETS_DIR);
    }

    #[test]
    fn existing_asset_resolves() {
        let dir = tempdir().expect("temp dir");
        std::fs::create_dir(dir.path().join("icons")).expect("icons dir");
        std::fs::write(dir.path().join("icons/github.png"), b"png").expect("write icon");

        let resolved = resolve_asset(dir.path(), "icons/github.png");
        assert_eq!(resolved, Some(dir.path().join("icons/github.png")));
    }

    #[test]
    fn missing_asset_is_none() {
        let dir = tempdir().expect("temp dir");
        assert_eq!(resolve_asset(dir.path(), "icons/linkedin.png"), None);
    }

    #[test]
    fn escaping_paths_are_rejected() {
        let dir = tempdir().expect("temp dir");
        std::fs::write(dir.path().join("secret"), b"x").expect("write file");
        let nested = dir.path().join("assets");
        std::fs::create_dir(&nested).expect("assets dir");

        assert_eq!(resolve_asset(&nested, "../secret"), None);
        assert_eq!(resolve_asset(&nested, "/etc/hostname"), None);
    }
}
