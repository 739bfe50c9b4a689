use config::{Config, ConfigError, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration structure for hexhelp
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HexhelpConfig {
    /// Interactive shell configuration
    pub tui: TuiConfig,
}

/// Interactive shell settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TuiConfig {
    /// Value shown before anything is typed (default: 1)
    pub initial_value: i64,
    /// Event poll interval in milliseconds (default: 100)
    pub poll_interval_ms: u64,
    /// Whether to write a log file to the cache directory (default: false)
    pub log: bool,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            initial_value: 1,
            poll_interval_ms: 100,
            log: false,
        }
    }
}

impl HexhelpConfig {
    /// Load configuration from various sources in order of priority:
    /// 1. Environment variables (`HEXHELP_TUI_INITIAL_VALUE`, ...)
    /// 2. User config file (~/.config/hexhelp/config.toml)
    /// 3. System config file (/etc/hexhelp/config.toml)
    /// 4. Default values
    pub fn load() -> Result<Self, ConfigError> {
        let files = [Self::get_system_config_path(), Self::get_user_config_path()];
        Self::load_from(files.iter().flatten().map(PathBuf::as_path))
    }

    /// Load defaults, then each existing file in order, then the environment
    pub fn load_from<'a>(
        files: impl IntoIterator<Item = &'a Path>,
    ) -> Result<Self, ConfigError> {
        let mut config_builder =
            Config::builder().add_source(Config::try_from(&Self::default())?);

        for path in files {
            if path.exists() {
                config_builder =
                    config_builder.add_source(File::from(path.to_path_buf()).required(false));
            }
        }

        // Prefix separator is "_", keys are nested with "__" so that
        // HEXHELP_TUI__INITIAL_VALUE maps to tui.initial_value
        config_builder = config_builder.add_source(
            config::Environment::with_prefix("HEXHELP")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        config_builder.build()?.try_deserialize()
    }

    /// Get the path to the user configuration file
    /// Returns: ~/.config/hexhelp/config.toml (on Linux)
    ///          %APPDATA%/hexhelp/config.toml (on Windows)
    #[must_use]
    pub fn get_user_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "hexhelp")
            .map(|proj_dirs| proj_dirs.config_dir().join("config.toml"))
    }

    /// Get the path to the system configuration file
    #[must_use]
    pub fn get_system_config_path() -> Option<PathBuf> {
        #[cfg(unix)]
        {
            Some(PathBuf::from("/etc/hexhelp/config.toml"))
        }

        #[cfg(windows)]
        {
            std::env::var("PROGRAMDATA").ok().map(|program_data| {
                PathBuf::from(program_data)
                    .join("hexhelp")
                    .join("config.toml")
            })
        }

        #[cfg(not(any(unix, windows)))]
        {
            None
        }
    }

    /// Get the path of the interactive shell log file
    #[must_use]
    pub fn get_log_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "hexhelp")
            .map(|proj_dirs| proj_dirs.cache_dir().join("hexhelp.log"))
    }

    /// Write the default configuration to `path`, creating parent directories
    pub fn write_default_config(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let toml_content = toml::to_string_pretty(&Self::default())?;
        std::fs::write(path, toml_content)?;
        Ok(())
    }

    /// Create a default configuration file at the user config location
    pub fn create_default_config_file() -> Result<PathBuf, Box<dyn std::error::Error>> {
        let config_path =
            Self::get_user_config_path().ok_or("Could not determine user config directory")?;
        Self::write_default_config(&config_path)?;
        Ok(config_path)
    }

    /// Print information about config file locations
    pub fn print_config_info() {
        println!("hexhelp configuration");
        println!("=====================");

        if let Some(user_path) = Self::get_user_config_path() {
            println!("User config file: {}", user_path.display());
            if user_path.exists() {
                println!("  Status: ✓ Found");
            } else {
                println!("  Status: ✗ Not found (will use defaults)");
            }
        }

        if let Some(system_path) = Self::get_system_config_path() {
            println!("System config file: {}", system_path.display());
            if system_path.exists() {
                println!("  Status: ✓ Found");
            } else {
                println!("  Status: ✗ Not found");
            }
        }

        if let Some(log_path) = Self::get_log_path() {
            println!("Log file (when tui.log = true): {}", log_path.display());
        }

        println!("\nEnvironment variables:");
        println!("  HEXHELP_TUI__INITIAL_VALUE");
        println!("  HEXHELP_TUI__POLL_INTERVAL_MS");
        println!("  HEXHELP_TUI__LOG");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use std::sync::Mutex;

    // Loading reads HEXHELP_* variables, so tests that load must not overlap
    // with the test that sets one.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_default_config() {
        let config = HexhelpConfig::default();
        assert_eq!(config.tui.initial_value, 1);
        assert_eq!(config.tui.poll_interval_ms, 100);
        assert!(!config.tui.log);
    }

    #[test]
    fn test_config_serialization() {
        let config = HexhelpConfig::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: HexhelpConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.tui.initial_value, config.tui.initial_value);
        assert_eq!(parsed.tui.poll_interval_ms, config.tui.poll_interval_ms);
    }

    #[test]
    fn test_load_from_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[tui]\ninitial_value = -42\n").unwrap();

        let _guard = ENV_LOCK.lock().unwrap();
        let config = HexhelpConfig::load_from([path.as_path()]).unwrap();
        assert_eq!(config.tui.initial_value, -42);
        assert_eq!(config.tui.poll_interval_ms, 100);
    }

    #[test]
    fn test_missing_files_are_skipped() {
        let _guard = ENV_LOCK.lock().unwrap();
        let config = HexhelpConfig::load_from([Path::new("/nonexistent/hexhelp.toml")]).unwrap();
        assert_eq!(config.tui.initial_value, 1);
    }

    #[test]
    fn test_write_default_config_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        HexhelpConfig::write_default_config(&path).unwrap();

        let _guard = ENV_LOCK.lock().unwrap();
        let config = HexhelpConfig::load_from([path.as_path()]).unwrap();
        assert_eq!(config.tui.initial_value, 1);
        assert!(!config.tui.log);
    }

    #[test]
    fn test_environment_overrides_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[tui]\ninitial_value = 5\nlog = true\n").unwrap();

        let _guard = ENV_LOCK.lock().unwrap();
        // SAFETY: every test that reads HEXHELP_* holds ENV_LOCK
        unsafe { std::env::set_var("HEXHELP_TUI__INITIAL_VALUE", "-42") };
        let from_env = HexhelpConfig::load_from(std::iter::empty::<&Path>());
        let over_file = HexhelpConfig::load_from([path.as_path()]);
        unsafe { std::env::remove_var("HEXHELP_TUI__INITIAL_VALUE") };

        assert_eq!(from_env.unwrap().tui.initial_value, -42);
        let over_file = over_file.unwrap();
        assert_eq!(over_file.tui.initial_value, -42);
        assert!(over_file.tui.log);
    }
}
