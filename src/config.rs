use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Represents the complete configuration for auto-release.
///
/// Contains the integration remote/branch, version file locations, and the
/// test runner invocation.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ReleaseConfig {
    #[serde(default = "default_remote")]
    pub remote: String,

    #[serde(default = "default_branch")]
    pub branch: String,

    #[serde(default)]
    pub files: FilesConfig,

    #[serde(default)]
    pub tests: TestsConfig,
}

fn default_remote() -> String {
    "origin".to_string()
}

fn default_branch() -> String {
    "main".to_string()
}

/// Locations of the two version-bearing files in the released project.
///
/// `metadata` is where the current version is read from (a line matching
/// `version = "X.Y.Z"`); `version_file` is where the new version is written
/// (the `__version__ = "..."` assignment line).
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct FilesConfig {
    #[serde(default = "default_metadata_file")]
    pub metadata: String,

    #[serde(default = "default_version_file")]
    pub version_file: String,
}

fn default_metadata_file() -> String {
    "pyproject.toml".to_string()
}

fn default_version_file() -> String {
    "src/__about__.py".to_string()
}

impl Default for FilesConfig {
    fn default() -> Self {
        FilesConfig {
            metadata: default_metadata_file(),
            version_file: default_version_file(),
        }
    }
}

/// Configuration for the pre-release test run.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TestsConfig {
    #[serde(default = "default_test_runner")]
    pub runner: Vec<String>,

    #[serde(default = "default_test_dir")]
    pub dir: String,
}

fn default_test_runner() -> Vec<String> {
    vec![
        "python".to_string(),
        "-m".to_string(),
        "pytest".to_string(),
    ]
}

fn default_test_dir() -> String {
    "tests".to_string()
}

impl Default for TestsConfig {
    fn default() -> Self {
        TestsConfig {
            runner: default_test_runner(),
            dir: default_test_dir(),
        }
    }
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        ReleaseConfig {
            remote: default_remote(),
            branch: default_branch(),
            files: FilesConfig::default(),
            tests: TestsConfig::default(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `release.toml` in current directory
/// 3. `~/.config/.release.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(ReleaseConfig)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<ReleaseConfig, Box<dyn std::error::Error>> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./release.toml").exists() {
        fs::read_to_string("./release.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".release.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(ReleaseConfig::default());
        }
    } else {
        return Ok(ReleaseConfig::default());
    };

    let config: ReleaseConfig = toml::from_str(&config_str)?;
    Ok(config)
}
