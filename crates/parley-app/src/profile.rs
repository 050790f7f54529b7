use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use parley_config::Config;
use serde::{Deserialize, Serialize};

/// Per-user config root, `PARLEY_CONFIG_DIR` overrides the platform default
pub fn config_root() -> PathBuf {
    if let Ok(dir) = env::var("PARLEY_CONFIG_DIR") {
        return PathBuf::from(dir);
    }

    dirs::config_dir()
        .map(|dir| dir.join("parley"))
        .unwrap_or_else(|| PathBuf::from(".parley"))
}

pub fn profiles_dir() -> PathBuf {
    config_root().join("profiles")
}

/// Represents a user profile
#[derive(Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub value: Config,
}

/// Initialize user config folders and main profile if missing
pub fn init_user_config(profiles: &Path) -> anyhow::Result<()> {
    fs::create_dir_all(profiles)
        .with_context(|| format!("failed to create {}", profiles.display()))?;

    let main_profile = profiles.join("main.json");

    if !main_profile.exists() {
        let profile = Profile {
            name: "main".into(),
            value: Config::default(),
        };
        fs::write(&main_profile, serde_json::to_string_pretty(&profile)?)?;
        tracing::info!("Created main profile in {}", profiles.display());
    }

    Ok(())
}

/// Load a user profile by name, defaulting to main if name not found
pub fn load_user_profile(profiles: &Path, name: &str) -> anyhow::Result<Config> {
    let profile_file = profiles.join(format!("{name}.json"));

    if profile_file.exists() {
        read_profile(&profile_file)
    } else {
        tracing::warn!("Profile {name} not found, falling back to main profile or defaults");
        let main_file = profiles.join("main.json");
        if main_file.exists() {
            read_profile(&main_file)
        } else {
            Ok(Config::default())
        }
    }
}

/// Add a new profile cloned from main (or defaults if main missing)
pub fn add_profile_from_default(profiles: &Path, new_name: &str) -> anyhow::Result<PathBuf> {
    let default_config = load_user_profile(profiles, "main")?;
    let profile = Profile {
        name: new_name.into(),
        value: default_config,
    };
    let file = profiles.join(format!("{new_name}.json"));
    fs::write(&file, serde_json::to_string_pretty(&profile)?)?;
    tracing::info!("Created new profile: {new_name}");
    Ok(file)
}

/// Names of the profiles on disk, sorted
pub fn list_profiles(profiles: &Path) -> anyhow::Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(profiles)? {
        let path = entry?.path();
        if path.extension().is_some_and(|ext| ext == "json")
            && let Some(stem) = path.file_stem()
        {
            names.push(stem.to_string_lossy().into_owned());
        }
    }
    names.sort();
    Ok(names)
}

fn read_profile(path: &Path) -> anyhow::Result<Config> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read profile {}", path.display()))?;
    let profile: Profile = serde_json::from_str(&data)
        .with_context(|| format!("failed to parse profile {}", path.display()))?;
    Ok(profile.value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_creates_main_once() {
        let dir = TempDir::new().unwrap();
        let profiles = dir.path().join("profiles");

        init_user_config(&profiles).unwrap();
        let first = fs::read_to_string(profiles.join("main.json")).unwrap();
        init_user_config(&profiles).unwrap();
        let second = fs::read_to_string(profiles.join("main.json")).unwrap();

        assert_eq!(first, second);
        assert_eq!(list_profiles(&profiles).unwrap(), vec!["main"]);
    }

    #[test]
    fn test_unknown_profile_falls_back_to_main() {
        let dir = TempDir::new().unwrap();
        let profiles = dir.path().to_path_buf();
        let mut config = Config::default();
        config.locale = "pt-BR".to_string();
        let main = Profile {
            name: "main".into(),
            value: config,
        };
        fs::write(
            profiles.join("main.json"),
            serde_json::to_string(&main).unwrap(),
        )
        .unwrap();

        let loaded = load_user_profile(&profiles, "work").unwrap();
        assert_eq!(loaded.locale, "pt-BR");
    }

    #[test]
    fn test_add_profile_clones_main() {
        let dir = TempDir::new().unwrap();
        let profiles = dir.path().to_path_buf();
        init_user_config(&profiles).unwrap();

        let file = add_profile_from_default(&profiles, "work").unwrap();

        assert!(file.ends_with("work.json"));
        assert_eq!(list_profiles(&profiles).unwrap(), vec!["main", "work"]);
    }

    #[test]
    fn test_corrupt_profile_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("main.json"), "{").unwrap();

        assert!(load_user_profile(dir.path(), "main").is_err());
    }
}
