use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Keymap {
    pub quit: String,
    pub create_note: String,
    pub delete_note: String,
    pub start_editing: String,
    pub save_note: String,
    pub search: String,
    pub clear_tag_filter: String,
    pub prev_tag_filter: String,
    pub next_tag_filter: String,
    pub select_up: String,
    pub select_down: String,
    pub activate: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Config {
    pub keymap: Keymap,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            keymap: Keymap {
                quit: "q".to_string(),
                create_note: "n".to_string(),
                delete_note: "d".to_string(),
                start_editing: "e".to_string(),
                save_note: "ctrl-s".to_string(),
                search: "/".to_string(),
                clear_tag_filter: "c".to_string(),
                prev_tag_filter: "left".to_string(),
                next_tag_filter: "right".to_string(),
                select_up: "up".to_string(),
                select_down: "down".to_string(),
                activate: "enter".to_string(),
            },
        }
    }
}

pub fn load_config(path: &PathBuf) -> Config {
    if !path.exists() {
        let config = Config::default();
        let toml = toml::to_string(&config).unwrap();
        fs::write(path, toml).expect("Failed to write default config");
        return config;
    }

    let content = fs::read_to_string(path).expect("Failed to read config file");
    toml::from_str(&content).expect("Failed to parse config file")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config_written_on_first_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let config = load_config(&path);
        assert!(path.exists());
        assert_eq!(config.keymap.quit, "q");
    }

    #[test]
    fn test_existing_config_is_loaded() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.keymap.quit = "x".to_string();
        fs::write(&path, toml::to_string(&config).unwrap()).unwrap();

        let loaded = load_config(&path);
        assert_eq!(loaded.keymap.quit, "x");
    }
}
