use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub storage: String,
    #[serde(default = "default_mode")]
    pub default_mode: String,
    #[serde(default = "default_confirm_delete")]
    pub confirm_delete: bool,
    #[serde(default)]
    pub show_empty_groups: bool,
}

fn default_mode() -> String {
    "name".to_string()
}
fn default_confirm_delete() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        let storage_path = Self::storage_file();
        Self {
            storage: storage_path.to_string_lossy().to_string(),
            default_mode: default_mode(),
            confirm_delete: default_confirm_delete(),
            show_empty_groups: false,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rolo")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rolo")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rolo.conf")
    }

    /// Return the full path of the storage file
    pub fn storage_file() -> PathBuf {
        Self::config_dir().join("rolo.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path).expect("❌ Failed to read configuration file");
            serde_yaml::from_str(&content).expect("❌ Failed to parse configuration file")
        } else {
            Config::default()
        }
    }

    /// Initialize configuration and storage files
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // Storage path: user provided or default
        let storage_path = if let Some(name) = custom_name {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::storage_file()
        };

        let config = Config {
            storage: storage_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config).unwrap();
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        // Create empty storage file if not exists
        if !storage_path.exists() {
            fs::File::create(&storage_path)?;
        }

        println!("✅ Storage:     {:?}", storage_path);

        Ok(())
    }
}
