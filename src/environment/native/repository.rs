use super::super::types::ClientConfig;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{from_slice, to_string_pretty};
use std::path::PathBuf;

const CONFIG_PATH: &str = "config.json";
const SERVER_URL_ENV: &str = "UKELONN_SERVER_URL";

/// Persisted client settings, stored as json in the platform config folder
#[derive(Clone)]
pub struct Repository {
    config: ClientConfig,
}

impl Repository {
    pub fn new() -> Result<Self, String> {
        Self::with_directory(data_directory()?)
    }

    pub fn with_directory(directory: PathBuf) -> Result<Self, String> {
        let config: ClientConfig = read(&directory, CONFIG_PATH)?.unwrap_or_default();

        // Write the config back, so that a missing file shows up for editing
        write(&directory, CONFIG_PATH, &config)?;

        Ok(Self { config })
    }

    /// The stored config, with the server url overridden from the environment
    pub fn config(&self) -> Result<ClientConfig, String> {
        let mut config = self.config.clone();
        if let Ok(url) = std::env::var(SERVER_URL_ENV) {
            log::debug!("Using server url {url} from {SERVER_URL_ENV}");
            config.server_url = url;
        }
        Ok(config)
    }
}

fn read<T: DeserializeOwned>(directory: &std::path::Path, name: &str) -> Result<Option<T>, String> {
    let data_path = directory.join(name);
    if !data_path.exists() {
        return Ok(None);
    };
    let data = std::fs::read(&data_path)
        .map_err(|e| format!("Could not read {}: {e:?}", data_path.display()))?;
    let obj: T =
        from_slice(&data).map_err(|e| format!("Could not parse {}: {e:?}", data_path.display()))?;
    Ok(Some(obj))
}

fn write<T: Serialize>(directory: &std::path::Path, name: &str, value: &T) -> Result<(), String> {
    let data_path = directory.join(name);
    let data = to_string_pretty(&value).map_err(|e| format!("Could not parse value:{e:?}"))?;
    std::fs::write(&data_path, data)
        .map_err(|e| format!("Could not write to {}: {e:?}", data_path.display()))?;
    Ok(())
}

fn data_directory() -> Result<PathBuf, String> {
    use directories_next::ProjectDirs;
    let proj_dirs = ProjectDirs::from("no", "priv.bang", "ukelonn")
        .ok_or_else(|| "Couldn't find a folder to save data".to_string())?;
    let dirs = proj_dirs.config_dir().to_path_buf();
    if !dirs.exists() {
        std::fs::create_dir_all(&dirs)
            .map_err(|e| format!("Could not create directory {}: {e:?}", dirs.display()))?;
    }
    Ok(dirs)
}
