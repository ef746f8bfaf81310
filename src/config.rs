use crate::error::{FetchError, Result};
use dotenv::dotenv;
use std::env;
use std::fs;
use std::path::PathBuf;

const DEFAULT_API_KEY_FILE: &str = "pokemontcg_api_key.txt";
const DEFAULT_DATA_DIR: &str = "./data";
const DEFAULT_CLIENT_PUBLIC_DIR: &str = "./../client/public";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub data_dir: PathBuf,
    pub client_public_dir: PathBuf,
    /// Extra clause prepended to the provider query, e.g. `set.id:sv1`.
    pub query_filter: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        dotenv().ok();
        Ok(Config {
            api_key: load_api_key()?,
            data_dir: env_or("CARD_DATA_DIR", DEFAULT_DATA_DIR).into(),
            client_public_dir: env_or("CLIENT_PUBLIC_DIR", DEFAULT_CLIENT_PUBLIC_DIR).into(),
            query_filter: env::var("CARD_QUERY_FILTER")
                .ok()
                .map(|q| q.trim().to_string())
                .filter(|q| !q.is_empty()),
        })
    }

    pub fn card_images_dir(&self) -> PathBuf {
        self.data_dir.join("card-images")
    }

    pub fn sprites_dir(&self) -> PathBuf {
        self.data_dir.join("sprites")
    }

    pub fn client_card_images_dir(&self) -> PathBuf {
        self.client_public_dir.join("cards")
    }

    pub fn client_sprites_dir(&self) -> PathBuf {
        self.client_public_dir.join("sprites")
    }

    pub fn database_path(&self) -> PathBuf {
        self.client_public_dir.join("card_database.json")
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn load_api_key() -> Result<String> {
    if let Ok(key) = env::var("POKEMONTCG_API_KEY") {
        let key = key.trim().to_string();
        if !key.is_empty() {
            return Ok(key);
        }
    }

    let key_file = env_or("POKEMONTCG_API_KEY_FILE", DEFAULT_API_KEY_FILE);
    let key = fs::read_to_string(&key_file).map_err(|e| {
        FetchError::Config(format!(
            "POKEMONTCG_API_KEY is not set and '{}' could not be read: {}",
            key_file, e
        ))
    })?;
    let key = key.trim().to_string();
    if key.is_empty() {
        return Err(FetchError::config("API key file is empty"));
    }
    Ok(key)
}
