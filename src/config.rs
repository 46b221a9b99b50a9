//! Configuration management for the collaboration path finder.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and `.env` files. Credentials are required; API
//! endpoint URLs carry the public Spotify defaults and only need to be set
//! when pointing the tool at a mock server.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. `.env` file in the working directory
//! 4. Application defaults (endpoint URLs only)

use std::{env, path::PathBuf};

/// Loads environment variables from a `.env` file.
///
/// Looks for `.env` in the platform-specific local data directory under
/// `spotipath/.env` first and falls back to the working directory. The data
/// directory is created on first run so users have a place to drop the file.
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/spotipath/.env`
/// - macOS: `~/Library/Application Support/spotipath/.env`
/// - Windows: `%LOCALAPPDATA%/spotipath/.env`
///
/// # Errors
///
/// Returns an error string if the parent directory cannot be created. A
/// missing `.env` file is not an error; credentials may come from the
/// process environment directly.
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spotipath/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if dotenv::from_path(&path).is_err() {
        let _ = dotenv::dotenv();
    }
    Ok(())
}

/// Returns the Spotify API client ID.
///
/// # Panics
///
/// Panics if the `SPOTIFY_CLIENT_ID` environment variable is not set.
pub fn spotify_client_id() -> String {
    env::var("SPOTIFY_CLIENT_ID").expect("SPOTIFY_CLIENT_ID must be set")
}

/// Returns the Spotify API client secret.
///
/// # Panics
///
/// Panics if the `SPOTIFY_CLIENT_SECRET` environment variable is not set.
///
/// # Security Note
///
/// The client secret should be kept confidential and never exposed in logs
/// or version control.
pub fn spotify_client_secret() -> String {
    env::var("SPOTIFY_CLIENT_SECRET").expect("SPOTIFY_CLIENT_SECRET must be set")
}

/// Returns the Spotify Web API base URL.
///
/// Reads the `SPOTIFY_API_URL` environment variable and falls back to the
/// public endpoint when unset.
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL").unwrap_or_else(|_| "https://api.spotify.com/v1".to_string())
}

/// Returns the Spotify token exchange URL used by the client credentials flow.
///
/// Reads the `SPOTIFY_API_TOKEN_URL` environment variable and falls back to
/// the public endpoint when unset.
pub fn spotify_apitoken_url() -> String {
    env::var("SPOTIFY_API_TOKEN_URL")
        .unwrap_or_else(|_| "https://accounts.spotify.com/api/token".to_string())
}
