use crate::domain::now_playing::{Track, TrackSource};
use anyhow::{anyhow, bail, Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://api.intron014.com/intr0n/latest-song";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Deserialize)]
struct LatestSong {
    track: Option<RawTrack>,
}

#[derive(Debug, Deserialize)]
struct RawTrack {
    name: Option<String>,
    artist: Option<RawArtist>,
}

#[derive(Debug, Deserialize)]
struct RawArtist {
    #[serde(rename = "#text")]
    text: Option<String>,
}

/// Extracts the track from a `latest-song` response body.
pub fn parse_latest_song(body: &str) -> Result<Track> {
    let song: LatestSong = serde_json::from_str(body).context("Malformed song response")?;

    let track = song.track.ok_or_else(|| anyhow!("Invalid track data"))?;
    let name = track.name.filter(|n| !n.is_empty());
    let artist = track.artist.and_then(|a| a.text).filter(|a| !a.is_empty());

    match (name, artist) {
        (Some(name), Some(artist)) => Ok(Track { name, artist }),
        _ => bail!("Invalid track data"),
    }
}

/// Polls the personal API for the last scrobbled track.
pub struct HttpTrackSource {
    endpoint: String,
    http: reqwest::Client,
}

impl HttpTrackSource {
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            endpoint: endpoint.into(),
            http,
        })
    }
}

#[async_trait]
impl TrackSource for HttpTrackSource {
    async fn latest_track(&self) -> Result<Track> {
        let response = self
            .http
            .get(&self.endpoint)
            .send()
            .await
            .with_context(|| format!("Request to {} failed", self.endpoint))?;

        let status = response.status();
        if !status.is_success() {
            bail!("HTTP error! status: {}", status.as_u16());
        }

        let body = response.text().await.context("Failed to read song response")?;
        parse_latest_song(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_body() {
        let body = r##"{"track":{"name":"Song","artist":{"#text":"Band","mbid":""},"album":{}}}"##;
        let track = parse_latest_song(body).unwrap();
        assert_eq!(
            track,
            Track {
                name: "Song".to_string(),
                artist: "Band".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_missing_artist_text() {
        let body = r#"{"track":{"name":"Song","artist":{}}}"#;
        let err = parse_latest_song(body).unwrap_err();
        assert_eq!(err.to_string(), "Invalid track data");
    }

    #[test]
    fn test_parse_missing_track() {
        let err = parse_latest_song("{}").unwrap_err();
        assert_eq!(err.to_string(), "Invalid track data");
    }

    #[test]
    fn test_parse_empty_name() {
        let body = r##"{"track":{"name":"","artist":{"#text":"Band"}}}"##;
        assert!(parse_latest_song(body).is_err());
    }

    #[test]
    fn test_parse_garbage() {
        let err = parse_latest_song("<html>").unwrap_err();
        assert!(err.to_string().contains("Malformed song response"));
    }
}
