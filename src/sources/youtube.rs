//! YouTube transcript fetching.
//!
//! The watch page embeds the caption track list as JSON; each track's
//! `baseUrl` serves the captions as `<text>` segments.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use reqwest::header::ACCEPT_LANGUAGE;
use reqwest::Client;
use serde::Deserialize;

use crate::error::SourceError;
use crate::generate::{prompts, Generator};

const WATCH_BASE: &str = "https://www.youtube.com";
const CAPTION_TRACKS_KEY: &str = "\"captionTracks\":";

static VIDEO_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:v=|/)([0-9A-Za-z_-]{11})").expect("valid regex"));
static TEXT_SEGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<text[^>]*>(.*?)</text>").expect("valid regex"));
static ENTITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&(#[xX][0-9a-fA-F]+|#[0-9]+|[a-zA-Z]+);").expect("valid regex"));

/// The 11-character video id in a watch, share or embed URL.
pub fn extract_video_id(url: &str) -> Option<&str> {
    VIDEO_ID
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CaptionTrack {
    base_url: String,
    language_code: String,
    #[serde(default)]
    kind: Option<String>,
}

impl CaptionTrack {
    fn is_generated(&self) -> bool {
        self.kind.as_deref() == Some("asr")
    }
}

pub struct TranscriptFetcher {
    client: Client,
    watch_base: String,
}

impl Default for TranscriptFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl TranscriptFetcher {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            watch_base: WATCH_BASE.to_string(),
        }
    }

    /// English transcript of the video, or the Hindi one translated by
    /// `translator` when no English track exists.
    pub async fn fetch<G: Generator>(&self, url: &str, translator: &G) -> Result<String, SourceError> {
        let video_id = extract_video_id(url)
            .ok_or_else(|| SourceError::InvalidYoutubeUrl(url.to_string()))?;

        let html = self
            .client
            .get(format!("{}/watch?v={}", self.watch_base, video_id))
            .header(ACCEPT_LANGUAGE, "en-US")
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let tracks = caption_tracks(&html).ok_or(SourceError::TranscriptsDisabled)?;
        tracing::info!(video_id, tracks = tracks.len(), "found caption tracks");

        if let Some(track) = choose_track(&tracks, "en") {
            return self.download(track).await;
        }

        let track = choose_track(&tracks, "hi").ok_or(SourceError::NoTranscript)?;
        let hindi = self.download(track).await?;
        tracing::info!(video_id, "translating hindi transcript");
        let english = translator.generate(&prompts::translate_hindi(&hindi)).await?;
        Ok(english)
    }

    async fn download(&self, track: &CaptionTrack) -> Result<String, SourceError> {
        let xml = self
            .client
            .get(&track.base_url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        Ok(transcript_text(&xml))
    }
}

fn caption_tracks(html: &str) -> Option<Vec<CaptionTrack>> {
    let start = html.find(CAPTION_TRACKS_KEY)? + CAPTION_TRACKS_KEY.len();
    serde_json::Deserializer::from_str(&html[start..])
        .into_iter::<Vec<CaptionTrack>>()
        .next()?
        .ok()
        .filter(|tracks| !tracks.is_empty())
}

/// Manually created tracks win over generated ones.
fn choose_track<'a>(tracks: &'a [CaptionTrack], language: &str) -> Option<&'a CaptionTrack> {
    let mut matching = tracks.iter().filter(|t| t.language_code == language);
    let first = matching.next()?;
    if !first.is_generated() {
        return Some(first);
    }
    matching.find(|t| !t.is_generated()).or(Some(first))
}

/// Caption segments joined with single spaces.
fn transcript_text(xml: &str) -> String {
    TEXT_SEGMENT
        .captures_iter(xml)
        .filter_map(|caps| caps.get(1))
        // Segment bodies are HTML escaped inside XML, so decode twice.
        .map(|m| decode_entities(&decode_entities(m.as_str())))
        .map(|segment| segment.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn decode_entities(text: &str) -> String {
    ENTITY
        .replace_all(text, |caps: &Captures| {
            let entity = &caps[1];
            let decoded = match entity {
                "amp" => Some('&'),
                "lt" => Some('<'),
                "gt" => Some('>'),
                "quot" => Some('"'),
                "apos" => Some('\''),
                "nbsp" => Some(' '),
                _ => numeric_entity(entity),
            };
            decoded.map_or_else(|| caps[0].to_string(), String::from)
        })
        .into_owned()
}

fn numeric_entity(entity: &str) -> Option<char> {
    let digits = entity.strip_prefix('#')?;
    let code = match digits.strip_prefix(['x', 'X']) {
        Some(hex) => u32::from_str_radix(hex, 16).ok()?,
        None => digits.parse().ok()?,
    };
    char::from_u32(code)
}
