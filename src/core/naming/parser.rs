use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use super::types::ExtractedInfo;

// Each field scans the whole raw title on its own; the leftmost match wins.
static GROUP_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]+)\]|\(([^)]+)\)|-(\w+)$").unwrap());
// The marker after the name is consumed rather than asserted; the lazy capture still stops before it.
static SHOW_NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[[^\]]+\]\s*(.+?)\s+(?:S\d{1,2}|R\d{1,2}|Arc|Season|E\d+-\d+|\+)").unwrap()
});
static SEASON_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?P<prefix>[SR])(?P<num>[0-9]{1,2})|season (?P<season>[0-9]{1,2})|Arc .+?")
        .unwrap()
});
static RESOLUTION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"1080p|1920x1080|720p|1280x720|576p|480p|640x480|2160p|3480x2160").unwrap()
});
static SOURCE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)BD(?:-rip)?|BluRay|WEB(?:-rip)?|DVD(?:-rip)?").unwrap());
static AUDIO_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)FLAC|OPUS|AAC|AC3|EAC3").unwrap());
static VIDEO_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)x264|x265|HEVC|AVC").unwrap());
static VERSION_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"v\d").unwrap());

fn find_str(re: &Regex, s: &str) -> Option<String> {
    re.find(s).map(|m| m.as_str().to_string())
}

fn extract_release_group(s: &str) -> Option<String> {
    let caps = GROUP_RE.captures(s)?;
    caps.get(1)
        .or_else(|| caps.get(2))
        .or_else(|| caps.get(3))
        .map(|m| m.as_str().to_string())
}

fn extract_show_name(s: &str) -> Option<String> {
    SHOW_NAME_RE
        .captures(s)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

fn pad_season(prefix: &str, num: &str) -> String {
    let n = num.chars().filter_map(|c| c.to_digit(10)).fold(0, |acc, d| acc * 10 + d);
    format!("{}{:02}", prefix.to_ascii_uppercase(), n)
}

fn extract_season(s: &str) -> Option<String> {
    let caps = SEASON_RE.captures(s)?;
    if let (Some(prefix), Some(num)) = (caps.name("prefix"), caps.name("num")) {
        return Some(pad_season(prefix.as_str(), num.as_str()));
    }
    if let Some(num) = caps.name("season") {
        return Some(pad_season("S", num.as_str()));
    }
    // Arc form is kept as matched
    caps.get(0).map(|m| m.as_str().to_string())
}

fn canonicalize_source(s: &str) -> String {
    if s.to_ascii_uppercase().contains("BD") || s.eq_ignore_ascii_case("bluray") {
        "BluRay".to_string()
    } else {
        s.to_string()
    }
}

/// Salvage release metadata from a raw title. Never fails: anything that does not
/// match is left as `None`. Hi10 and dual audio are never guessed here.
pub fn extract_info(raw_title: &str) -> ExtractedInfo {
    let info = ExtractedInfo {
        release_group: extract_release_group(raw_title),
        show_name: extract_show_name(raw_title),
        season: extract_season(raw_title),
        resolution: find_str(&RESOLUTION_RE, raw_title),
        source: find_str(&SOURCE_RE, raw_title).map(|m| canonicalize_source(&m)),
        audio: find_str(&AUDIO_RE, raw_title),
        video: find_str(&VIDEO_RE, raw_title),
        hi10: None,
        dual_audio: None,
        version: find_str(&VERSION_RE, raw_title),
        episode_range: None,
    };
    debug!("Extracted from '{}': {:?}", raw_title, info);
    info
}
