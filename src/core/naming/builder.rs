use super::types::ExtractedInfo;

pub const DEFAULT_GROUP_TAG: &str = "SZNJD";

fn keep(part: &Option<String>) -> Option<&str> {
    // A literal "None" typed during correction counts as missing
    part.as_deref().filter(|p| !p.is_empty() && *p != "None")
}

fn assemble(info: &ExtractedInfo) -> String {
    [
        &info.show_name,
        &info.season,
        &info.episode_range,
        &info.resolution,
        &info.source,
        &info.audio,
        &info.video,
        &info.hi10,
        &info.dual_audio,
        &info.version,
    ]
    .into_iter()
    .filter_map(keep)
    .collect::<Vec<_>>()
    .join(" ")
}

/// Build the canonical override title, e.g. `Show S01 1080p BluRay FLAC x264 SZNJD-Group`.
/// The release group suffix is only added when a group is known.
pub fn format_title(info: &ExtractedInfo, group_tag: &str) -> String {
    let mut name = assemble(info);

    if let Some(group) = info.release_group.as_deref().filter(|g| !g.is_empty()) {
        name.push(' ');
        name.push_str(group_tag);
        name.push('-');
        name.push_str(&group.replace(' ', "-"));
    }

    name
}
