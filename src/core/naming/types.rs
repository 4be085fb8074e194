pub const HI10_TAG: &str = "Hi10p";
pub const DUAL_AUDIO_TAG: &str = "Dual Audio";

/// Metadata salvaged from a raw release title, then corrected by hand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedInfo {
    pub release_group: Option<String>,
    pub show_name: Option<String>,
    pub season: Option<String>, // "S01", "R02", "Arc x"
    pub resolution: Option<String>,
    pub source: Option<String>, // BluRay, WEB, DVD-rip...
    pub audio: Option<String>,
    pub video: Option<String>,
    pub hi10: Option<String>,
    pub dual_audio: Option<String>,
    pub version: Option<String>, // "v2"
    pub episode_range: Option<String>,
}

/// Fields that can be corrected through a free-text prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    ReleaseGroup,
    ShowName,
    Season,
    Resolution,
    Source,
    Audio,
    Video,
    Version,
}

impl Field {
    /// Prompt order. Hi10 and dual audio are yes/no flags and are asked separately.
    pub const CORRECTABLE: [Field; 8] = [
        Field::ReleaseGroup,
        Field::ShowName,
        Field::Season,
        Field::Resolution,
        Field::Source,
        Field::Audio,
        Field::Video,
        Field::Version,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Field::ReleaseGroup => "Release Group",
            Field::ShowName => "Show Name",
            Field::Season => "Season",
            Field::Resolution => "Resolution",
            Field::Source => "Source",
            Field::Audio => "Audio",
            Field::Video => "Video",
            Field::Version => "Version",
        }
    }
}

impl ExtractedInfo {
    pub fn get(&self, field: Field) -> Option<&str> {
        self.slot(field).as_deref()
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        *self.slot_mut(field) = Some(value.into());
    }

    fn slot(&self, field: Field) -> &Option<String> {
        match field {
            Field::ReleaseGroup => &self.release_group,
            Field::ShowName => &self.show_name,
            Field::Season => &self.season,
            Field::Resolution => &self.resolution,
            Field::Source => &self.source,
            Field::Audio => &self.audio,
            Field::Video => &self.video,
            Field::Version => &self.version,
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::ReleaseGroup => &mut self.release_group,
            Field::ShowName => &mut self.show_name,
            Field::Season => &mut self.season,
            Field::Resolution => &mut self.resolution,
            Field::Source => &mut self.source,
            Field::Audio => &mut self.audio,
            Field::Video => &mut self.video,
            Field::Version => &mut self.version,
        }
    }

    pub fn set_episode_range(&mut self, range: &str) {
        self.episode_range = Some(format!("E{range}"));
    }

    pub fn set_hi10(&mut self, enabled: bool) {
        self.hi10 = enabled.then(|| HI10_TAG.to_string());
    }

    pub fn set_dual_audio(&mut self, enabled: bool) {
        self.dual_audio = enabled.then(|| DUAL_AUDIO_TAG.to_string());
    }
}
