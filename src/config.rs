use crate::api::models::{Reciter, Surah};
use crate::constants::{BACKGROUND_COLORS, BACKGROUND_IMAGES, BACKGROUND_VIDEOS, POPULAR_RECITERS};

pub const MIN_FONT_SIZE: u32 = 16;
pub const MAX_FONT_SIZE: u32 = 48;

/// Backdrop behind the verse text. Each variant carries its value (a URL for
/// image/video, a CSS hex color otherwise) so switching the kind and picking
/// a preset are a single assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Background {
    Image(String),
    Video(String),
    Color(String),
}

impl Background {
    pub fn default_image() -> Self {
        Self::Image(BACKGROUND_IMAGES[0].to_string())
    }

    pub fn default_video() -> Self {
        Self::Video(BACKGROUND_VIDEOS[0].to_string())
    }

    pub fn default_color() -> Self {
        Self::Color(BACKGROUND_COLORS[0].to_string())
    }

    /// Classify an uploaded file by MIME type. Anything that is not a video
    /// is treated as an image, matching what the preview can render.
    pub fn from_upload(content_type: &str, data_url: String) -> Self {
        if content_type.starts_with("video/") {
            Self::Video(data_url)
        } else {
            Self::Image(data_url)
        }
    }

    pub fn value(&self) -> &str {
        match self {
            Self::Image(v) | Self::Video(v) | Self::Color(v) => v,
        }
    }

    pub fn is_video(&self) -> bool {
        matches!(self, Self::Video(_))
    }
}

impl Default for Background {
    fn default() -> Self {
        Self::default_image()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogoPosition {
    #[default]
    TopRight,
    TopLeft,
    BottomRight,
    BottomLeft,
}

impl LogoPosition {
    /// Picker order in the sidebar.
    pub const ALL: [LogoPosition; 4] = [
        LogoPosition::TopRight,
        LogoPosition::TopLeft,
        LogoPosition::BottomRight,
        LogoPosition::BottomLeft,
    ];

    /// Corner placement inside the phone frame. The bottom corners sit above
    /// the progress bar and transport strip.
    pub fn class(self) -> &'static str {
        match self {
            LogoPosition::TopLeft => "top-6 left-6",
            LogoPosition::TopRight => "top-6 right-6",
            LogoPosition::BottomLeft => "bottom-20 left-6",
            LogoPosition::BottomRight => "bottom-20 right-6",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LogoPosition::TopLeft => "top-left",
            LogoPosition::TopRight => "top-right",
            LogoPosition::BottomLeft => "bottom-left",
            LogoPosition::BottomRight => "bottom-right",
        }
    }
}

/// MIME type for an uploaded file, by extension. Uploads become data URLs,
/// which need a concrete type the browser will render.
pub fn upload_mime_type(file_name: &str) -> &'static str {
    let extension = file_name
        .rsplit('.')
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();
    match extension.as_str() {
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "bmp" => "image/bmp",
        "avif" => "image/avif",
        "mp4" => "video/mp4",
        "m4v" => "video/x-m4v",
        "webm" => "video/webm",
        "ogv" => "video/ogg",
        "mov" => "video/quicktime",
        _ => "image/jpeg",
    }
}

/// Channel logo overlaid on the preview. The URL is a base64 data URL built
/// from the uploaded file so it survives without any server round trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Logo {
    pub url: String,
    pub position: LogoPosition,
}

/// Everything the sidebar edits. Held in one signal so the preview re-renders
/// from a single source of truth.
#[derive(Debug, Clone, PartialEq)]
pub struct ReelConfig {
    pub surah: Option<Surah>,
    pub start_ayah: u32,
    pub end_ayah: u32,
    pub reciter: Reciter,
    pub background: Background,
    pub logo: Option<Logo>,
    pub font_size: u32,
    pub text_color: String,
}

impl Default for ReelConfig {
    fn default() -> Self {
        Self {
            surah: None,
            start_ayah: 1,
            end_ayah: 1,
            reciter: POPULAR_RECITERS[0].clone(),
            background: Background::default(),
            logo: None,
            font_size: 24,
            text_color: "#ffffff".to_string(),
        }
    }
}

impl ReelConfig {
    /// Chapter picked from the catalog. The range resets to the first five
    /// verses (or fewer for short chapters) so the preview stays snappy.
    pub fn select_surah(&mut self, surah: Surah) {
        self.start_ayah = 1;
        self.end_ayah = 5.min(surah.number_of_ayahs);
        self.surah = Some(surah);
    }

    pub fn verse_limit(&self) -> u32 {
        self.surah.as_ref().map(|s| s.number_of_ayahs).unwrap_or(1)
    }

    /// Start of the range, clamped to the chapter. Raising the start past the
    /// current end drags the end along with it.
    pub fn set_start_ayah(&mut self, value: u32) {
        self.start_ayah = value.clamp(1, self.verse_limit());
        if self.end_ayah < self.start_ayah {
            self.end_ayah = self.start_ayah;
        }
    }

    pub fn set_end_ayah(&mut self, value: u32) {
        self.end_ayah = value.clamp(self.start_ayah, self.verse_limit());
    }

    pub fn set_font_size(&mut self, value: u32) {
        self.font_size = value.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
    }

    pub fn set_logo_url(&mut self, url: String) {
        let position = self
            .logo
            .as_ref()
            .map(|l| l.position)
            .unwrap_or_default();
        self.logo = Some(Logo { url, position });
    }

    pub fn set_logo_position(&mut self, position: LogoPosition) {
        if let Some(logo) = self.logo.as_mut() {
            logo.position = position;
        }
    }

    /// The inclusive range the next fetch will request.
    pub fn clamped_range(&self) -> (u32, u32) {
        let limit = self.verse_limit();
        let start = self.start_ayah.clamp(1, limit);
        let end = self.end_ayah.clamp(start, limit);
        (start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surah(number: u32, ayahs: u32) -> Surah {
        Surah {
            number,
            name: format!("سورة {number}"),
            english_name: format!("Surah {number}"),
            number_of_ayahs: ayahs,
            ..Default::default()
        }
    }

    #[test]
    fn selecting_a_surah_resets_the_range() {
        let mut config = ReelConfig::default();
        config.start_ayah = 40;
        config.end_ayah = 60;

        config.select_surah(surah(2, 286));
        assert_eq!((config.start_ayah, config.end_ayah), (1, 5));

        config.select_surah(surah(108, 3));
        assert_eq!((config.start_ayah, config.end_ayah), (1, 3));
    }

    #[test]
    fn range_edits_clamp_to_the_chapter() {
        let mut config = ReelConfig::default();
        config.select_surah(surah(1, 7));

        config.set_end_ayah(99);
        assert_eq!(config.end_ayah, 7);

        config.set_start_ayah(0);
        assert_eq!(config.start_ayah, 1);

        config.set_start_ayah(6);
        assert_eq!((config.start_ayah, config.end_ayah), (6, 7));
    }

    #[test]
    fn raising_the_start_drags_the_end() {
        let mut config = ReelConfig::default();
        config.select_surah(surah(1, 7));
        config.set_start_ayah(2);
        config.set_end_ayah(4);

        config.set_start_ayah(6);
        assert_eq!((config.start_ayah, config.end_ayah), (6, 6));
    }

    #[test]
    fn end_cannot_drop_below_start() {
        let mut config = ReelConfig::default();
        config.select_surah(surah(2, 286));
        config.set_start_ayah(10);

        config.set_end_ayah(3);
        assert_eq!(config.end_ayah, 10);
    }

    #[test]
    fn clamped_range_without_a_surah_is_a_single_verse() {
        let config = ReelConfig::default();
        assert_eq!(config.clamped_range(), (1, 1));
    }

    #[test]
    fn font_size_stays_inside_the_slider_bounds() {
        let mut config = ReelConfig::default();
        config.set_font_size(8);
        assert_eq!(config.font_size, MIN_FONT_SIZE);
        config.set_font_size(90);
        assert_eq!(config.font_size, MAX_FONT_SIZE);
    }

    #[test]
    fn uploads_classify_by_mime_type() {
        let video = Background::from_upload("video/mp4", "data:video/mp4;base64,AAAA".into());
        assert!(video.is_video());

        let image = Background::from_upload("image/png", "data:image/png;base64,AAAA".into());
        assert!(!image.is_video());
        assert_eq!(image.value(), "data:image/png;base64,AAAA");
    }

    #[test]
    fn upload_mime_types_come_from_the_extension() {
        assert_eq!(upload_mime_type("dunes.PNG"), "image/png");
        assert_eq!(upload_mime_type("clip.mp4"), "video/mp4");
        assert_eq!(upload_mime_type("clouds.webm"), "video/webm");
        assert_eq!(upload_mime_type("photo"), "image/jpeg");
        assert!(Background::from_upload(upload_mime_type("b.mov"), String::new()).is_video());
    }

    #[test]
    fn replacing_the_logo_keeps_its_corner() {
        let mut config = ReelConfig::default();
        config.set_logo_url("data:image/png;base64,AAAA".into());
        config.set_logo_position(LogoPosition::BottomLeft);

        config.set_logo_url("data:image/png;base64,BBBB".into());
        let logo = config.logo.expect("logo should survive replacement");
        assert_eq!(logo.position, LogoPosition::BottomLeft);
        assert_eq!(logo.url, "data:image/png;base64,BBBB");
    }
}
