const ANIMATED_IMAGE_EXTENSION: &str = ".gif";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
    Other,
}

impl MediaKind {
    pub fn from_tag_name(tag: &str) -> Self {
        if tag.eq_ignore_ascii_case("video") {
            MediaKind::Video
        } else if tag.eq_ignore_ascii_case("img") {
            MediaKind::Image
        } else {
            MediaKind::Other
        }
    }
}

pub fn is_animated_image(kind: MediaKind, src: Option<&str>) -> bool {
    if kind != MediaKind::Image {
        return false;
    }
    src.map(|src| src.to_ascii_lowercase().ends_with(ANIMATED_IMAGE_EXTENSION))
        .unwrap_or(false)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MediaLayer {
    pub kind: MediaKind,
    pub animated: bool,
}

impl MediaLayer {
    pub fn classify(tag: &str, src: Option<&str>) -> Self {
        let kind = MediaKind::from_tag_name(tag);
        Self {
            kind,
            animated: is_animated_image(kind, src),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MediaProfile {
    pub before: MediaLayer,
    pub after: MediaLayer,
}

impl MediaProfile {
    pub fn new(before: MediaLayer, after: MediaLayer) -> Self {
        Self { before, after }
    }

    pub fn both_videos(&self) -> bool {
        self.before.kind == MediaKind::Video && self.after.kind == MediaKind::Video
    }

    pub fn has_animated_layer(&self) -> bool {
        self.before.animated || self.after.animated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_names_are_case_insensitive() {
        assert_eq!(MediaKind::from_tag_name("VIDEO"), MediaKind::Video);
        assert_eq!(MediaKind::from_tag_name("img"), MediaKind::Image);
        assert_eq!(MediaKind::from_tag_name("PICTURE"), MediaKind::Other);
    }

    #[test]
    fn gif_extension_marks_animated_image() {
        assert!(is_animated_image(MediaKind::Image, Some("after.gif")));
        assert!(is_animated_image(MediaKind::Image, Some("/media/AFTER.GIF")));
        assert!(!is_animated_image(MediaKind::Image, Some("after.png")));
        assert!(!is_animated_image(MediaKind::Image, Some("after.gif?v=2")));
        assert!(!is_animated_image(MediaKind::Image, None));
        assert!(!is_animated_image(MediaKind::Video, Some("clip.gif")));
    }

    #[test]
    fn profile_flags() {
        let video = MediaLayer::classify("VIDEO", Some("a.mp4"));
        let gif = MediaLayer::classify("IMG", Some("b.gif"));
        let both = MediaProfile::new(video, video);
        assert!(both.both_videos());
        assert!(!both.has_animated_layer());

        let mixed = MediaProfile::new(video, gif);
        assert!(!mixed.both_videos());
        assert!(mixed.has_animated_layer());
    }
}
