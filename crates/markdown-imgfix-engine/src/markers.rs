use regex::Regex;
use std::sync::OnceLock;

fn image_marker_regex() -> &'static Regex {
    // `![alt](url)` on any host
    static IMAGE_MARKER: OnceLock<Regex> = OnceLock::new();
    IMAGE_MARKER
        .get_or_init(|| Regex::new(r"!\[([^\]]*)\]\([^)]+\)").expect("Invalid image marker regex"))
}

/// Count the image markers in `content`, whether or not they will be rewritten
pub fn count_image_markers(content: &str) -> usize {
    image_marker_regex().find_iter(content).count()
}
