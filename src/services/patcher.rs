use crate::cli::Locale;
use crate::domain::constants::SITE_PAGE_FILE;
use crate::domain::models::{photo_label, PhotoSet};
use crate::services::storage::{SiteFs, StepError};
use std::path::PathBuf;

pub const SVG_WIDTH: u32 = 400;
pub const SVG_HEIGHT: u32 = 300;
const SVG_FILL: &str = "#FFE6F2";
const SVG_ACCENT: &str = "#FFB6C1";

pub struct PatchOutcome {
    pub path: PathBuf,
    pub replacements: usize,
}

/// Pink 400x300 placeholder with the label centered.
pub fn placeholder_svg(label: &str) -> String {
    format!(
        "<svg xmlns='http://www.w3.org/2000/svg' width='{w}' height='{h}' viewBox='0 0 {w} {h}'>\
<rect width='{w}' height='{h}' fill='{fill}'/>\
<text x='{cx}' y='{cy}' font-family='Arial' font-size='24' fill='{accent}' \
text-anchor='middle' dominant-baseline='middle'>{label}</text></svg>",
        w = SVG_WIDTH,
        h = SVG_HEIGHT,
        cx = SVG_WIDTH / 2,
        cy = SVG_HEIGHT / 2,
        fill = SVG_FILL,
        accent = SVG_ACCENT,
        label = label,
    )
}

/// Compact SVG data-URI encoding: only characters that break a URI or an
/// HTML attribute are escaped.
pub fn svg_data_uri(svg: &str) -> String {
    let mut out = String::with_capacity(svg.len() + 64);
    out.push_str("data:image/svg+xml,");
    for c in svg.chars() {
        match c {
            '%' => out.push_str("%25"),
            '<' => out.push_str("%3C"),
            '>' => out.push_str("%3E"),
            '#' => out.push_str("%23"),
            '"' => out.push_str("%22"),
            _ => out.push(c),
        }
    }
    out
}

pub fn placeholder_uri(locale: Locale, ordinal: u32) -> String {
    svg_data_uri(&placeholder_svg(&photo_label(locale, ordinal)))
}

/// Replaces every photo token in `content`, in ordinal order.
/// Returns the patched text and the number of replacements made.
pub fn patch_document(content: &str, photos: &PhotoSet, locale: Locale) -> (String, usize) {
    let mut patched = content.to_string();
    let mut total = 0;
    for ordinal in photos.ordinals() {
        let token = photos.token(ordinal);
        let hits = patched.matches(token.as_str()).count();
        if hits == 0 {
            continue;
        }
        patched = patched.replace(token.as_str(), &placeholder_uri(locale, ordinal));
        tracing::debug!("replaced {} x{}", token, hits);
        total += hits;
    }
    (patched, total)
}

/// Rewrites `index.html` in place with one write after all replacements.
pub fn patch_index(
    fs: &mut impl SiteFs,
    photos: &PhotoSet,
    locale: Locale,
) -> Result<PatchOutcome, StepError> {
    let content = fs.read_to_string(SITE_PAGE_FILE)?;
    let (patched, replacements) = patch_document(&content, photos, locale);
    fs.write(SITE_PAGE_FILE, &patched)?;
    Ok(PatchOutcome {
        path: fs.path(SITE_PAGE_FILE),
        replacements,
    })
}
