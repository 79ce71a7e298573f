/// Number of photos the gallery expects.
pub const PHOTO_COUNT: u32 = 10;

/// Relative directory prefix used by image references in the site page.
pub const PHOTO_DIR_TOKEN: &str = "./assets/photos";

pub const PHOTO_STEM: &str = "photo_";
pub const PHOTO_EXTENSION: &str = "jpg";

pub const PLACEHOLDER_PAGE_FILE: &str = "photo_placeholders.html";
pub const SITE_PAGE_FILE: &str = "index.html";

pub const STATUS_OK: &str = "ok";
pub const STATUS_NOT_FOUND: &str = "not_found";
pub const STATUS_ERROR: &str = "error";
