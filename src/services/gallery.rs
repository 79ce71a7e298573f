use crate::cli::Locale;
use crate::domain::constants::PLACEHOLDER_PAGE_FILE;
use crate::domain::models::{PhotoSet, Tile};
use crate::services::storage::{SiteFs, StepError};
use std::path::PathBuf;

const STYLE: &str = r#"        body {
            font-family: Arial, sans-serif;
            background-color: #FFF9FB;
            margin: 0;
            padding: 20px;
        }
        .container {
            max-width: 1200px;
            margin: 0 auto;
        }
        h1 {
            color: #FFB6C1;
            text-align: center;
        }
        .placeholder-grid {
            display: grid;
            grid-template-columns: repeat(auto-fill, minmax(200px, 1fr));
            gap: 20px;
            margin-top: 30px;
        }
        .placeholder-item {
            text-align: center;
        }
        .placeholder-image {
            width: 100%;
            aspect-ratio: 4/3;
            background-color: #FFE6F2;
            border: 2px dashed #FFB6C1;
            display: flex;
            align-items: center;
            justify-content: center;
            color: #5D4A46;
            font-size: 18px;
            font-weight: bold;
            border-radius: 10px;
        }
        .placeholder-text {
            margin-top: 10px;
            color: #5D4A46;
            font-size: 14px;
        }
        .instructions {
            background-color: #FFE6F2;
            padding: 20px;
            border-radius: 10px;
            margin-top: 30px;
        }
        .instructions h2 {
            color: #FFB6C1;
            margin-top: 0;
        }
        .instructions ol {
            color: #5D4A46;
        }
"#;

struct PageText {
    lang: &'static str,
    title: &'static str,
    heading: &'static str,
    instructions: &'static str,
    rename: &'static str,
    move_into: &'static str,
    refresh: &'static str,
}

fn page_text(locale: Locale) -> PageText {
    match locale {
        Locale::En => PageText {
            lang: "en",
            title: "Photo Placeholder Generator",
            heading: "Photo Gallery - Placeholders",
            instructions: "How to use",
            rename: "Rename your photos to:",
            move_into: "Put the renamed photos into the",
            refresh: "Refresh the site page and your photos replace these placeholders",
        },
        Locale::Zh => PageText {
            lang: "zh-CN",
            title: "图片占位符生成器",
            heading: "2025·可爱定格 - 图片占位符",
            instructions: "使用说明",
            rename: "将您的回忆照片重命名为：",
            move_into: "将重命名后的照片放入",
            refresh: "刷新网站页面，即可看到您的照片替换掉这些占位符",
        },
    }
}

fn render_tile(tile: &Tile) -> String {
    format!(
        r#"            <div class="placeholder-item" id="photo-{}">
                <div class="placeholder-image">{}</div>
                <div class="placeholder-text">{}</div>
            </div>
"#,
        tile.ordinal, tile.label, tile.file_name
    )
}

/// `photo_01.jpg, photo_02.jpg, ..., photo_10.jpg`
fn naming_example(photos: &PhotoSet) -> String {
    let names: Vec<String> = photos.ordinals().map(|n| photos.file_name(n)).collect();
    if names.len() > 3 {
        format!("{}, {}, ..., {}", names[0], names[1], names[names.len() - 1])
    } else {
        names.join(", ")
    }
}

/// Renders the standalone placeholder page.
pub fn render_gallery(photos: &PhotoSet, locale: Locale) -> String {
    let text = page_text(locale);
    let tiles: String = photos.tiles(locale).iter().map(render_tile).collect();
    let photo_dir = photos.dir_token.trim_start_matches("./");

    format!(
        r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
{style}    </style>
</head>
<body>
    <div class="container">
        <h1>{heading}</h1>

        <div class="placeholder-grid">
{tiles}        </div>

        <div class="instructions">
            <h2>{instructions}</h2>
            <ol>
                <li>{rename} {naming}</li>
                <li>{move_into} <code>{photo_dir}/</code></li>
                <li>{refresh}</li>
            </ol>
        </div>
    </div>
</body>
</html>
"#,
        lang = text.lang,
        title = text.title,
        style = STYLE,
        heading = text.heading,
        tiles = tiles,
        instructions = text.instructions,
        rename = text.rename,
        naming = naming_example(photos),
        move_into = text.move_into,
        photo_dir = photo_dir,
        refresh = text.refresh,
    )
}

/// Writes `photo_placeholders.html` into the site, overwriting any previous copy.
pub fn generate_gallery(
    fs: &mut impl SiteFs,
    photos: &PhotoSet,
    locale: Locale,
) -> Result<PathBuf, StepError> {
    let html = render_gallery(photos, locale);
    fs.write(PLACEHOLDER_PAGE_FILE, &html)?;
    let path = fs.path(PLACEHOLDER_PAGE_FILE);
    tracing::debug!("wrote {} bytes to {}", html.len(), path.display());
    Ok(path)
}
