use crate::error::InputError;
use ::epub::doc::EpubDoc;
use std::path::Path;

/// Text of every chapter in spine order, chapters separated by a blank line.
///
/// Only the `<body>` of each chapter is read, with markup stripped and the
/// common character entities decoded.
pub fn load(path: &Path) -> Result<String, InputError> {
    if !path.exists() {
        return Err(InputError::FileNotFound(path.to_path_buf()));
    }

    let mut doc = EpubDoc::new(path).map_err(|e| InputError::EpubParse(e.to_string()))?;

    let num_chapters = doc.get_num_chapters();
    if num_chapters == 0 {
        return Err(InputError::EpubParse("no chapters found in EPUB".to_string()));
    }

    let mut content = String::new();
    for chapter_idx in 0..num_chapters {
        if !doc.set_current_chapter(chapter_idx) {
            continue;
        }
        let Some((chapter_html, _mime)) = doc.get_current_str() else {
            continue;
        };
        let text = extract_plain_text(&chapter_html);
        if text.is_empty() {
            continue;
        }
        if !content.is_empty() {
            content.push_str("\n\n");
        }
        content.push_str(&text);
    }

    Ok(content)
}

/// Body text of an (X)HTML document.
pub fn extract_plain_text(html: &str) -> String {
    let body = body_of(html);

    let mut text = String::with_capacity(body.len());
    let mut in_tag = false;
    for c in body.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => {
                in_tag = false;
                // keep words in adjacent elements apart
                text.push(' ');
            }
            _ if !in_tag => text.push(c),
            _ => {}
        }
    }

    decode_entities(&text)
        .lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn body_of(html: &str) -> &str {
    let lower = html.to_ascii_lowercase();
    let Some(open) = lower.find("<body") else {
        return html;
    };
    let Some(start) = lower[open..].find('>').map(|i| open + i + 1) else {
        return html;
    };
    let end = lower[start..].find("</body").map_or(html.len(), |i| start + i);
    &html[start..end]
}

fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}
