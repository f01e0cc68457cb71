use scraper::{Html, Selector};

/// Tags that can plausibly carry a logo image.
pub const IMAGE_TAGS: [&str; 3] = ["img", "svg", "picture"];

/// Substring an attribute must contain to count as a logo hint.
/// Matching is case-sensitive.
pub const LOGO_MARKER: &str = "logo";

pub trait LogoExtractor: Send + Sync {
    fn extract(&self, html: &str) -> Option<String>;
}

/// Ordered best-effort heuristic chain over the parsed page:
/// 1. image-tag element with "logo" in its class -> `src`
/// 2. image-tag element with "logo" in its `src` -> `src`
/// 3. `<meta property="og:image">` -> `content`
/// 4. image-tag element with "logo" in its `alt` -> `src`
///
/// The first rule to produce a non-empty attribute value wins. A rule whose
/// first matching element lacks the expected attribute yields nothing for
/// that rule; later matches of the same rule are never inspected.
#[derive(Debug, Default)]
pub struct HeuristicLogoExtractor;

impl LogoExtractor for HeuristicLogoExtractor {
    fn extract(&self, html: &str) -> Option<String> {
        let doc = Html::parse_document(html);

        first_attr(&doc, &image_tag_selector("class"), "src")
            .inspect(|_| log::debug!("logo class detected"))
            .or_else(|| {
                first_attr(&doc, &image_tag_selector("src"), "src")
                    .inspect(|_| log::debug!("logo src detected"))
            })
            .or_else(|| {
                first_attr(&doc, r#"meta[property="og:image"]"#, "content")
                    .inspect(|_| log::debug!("og:image meta detected"))
            })
            .or_else(|| {
                first_attr(&doc, &image_tag_selector("alt"), "src")
                    .inspect(|_| log::debug!("logo alt detected"))
            })
    }
}

/// Selector matching any image-tag element whose `attr` contains the logo
/// marker, e.g. `img[class*="logo"], svg[class*="logo"], ...`.
fn image_tag_selector(attr: &str) -> String {
    IMAGE_TAGS
        .iter()
        .map(|tag| format!(r#"{tag}[{attr}*="{LOGO_MARKER}"]"#))
        .collect::<Vec<_>>()
        .join(", ")
}

/// `attr` of the first element matching `selector`, in document order.
/// Returns `None` when the selector matches nothing, or when the first
/// match lacks the attribute or carries an empty one.
fn first_attr(doc: &Html, selector: &str, attr: &str) -> Option<String> {
    let sel = Selector::parse(selector).ok()?;
    let element = doc.select(&sel).next()?;
    let value = element.value().attr(attr)?.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
