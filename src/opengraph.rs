use scraper::{Html, Selector};

use crate::models::{OgImage, OpenGraphData};

/// Parse Open Graph tags from `html`.
///
/// Never fails: malformed markup is parsed best-effort and absent tags leave
/// the corresponding field empty. There is no fallback to `<title>` or
/// `<meta name="description">`.
pub fn extract(html: &str) -> OpenGraphData {
    let mut data = OpenGraphData::default();
    if html.trim().is_empty() {
        return data;
    }

    let Ok(selector) = Selector::parse("meta") else {
        tracing::error!("Cannot build meta selector");
        return data;
    };

    let document = Html::parse_document(html);
    if !document.errors.is_empty() {
        tracing::debug!(errors = document.errors.len(), "HTML parsed with recoverable errors");
    }

    for el in document.select(&selector) {
        let attrs = el.value();
        let Some(property) = attrs.attr("property").or_else(|| attrs.attr("name")) else {
            continue;
        };
        let Some(content) = attrs.attr("content").map(str::trim) else {
            continue;
        };

        match property.trim().to_ascii_lowercase().as_str() {
            "og:title" if data.title.is_empty() => data.title = content.to_string(),
            "og:description" if data.description.is_empty() => {
                data.description = content.to_string()
            }
            "og:image" => data.images.push(OgImage {
                url: content.to_string(),
            }),
            "og:image:url" | "og:image:secure_url" => match data.images.last_mut() {
                Some(last) if last.url.is_empty() => last.url = content.to_string(),
                _ => data.images.push(OgImage {
                    url: content.to_string(),
                }),
            },
            _ => {}
        }
    }

    data
}
