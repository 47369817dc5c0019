use axum::http::{header::ACCEPT_LANGUAGE, HeaderMap};

/// Language used to render user-facing messages.
///
/// Only selects message text; validation behaves the same in every locale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    En,
    PtBr,
}

impl Locale {
    /// Resolves the locale from the request's `Accept-Language` header.
    ///
    /// # Arguments
    /// - `headers` - Request headers
    ///
    /// # Returns
    /// - `Locale` - Best supported match, `Locale::En` when none matches
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let header = headers
            .get(ACCEPT_LANGUAGE)
            .and_then(|value| value.to_str().ok());

        Self::from_accept_language(header)
    }

    /// Picks the preferred supported locale from an `Accept-Language` value.
    ///
    /// Language ranges are ordered by their `q` weight (ties keep header order) and
    /// the first one with a supported primary tag wins. Ranges with `q=0` are ignored.
    pub fn from_accept_language(header: Option<&str>) -> Self {
        let Some(header) = header else {
            return Self::default();
        };

        let mut ranges: Vec<(&str, f32)> = header
            .split(',')
            .filter_map(|range| {
                let mut parts = range.trim().split(';');
                let tag = parts.next()?.trim();
                if tag.is_empty() {
                    return None;
                }

                let quality = parts
                    .find_map(|param| param.trim().strip_prefix("q="))
                    .and_then(|q| q.trim().parse::<f32>().ok())
                    .unwrap_or(1.0);

                Some((tag, quality))
            })
            .filter(|(_, quality)| *quality > 0.0)
            .collect();

        ranges.sort_by(|a, b| b.1.total_cmp(&a.1));

        ranges
            .into_iter()
            .find_map(|(tag, _)| Self::from_tag(tag))
            .unwrap_or_default()
    }

    fn from_tag(tag: &str) -> Option<Self> {
        let primary = tag.split(['-', '_']).next()?;

        if primary.eq_ignore_ascii_case("pt") {
            Some(Self::PtBr)
        } else if primary.eq_ignore_ascii_case("en") {
            Some(Self::En)
        } else {
            None
        }
    }
}
