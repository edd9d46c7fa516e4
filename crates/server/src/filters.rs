//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}

/// Renders a 0-5 rating as star glyphs, e.g. "★★★★½".
///
/// Usage in templates: `{{ product.rating|stars }}`
#[askama::filter_fn]
pub fn stars(rating: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(star_string(rating.to_string().parse().unwrap_or(0.0)))
}

/// Full stars for the whole part, a half glyph for a .5 remainder,
/// hollow stars for the rest.
fn star_string(value: f32) -> String {
    let value = value.clamp(0.0, 5.0);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let full = value.floor() as usize;
    let half = value - value.floor() >= 0.5;
    let empty = 5_usize.saturating_sub(full + usize::from(half));

    let mut out = String::new();
    out.push_str(&"\u{2605}".repeat(full));
    if half {
        out.push('\u{00bd}');
    }
    out.push_str(&"\u{2606}".repeat(empty));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stars_half() {
        assert_eq!(star_string(4.5), "★★★★½");
    }

    #[test]
    fn test_stars_whole() {
        assert_eq!(star_string(3.0), "★★★☆☆");
    }

    #[test]
    fn test_stars_clamped() {
        assert_eq!(star_string(9.0), "★★★★★");
        assert_eq!(star_string(-1.0), "☆☆☆☆☆");
    }
}
