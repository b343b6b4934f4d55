//! Utility functions for visualization: colors, value ranges, locale-aware numbers.

use num_format::{Locale, ToFormattedString};
use plotters::prelude::*;

use crate::style::NamedColor;

/// Microsoft Office (2013+) chart series palette, used for multi-series charts.
/// Order: Blue, Orange, Gray, Gold, Light Blue, Green, Dark Blue, Dark Orange, Dark Gray, Brownish Gold.
const OFFICE10: [RGBColor; 10] = [
    RGBColor(68, 114, 196),  // blue      (#4472C4)
    RGBColor(237, 125, 49),  // orange    (#ED7D31)
    RGBColor(165, 165, 165), // gray      (#A5A5A5)
    RGBColor(255, 192, 0),   // gold      (#FFC000)
    RGBColor(91, 155, 213),  // light blue(#5B9BD5)
    RGBColor(112, 173, 71),  // green     (#70AD47)
    RGBColor(38, 68, 120),   // dark blue (#264478)
    RGBColor(158, 72, 14),   // dark org. (#9E480E)
    RGBColor(99, 99, 99),    // dark gray (#636363)
    RGBColor(153, 115, 0),   // brownish  (#997300)
];

/// Get a color from the Office palette.
#[inline]
pub fn office_color(idx: usize) -> RGBAColor {
    OFFICE10[idx % OFFICE10.len()].to_rgba()
}

/// Plotters color for a named color.
pub fn named_rgb(color: NamedColor) -> RGBColor {
    let (r, g, b) = color.rgb();
    RGBColor(r, g, b)
}

/// Map a user-provided locale tag to a `num_format::Locale` and its decimal separator char.
///
/// Supported tags (case-insensitive): `en`, `us`, `en_US`, `de`, `de_DE`, `german`,
/// `fr`, `es`, `it`, `pt`, `nl`. Defaults to English.
pub fn map_locale(tag: &str) -> (&'static Locale, char) {
    match tag.to_lowercase().as_str() {
        "de" | "de_de" | "german" => (&Locale::de, ','),
        "fr" | "fr_fr" => (&Locale::fr, ','),
        "es" | "es_es" => (&Locale::es, ','),
        "it" | "it_it" => (&Locale::it, ','),
        "pt" | "pt_pt" | "pt_br" => (&Locale::pt, ','),
        "nl" | "nl_nl" => (&Locale::nl, ','),
        _ => (&Locale::en, '.'), // default
    }
}

/// Format an amount with grouped thousands and two decimals, e.g. `1,234.50` / `1.234,50`.
pub fn format_amount(value: f64, locale_tag: &str) -> String {
    let (locale, dec_sep) = map_locale(locale_tag);
    let cents = (value.abs() * 100.0).round();
    // Past u128 (or non-finite) there is nothing sensible to group.
    if !cents.is_finite() || cents >= u128::MAX as f64 {
        return format!("{value:.2}").replace('.', &dec_sep.to_string());
    }
    let cents = cents as u128;
    let sign = if value < 0.0 && cents != 0 { "-" } else { "" };
    format!(
        "{sign}{}{dec_sep}{:02}",
        (cents / 100).to_formatted_string(locale),
        cents % 100
    )
}

/// Tick label for the value axis: grouped integers for large magnitudes, a few decimals otherwise.
pub fn format_tick(v: f64, locale_tag: &str) -> String {
    let a = v.abs();
    if a >= 1000.0 {
        let (locale, _) = map_locale(locale_tag);
        let n = v.round() as i64;
        return n.to_formatted_string(locale);
    }
    let prec = if a >= 100.0 {
        0
    } else if a >= 10.0 {
        1
    } else {
        2
    };
    let (_, dec_sep) = map_locale(locale_tag);
    format!("{:.*}", prec, v).replace('.', &dec_sep.to_string())
}

/// Value-axis range covering `values` and zero, with 5% headroom on the open side(s).
pub fn value_range(values: &[f64]) -> (f64, f64) {
    let (mut lo, mut hi) = values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold((0.0f64, 0.0f64), |(lo, hi), v| (lo.min(v), hi.max(v)));
    if (hi - lo).abs() < f64::EPSILON {
        lo -= 1.0;
        hi += 1.0;
    }
    let pad = (hi - lo) * 0.05;
    if hi > 0.0 {
        hi += pad;
    }
    if lo < 0.0 {
        lo -= pad;
    }
    (lo, hi)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amounts_use_locale_separators() {
        assert_eq!(format_amount(1234.5, "en"), "1,234.50");
        assert_eq!(format_amount(1234.5, "de"), "1.234,50");
        assert_eq!(format_amount(-0.004, "en"), "0.00");
        assert_eq!(format_amount(-12.0, "en"), "-12.00");
    }

    #[test]
    fn amounts_past_i64_keep_their_magnitude() {
        assert_eq!(format_amount(1e17, "en"), "100,000,000,000,000,000.00");
        assert_eq!(
            format_amount(-1e20, "de"),
            "-100.000.000.000.000.000.000,00"
        );
        assert_eq!(format_amount(f64::INFINITY, "en"), "inf");
    }

    #[test]
    fn ticks_scale_precision() {
        assert_eq!(format_tick(12000.0, "en"), "12,000");
        assert_eq!(format_tick(150.4, "en"), "150");
        assert_eq!(format_tick(12.34, "en"), "12.3");
        assert_eq!(format_tick(0.5, "de"), "0,50");
    }

    #[test]
    fn range_includes_zero_and_pads() {
        let (lo, hi) = value_range(&[2.0, 4.0]);
        assert_eq!(lo, 0.0);
        assert!((hi - 4.2).abs() < 1e-9);
        let (lo, hi) = value_range(&[-2.0, 2.0]);
        assert!(lo < -2.0 && hi > 2.0);
        let (lo, hi) = value_range(&[0.0]);
        assert!((lo + 1.1).abs() < 1e-9 && (hi - 1.1).abs() < 1e-9);
    }
}
