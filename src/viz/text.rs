//! Text measurement and truncation for labels that share a fixed slot.

/// Heuristic: estimate pixel width of text (Plotters has no built-in text measuring).
pub fn estimate_text_width_px(text: &str, font_px: u32) -> u32 {
    ((text.chars().count() as f32) * (font_px as f32) * 0.60).ceil() as u32
}

/// Truncate to fit `max_px`, ending in a single ellipsis when shortened.
pub fn truncate_to_width(text: &str, font_px: u32, max_px: u32) -> String {
    if estimate_text_width_px(text, font_px) <= max_px {
        return text.to_string();
    }
    let mut out: String = String::new();
    for ch in text.chars() {
        out.push(ch);
        if estimate_text_width_px(&out, font_px) + estimate_text_width_px("…", font_px) > max_px {
            out.pop();
            break;
        }
    }
    out.push('…');
    out
}

/// Font size for category labels so `count` of them fit side by side in `axis_px`.
pub fn category_font_px(labels: &[String], axis_px: u32, preferred: u32) -> u32 {
    let count = labels.len().max(1) as u32;
    let slot = axis_px / count;
    let longest = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0) as u32;
    if longest == 0 {
        return preferred;
    }
    // width = chars * px * 0.6  =>  px = slot / (chars * 0.6)
    let fit = (slot as f32 / (longest as f32 * 0.60)).floor() as u32;
    fit.clamp(9, preferred)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(truncate_to_width("Q1", 14, 100), "Q1");
    }

    #[test]
    fn long_text_gets_ellipsis() {
        let t = truncate_to_width("Smartphones and Tablets", 10, 60);
        assert!(t.ends_with('…'));
        assert!(estimate_text_width_px(&t, 10) <= 60);
    }

    #[test]
    fn category_font_shrinks_but_not_below_floor() {
        let labels = vec!["Computer Accessories".to_string(); 6];
        assert_eq!(category_font_px(&labels, 4000, 14), 14);
        assert_eq!(category_font_px(&labels, 300, 14), 9);
    }
}
