use unicode_segmentation::UnicodeSegmentation;

/// Whether the text is exactly one emoji grapheme cluster. Drives the
/// whole-input sticker-suggestion shortcut, so plain ASCII and multi-cluster
/// text must not qualify.
pub fn is_single_emoji(text: &str) -> bool {
    let mut clusters = text.graphemes(true);
    let Some(cluster) = clusters.next() else {
        return false;
    };
    clusters.next().is_none() && is_emoji_cluster(cluster)
}

fn is_emoji_cluster(cluster: &str) -> bool {
    let scalars: Vec<char> = cluster.chars().collect();
    let Some(&first) = scalars.first() else {
        return false;
    };

    // Keycap sequences: `#`, `*` or a digit, an optional presentation
    // selector, then the combining keycap mark.
    if matches!(first, '#' | '*' | '0'..='9') {
        return scalars.last() == Some(&'\u{20E3}')
            && scalars[1..scalars.len() - 1]
                .iter()
                .all(|&scalar| scalar == '\u{FE0F}');
    }

    let mut has_emoji_base = false;
    for &scalar in &scalars {
        if is_emoji_scalar(scalar) {
            has_emoji_base = true;
        } else if !matches!(scalar, '\u{200D}' | '\u{FE0F}') {
            // Anything besides a joiner or presentation selector makes the
            // cluster non-emoji.
            return false;
        }
    }
    has_emoji_base
}

fn is_emoji_scalar(scalar: char) -> bool {
    matches!(
        u32::from(scalar),
        0x2600..=0x26FF        // Miscellaneous Symbols
        | 0x2700..=0x27BF      // Dingbats
        | 0x2B05..=0x2B07      // heavy arrows
        | 0x2B1B..=0x2B1C      // black / white large square
        | 0x2B50 | 0x2B55      // star, heavy circle
        | 0x1F1E6..=0x1F1FF    // regional indicators
        | 0x1F300..=0x1F5FF    // Misc Symbols and Pictographs, incl. skin tones
        | 0x1F600..=0x1F64F    // Emoticons
        | 0x1F680..=0x1F6FF    // Transport and Map
        | 0x1F900..=0x1F9FF    // Supplemental Symbols and Pictographs
        | 0x1FA70..=0x1FAFF    // Symbols and Pictographs Extended-A
    )
}
