//! License-plate detection and placeholder rewriting.
//!
//! Plate-shaped substrings are replaced with content-free `CHEPAI{n}` tokens
//! before segmentation, so the segmenter does not fragment them and plate
//! identities never reach the feature space.

use lazy_static::lazy_static;
use regex::Regex;

/// Placeholder prefix; the 1-based rank in length order is appended.
const PLACEHOLDER: &str = "CHEPAI";

lazy_static! {
    /// HTML/XML entity artifacts stripped before plate matching, including
    /// the variants whose leading `&` was already lost upstream.
    static ref ENTITY_ARTIFACTS: Regex =
        Regex::new(r"&amp;|&rdquo;|&ldquo;|&times;|rdquo;|ldquo;|times;|&bull;").unwrap();

    /// Full plate shape: region prefix, issuing letter, four alphanumerics,
    /// then one alphanumeric or special suffix (trailer/school/police/HK/Macau).
    static ref FULL_PLATE: Regex = Regex::new(
        "[京津沪渝冀豫云辽黑湘皖鲁新苏浙赣鄂桂甘晋蒙陕吉闽贵粤青藏川宁琼使领A-Z]\
         [A-Z][A-Z0-9]{4}[A-Z0-9挂学警港澳]"
    )
    .unwrap();

    /// Plates already partially masked upstream with redaction glyphs.
    static ref MASKED_PLATE: Regex = Regex::new(
        "[京津沪渝冀豫云辽黑湘皖鲁新苏浙赣鄂桂甘晋蒙陕吉闽贵粤青藏川宁琼使领]\
         .{1,3}[×xX＊*☆★○]{3,5}"
    )
    .unwrap();
}

/// Replace every plate-shaped substring with a `CHEPAI{n}` placeholder.
///
/// Matches from both patterns are deduplicated by exact text (discovery order,
/// full shape before masked shape) and substituted longest-first, so a shorter
/// match contained in a longer one disappears with it and is never replaced
/// independently.
pub fn redact_plates(text: &str) -> String {
    let mut text = ENTITY_ARTIFACTS.replace_all(text, "").into_owned();

    let mut plates: Vec<String> = Vec::new();
    for pattern in [&*FULL_PLATE, &*MASKED_PLATE] {
        for m in pattern.find_iter(&text) {
            if !plates.iter().any(|p| p == m.as_str()) {
                plates.push(m.as_str().to_string());
            }
        }
    }

    // Stable sort: ties keep discovery order.
    plates.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));

    for (rank, plate) in plates.iter().enumerate() {
        let placeholder = format!("{}{}", PLACEHOLDER, rank + 1);
        text = text.replace(plate.as_str(), &placeholder);
    }
    text
}
