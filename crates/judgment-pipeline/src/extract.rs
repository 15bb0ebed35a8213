//! Section extraction policies feeding the two classifiers.
//!
//! Both classifier paths concatenate a fixed ordered list of section labels;
//! they differ in which labels and in whether a sentence terminator is
//! enforced at each section boundary.

use crate::document::Judgment;

/// Chinese full stop enforced at section boundaries by punctuating policies.
const FULL_STOP: char = '。';

/// An ordered list of section labels plus the concatenation rule.
pub struct SectionPolicy {
    pub labels: &'static [&'static str],
    /// Append 。 after any section whose text does not already end with it.
    pub punctuate: bool,
}

/// Sections feeding the liability-apportionment classifier.
pub const LIABILITY_SECTIONS: SectionPolicy = SectionPolicy {
    labels: &["本院认为", "本院查明", "原告诉称", "审理经过"],
    punctuate: false,
};

/// Sections feeding the multiple-vehicle-injury classifier.
pub const MULTI_VEHICLE_SECTIONS: SectionPolicy = SectionPolicy {
    labels: &["原告诉称", "被告辩称", "被告诉称", "本院查明", "本院认为", "当事人信息"],
    punctuate: true,
};

/// Outcome of section extraction.
///
/// Malformed documents fail soft: the raw input is carried through unchanged
/// so downstream stages still run on a best-effort basis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extracted {
    /// Concatenated text of the sections that were present.
    Sections(String),
    /// The document could not be parsed; this is the raw input.
    Fallback(String),
}

impl Extracted {
    pub fn into_text(self) -> String {
        match self {
            Extracted::Sections(text) | Extracted::Fallback(text) => text,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Extracted::Fallback(_))
    }
}

/// Concatenate the policy's sections in label order, skipping absent labels.
pub fn extract_sections(xml: &str, policy: &SectionPolicy) -> Extracted {
    let judgment = match Judgment::parse(xml) {
        Ok(judgment) => judgment,
        Err(e) => {
            tracing::debug!("section extraction falling back to raw input: {}", e);
            return Extracted::Fallback(xml.to_string());
        }
    };

    let mut out = String::new();
    for label in policy.labels {
        if let Some(text) = judgment.section_text(label) {
            out.push_str(text);
            if policy.punctuate && !text.ends_with(FULL_STOP) {
                out.push(FULL_STOP);
            }
        }
    }
    Extracted::Sections(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn doc(sections: &[(&str, &str)]) -> String {
        let mut xml = String::from("<writ><doc>");
        for (label, text) in sections {
            xml.push_str(&format!("<{label}>{text}</{label}>"));
        }
        xml.push_str("</doc></writ>");
        xml
    }

    #[test]
    fn liability_sections_concatenate_in_label_order() {
        // Document order differs from label order; label order must win.
        let xml = doc(&[("原告诉称", "丙"), ("本院认为", "甲"), ("本院查明", "乙")]);
        let out = extract_sections(&xml, &LIABILITY_SECTIONS);
        assert_eq!(out, Extracted::Sections("甲乙丙".to_string()));
    }

    #[test]
    fn missing_sections_are_skipped_silently() {
        let xml = doc(&[("本院查明", "乙")]);
        let out = extract_sections(&xml, &LIABILITY_SECTIONS);
        assert_eq!(out, Extracted::Sections("乙".to_string()));
    }

    #[test]
    fn all_sections_missing_yields_empty() {
        let xml = doc(&[("标题", "无关")]);
        let out = extract_sections(&xml, &LIABILITY_SECTIONS);
        assert_eq!(out, Extracted::Sections(String::new()));
    }

    #[test]
    fn plain_policy_does_not_touch_punctuation() {
        let xml = doc(&[("本院认为", "甲"), ("本院查明", "乙")]);
        let out = extract_sections(&xml, &LIABILITY_SECTIONS).into_text();
        assert_eq!(out, "甲乙");
    }

    #[test]
    fn punctuating_policy_appends_full_stop() {
        let xml = doc(&[("本院查明", "事实清楚"), ("本院认为", "责任明确。")]);
        let out = extract_sections(&xml, &MULTI_VEHICLE_SECTIONS).into_text();
        assert_eq!(out, "事实清楚。责任明确。");
    }

    #[test]
    fn punctuating_policy_keeps_existing_full_stop() {
        let xml = doc(&[("原告诉称", "已有句号。")]);
        let out = extract_sections(&xml, &MULTI_VEHICLE_SECTIONS).into_text();
        assert_eq!(out, "已有句号。");
    }

    #[test]
    fn appends_full_stop_after_question_mark() {
        // Only the trailing 。 is checked; other terminal punctuation still
        // gets one appended.
        let xml = doc(&[("被告辩称", "何以见得？")]);
        let out = extract_sections(&xml, &MULTI_VEHICLE_SECTIONS).into_text();
        assert_eq!(out, "何以见得？。");
    }

    #[test]
    fn every_boundary_ends_with_full_stop() {
        let xml = doc(&[
            ("原告诉称", "原告主张"),
            ("被告辩称", "被告否认。"),
            ("本院查明", "查明如下"),
        ]);
        let out = extract_sections(&xml, &MULTI_VEHICLE_SECTIONS).into_text();
        assert_eq!(out, "原告主张。被告否认。查明如下。");
    }

    #[test]
    fn malformed_document_falls_back_to_raw_input() {
        let raw = "<writ><doc><本院认为>unclosed";
        let out = extract_sections(raw, &LIABILITY_SECTIONS);
        assert!(out.is_fallback());
        assert_eq!(out.into_text(), raw);
    }
}
