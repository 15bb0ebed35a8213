//! Text-normalization and feature-extraction pipeline for Chinese civil
//! judgment documents.
//!
//! Turns a raw judgment XML body into the space-joined token strings the two
//! external classifiers consume: section extraction (two label policies),
//! license-plate redaction, and dictionary-driven segmentation with stopword
//! filtering.

pub mod document;
pub mod error;
pub mod extract;
pub mod redact;
pub mod segment;

pub use document::{extract_title, Judgment};
pub use error::PipelineError;
pub use extract::{extract_sections, Extracted, SectionPolicy, LIABILITY_SECTIONS, MULTI_VEHICLE_SECTIONS};
pub use redact::redact_plates;
pub use segment::{Segmenter, StopwordSet};

use std::path::Path;

/// Process-wide pipeline resources: the segmenter (with the legal user
/// dictionary merged) and the stopword set. Built once at startup, read-only
/// afterwards, safe to share across request handlers.
pub struct PipelineContext {
    segmenter: Segmenter,
    stopwords: StopwordSet,
}

impl PipelineContext {
    /// Load the segmentation dictionary and stopword list. Either resource
    /// missing or corrupt is fatal; the service must not start without them.
    pub fn load(dict_path: &Path, stopwords_path: &Path) -> Result<Self, PipelineError> {
        let segmenter = Segmenter::load(dict_path)?;
        let stopwords = StopwordSet::load(stopwords_path)?;
        tracing::info!(stopwords = stopwords.len(), "pipeline resources loaded");
        Ok(Self {
            segmenter,
            stopwords,
        })
    }

    pub fn new(segmenter: Segmenter, stopwords: StopwordSet) -> Self {
        Self {
            segmenter,
            stopwords,
        }
    }

    /// Feature string for the liability-apportionment classifier:
    /// Variant A extraction, simple segmentation, no filtering.
    pub fn liability_features(&self, xml: &str) -> String {
        let text = extract_sections(xml, &LIABILITY_SECTIONS).into_text();
        self.segmenter.join_simple(&text)
    }

    /// Feature string for the multiple-vehicle-injury classifier:
    /// Variant B extraction, plate redaction, filtered full-mode segmentation.
    pub fn multi_vehicle_features(&self, xml: &str) -> String {
        let text = extract_sections(xml, &MULTI_VEHICLE_SECTIONS).into_text();
        let redacted = redact_plates(text.trim());
        self.segmenter.join_filtered(&redacted, &self.stopwords)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> PipelineContext {
        PipelineContext::new(
            Segmenter::with_default_dict(),
            StopwordSet::from_words(["的", "了", "在"]),
        )
    }

    #[test]
    fn liability_path_segments_extracted_sections() {
        let xml = "<writ><doc><本院认为>被告承担全部责任</本院认为></doc></writ>";
        let out = context().liability_features(xml);
        assert_eq!(out.replace(' ', ""), "被告承担全部责任");
    }

    #[test]
    fn liability_path_keeps_stopwords() {
        let xml = "<writ><doc><本院查明>原告的损失</本院查明></doc></writ>";
        let out = context().liability_features(xml);
        assert!(out.split(' ').any(|t| t == "的"));
    }

    #[test]
    fn multi_vehicle_path_redacts_plates() {
        let xml = "<writ><doc><本院查明>京A12345在此发生事故</本院查明></doc></writ>";
        let out = context().multi_vehicle_features(xml);
        assert!(out.contains("CHEPAI1"), "plate not redacted: {out}");
        assert!(!out.contains("京A12345"));
    }

    #[test]
    fn multi_vehicle_path_filters_stopwords() {
        let xml = "<writ><doc><原告诉称>原告的诉求</原告诉称></doc></writ>";
        let out = context().multi_vehicle_features(xml);
        assert!(!out.split_whitespace().any(|t| t == "的"));
    }

    #[test]
    fn malformed_xml_still_produces_output() {
        let ctx = context();
        let raw = "并非法条<格式";
        assert!(!ctx.liability_features(raw).is_empty());
        assert!(!ctx.multi_vehicle_features(raw).is_empty());
    }
}
