//! Dictionary-driven word segmentation and stopword filtering.

use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use jieba_rs::Jieba;

use crate::error::PipelineError;

/// Fixed set of stopwords, loaded once at startup; membership test only.
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// Load from a one-stopword-per-line file. Lines are trimmed; blank
    /// lines are ignored.
    pub fn load(path: &Path) -> Result<Self, PipelineError> {
        let content = std::fs::read_to_string(path).map_err(|source| {
            PipelineError::ResourceIo {
                path: path.to_path_buf(),
                source,
            }
        })?;
        Ok(Self::from_words(content.lines().map(str::trim)))
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().to_string())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Word segmenter backed by jieba with the legal user dictionary merged in.
pub struct Segmenter {
    jieba: Jieba,
}

impl Segmenter {
    /// Build a segmenter with the user dictionary at `dict_path` merged into
    /// the default model, so multi-character legal and vehicle terms are not
    /// over-split.
    pub fn load(dict_path: &Path) -> Result<Self, PipelineError> {
        let file = File::open(dict_path).map_err(|source| PipelineError::ResourceIo {
            path: dict_path.to_path_buf(),
            source,
        })?;
        let mut jieba = Jieba::new();
        jieba
            .load_dict(&mut BufReader::new(file))
            .map_err(|e| PipelineError::InvalidDictionary {
                path: dict_path.to_path_buf(),
                message: e.to_string(),
            })?;
        Ok(Self { jieba })
    }

    /// Segmenter without a user dictionary (tests and tooling).
    pub fn with_default_dict() -> Self {
        Self { jieba: Jieba::new() }
    }

    /// Simple mode: default-granularity cut, space-joined, no filtering.
    pub fn join_simple(&self, text: &str) -> String {
        self.jieba.cut(text, true).join(" ")
    }

    /// Filtered mode: full-mode cut, stopwords and literal CRLF tokens
    /// dropped, each surviving token followed by a single space.
    pub fn join_filtered(&self, text: &str, stopwords: &StopwordSet) -> String {
        let mut out = String::new();
        for word in self.jieba.cut_all(text) {
            if word == "\r\n" || stopwords.contains(word) {
                continue;
            }
            out.push_str(word);
            out.push(' ');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn stopword_set_trims_and_skips_blanks() {
        let set = StopwordSet::from_words(["的", " 了 ", ""]);
        assert_eq!(set.len(), 2);
        assert!(set.contains("的"));
        assert!(set.contains("了"));
    }

    #[test]
    fn simple_mode_joins_with_spaces() {
        let seg = Segmenter::with_default_dict();
        let out = seg.join_simple("原告的诉求");
        assert!(out.contains(' '));
        // Joined tokens reassemble the input.
        assert_eq!(out.replace(' ', ""), "原告的诉求");
    }

    #[test]
    fn filtered_mode_drops_stopwords() {
        let seg = Segmenter::with_default_dict();
        let stops = StopwordSet::from_words(["的"]);
        let out = seg.join_filtered("原告的诉求", &stops);
        let tokens: Vec<&str> = out.split_whitespace().collect();
        assert!(!tokens.contains(&"的"));
        assert!(tokens.contains(&"原告"));
    }

    #[test]
    fn filtered_mode_keeps_trailing_space() {
        let seg = Segmenter::with_default_dict();
        let stops = StopwordSet::from_words(["的"]);
        let out = seg.join_filtered("原告", &stops);
        assert!(out.ends_with(' '));
    }

    #[test]
    fn filtered_mode_drops_crlf_tokens() {
        let seg = Segmenter::with_default_dict();
        let stops = StopwordSet::from_words(Vec::<&str>::new());
        let out = seg.join_filtered("原告\r\n诉求", &stops);
        assert!(!out.contains("\r\n"));
    }

    #[test]
    fn placeholders_survive_filtering() {
        let seg = Segmenter::with_default_dict();
        let stops = StopwordSet::from_words(["的"]);
        let out = seg.join_filtered("CHEPAI1在此发生事故", &stops);
        assert!(out.contains("CHEPAI1"), "placeholder lost: {out}");
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let seg = Segmenter::with_default_dict();
        let stops = StopwordSet::from_words(Vec::<&str>::new());
        assert_eq!(seg.join_simple(""), "");
        assert_eq!(seg.join_filtered("", &stops), "");
    }
}
