use crate::text::CompoundSegmenter;

use super::identifier::TypeAnnotationPolicy;
use super::keywords::ProtectedKeywords;

/// Settings shared by the forward, backward and detection passes
#[derive(Debug, Clone)]
pub struct TranslationOptions {
    pub keywords: ProtectedKeywords,
    pub policy: TypeAnnotationPolicy,
    pub segmenter: CompoundSegmenter,
}

impl Default for TranslationOptions {
    fn default() -> Self {
        Self {
            keywords: ProtectedKeywords::defaults(),
            policy: TypeAnnotationPolicy::default(),
            segmenter: CompoundSegmenter::default(),
        }
    }
}

impl TranslationOptions {
    pub fn new(
        keywords: ProtectedKeywords,
        policy: TypeAnnotationPolicy,
        segmenter: CompoundSegmenter,
    ) -> Self {
        Self {
            keywords,
            policy,
            segmenter,
        }
    }

    pub fn with_keywords(mut self, keywords: ProtectedKeywords) -> Self {
        self.keywords = keywords;
        self
    }
}
