//! Fixed category rules used by the scanner.
//!
//! Both lists are ordered: the first target or keyword that hits wins.

/// Targets looked for inside each tag. Compared against the lower-cased tag.
pub const TARGET_TAGS: &[&str] = &[
    "gambling", "dating", "adult", "porn", "sex", "xxx", "18+", "16+",
];

/// Domain keywords and the substrings that veto them.
pub const DOMAIN_KEYWORDS: &[KeywordRule] = &[
    KeywordRule::new("gambling"),
    KeywordRule::new("dating"),
    KeywordRule::new("adult"),
    KeywordRule::new("porn"),
    KeywordRule::with_exclusions("sex", &["essex", "sussex"]),
    KeywordRule::new("xxx"),
    KeywordRule::with_exclusions("bet", &["alpha", "beta", "better", "between"]),
    KeywordRule::new("casino"),
    KeywordRule::new("poker"),
    KeywordRule::new("escort"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordRule {
    pub keyword: &'static str,
    pub exclusions: &'static [&'static str],
}

impl KeywordRule {
    pub const fn new(keyword: &'static str) -> Self {
        Self {
            keyword,
            exclusions: &[],
        }
    }

    pub const fn with_exclusions(
        keyword: &'static str,
        exclusions: &'static [&'static str],
    ) -> Self {
        Self {
            keyword,
            exclusions,
        }
    }

    /// `domain` must already be lower-cased.
    pub fn matches(&self, domain: &str) -> bool {
        domain.contains(self.keyword) && !self.exclusions.iter().any(|e| domain.contains(e))
    }
}

#[derive(Debug, Clone)]
pub struct RuleSet {
    target_tags: Vec<&'static str>,
    domain_keywords: Vec<KeywordRule>,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::new(TARGET_TAGS.to_vec(), DOMAIN_KEYWORDS.to_vec())
    }
}

impl RuleSet {
    pub fn new(target_tags: Vec<&'static str>, domain_keywords: Vec<KeywordRule>) -> Self {
        Self {
            target_tags,
            domain_keywords,
        }
    }

    /// Case-insensitive substring test of every target against `tag`.
    pub fn tag_hits(&self, tag: &str) -> bool {
        let lower = tag.to_lowercase();
        self.target_tags.iter().any(|target| lower.contains(target))
    }

    /// First keyword, in list order, that the domain contains and that no
    /// exclusion vetoes.
    pub fn domain_keyword(&self, domain: &str) -> Option<&'static str> {
        let lower = domain.to_lowercase();
        self.domain_keywords
            .iter()
            .find(|rule| rule.matches(&lower))
            .map(|rule| rule.keyword)
    }
}
