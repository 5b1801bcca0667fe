//! Fixed phrase and domain tables the heuristics match against.

/// Sensationalism markers, matched case-insensitively against content.
pub const SENSATIONAL_KEYWORDS: [&str; 15] = [
    "shocking",
    "you won't believe",
    "doctors hate",
    "they don't want you to know",
    "conspiracy",
    "cover-up",
    "hoax",
    "scam",
    "miracle cure",
    "secret",
    "urgent",
    "breaking",
    "exclusive",
    "hidden",
    "revealed",
];

/// Domains treated as credible. Matched case-sensitively as substrings of the source.
pub const CREDIBLE_DOMAINS: [&str; 9] = [
    "reuters.com",
    "ap.org",
    "bbc.com",
    "cnn.com",
    "nytimes.com",
    "washingtonpost.com",
    "theguardian.com",
    "npr.org",
    "wsj.com",
];

/// Attribution phrases whose absence adds to the score.
pub const CITATION_PHRASES: [&str; 4] = ["according to", "study shows", "researchers", "reported"];

/// The narrower attribution check behind the citation factors.
pub const DIRECT_CITATION_PHRASES: [&str; 2] = ["according to", "study shows"];
