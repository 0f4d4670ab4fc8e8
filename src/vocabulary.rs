//! The fixed interest vocabulary and its trigger-phrase map.
//!
//! The vocabulary is an ordered set of 59 interest tags. Order is
//! significant: it defines feature-vector indices, so the table below must
//! never be reordered. Each tag carries the free-text trigger phrases the
//! keyword extractor matches against.
//!
//! The vocabulary is process-wide and immutable; access goes through
//! [`Vocabulary::global`].

use std::collections::HashMap;
use std::sync::LazyLock;

/// Ordered interest tags with their trigger phrases.
///
/// The tuple order defines feature-vector indices.
const INTEREST_TRIGGERS: &[(&str, &[&str])] = &[
    ("Drawing", &["draw", "drawing", "sketch", "sketching", "illustration", "art", "artistic"]),
    ("Dancing", &["dance", "dancing", "choreography", "ballet", "performance"]),
    ("Singing", &["sing", "singing", "music", "vocal", "song", "choir"]),
    ("Sports", &["sport", "sports", "athletics", "fitness", "games", "competition"]),
    ("Video_Game", &["gaming", "games", "video game", "esports", "game development"]),
    ("Acting", &["acting", "theater", "drama", "performance", "stage", "film"]),
    ("Travelling", &["travel", "travelling", "tourism", "explore", "adventure"]),
    ("Gardening", &["garden", "gardening", "plants", "horticulture", "landscaping"]),
    ("Animals", &["animals", "pets", "wildlife", "veterinary", "zoology"]),
    ("Photography", &["photo", "photography", "camera", "pictures", "visual"]),
    ("Teaching", &["teach", "teaching", "education", "tutor", "instruction"]),
    ("Exercise", &["exercise", "workout", "fitness", "gym", "training"]),
    ("Coding", &["code", "coding", "programming", "software", "development"]),
    ("Electricity_Components", &["electrical", "electronics", "circuits", "wiring"]),
    ("Mechanic_Parts", &["mechanical", "engineering", "machines", "repair"]),
    ("Computer_Parts", &["computer", "hardware", "technology", "IT", "tech"]),
    ("Researching", &["research", "investigation", "analysis", "study"]),
    ("Architecture", &["architecture", "building", "design", "construction"]),
    ("Historic_Collection", &["history", "historical", "museum", "artifacts"]),
    ("Botany", &["botany", "plants", "biology", "nature"]),
    ("Zoology", &["zoology", "animals", "biology", "wildlife"]),
    ("Physics", &["physics", "science", "quantum", "mechanics"]),
    ("Accounting", &["accounting", "finance", "bookkeeping", "numbers"]),
    ("Economics", &["economics", "market", "finance", "business"]),
    ("Sociology", &["sociology", "society", "social", "culture"]),
    ("Geography", &["geography", "maps", "earth", "environment"]),
    ("Psychology", &["psychology", "mental", "behavior", "counseling"]),
    ("History", &["history", "past", "historical", "events"]),
    ("Science", &["science", "scientific", "research", "experiment"]),
    ("Business_Education", &["business", "management", "entrepreneurship"]),
    ("Chemistry", &["chemistry", "chemical", "laboratory", "reactions"]),
    ("Mathematics", &["math", "mathematics", "numbers", "calculations"]),
    ("Biology", &["biology", "life", "organisms", "medical"]),
    ("Makeup", &["makeup", "cosmetics", "beauty", "styling"]),
    ("Designing", &["design", "creative", "visual", "graphics"]),
    ("Content_Writing", &["writing", "content", "copywriting", "articles"]),
    ("Crafting", &["craft", "crafting", "handmade", "creative"]),
    ("Literature", &["literature", "books", "novels", "poetry"]),
    ("Reading", &["reading", "books", "knowledge", "learning"]),
    ("Cartooning", &["cartoon", "animation", "drawing", "comics"]),
    ("Debating", &["debate", "discussion", "argument", "speaking"]),
    ("Astrology", &["astrology", "stars", "horoscope", "celestial"]),
    ("Hindi", &["hindi", "language", "indian"]),
    ("French", &["french", "language", "foreign"]),
    ("English", &["english", "language", "literature"]),
    ("Urdu", &["urdu", "language", "poetry"]),
    ("Other_Language", &["language", "linguistics", "translation"]),
    ("Makeup_Artist", &["makeup artist", "beauty", "cosmetics"]),
    ("Mechanic", &["mechanic", "repair", "automotive", "maintenance"]),
    ("Model", &["modeling", "fashion", "runway", "photography"]),
    ("Sales", &["sales", "selling", "marketing", "customer"]),
    ("Doctor", &["doctor", "medical", "healthcare", "medicine"]),
    ("Pharmacist", &["pharmacy", "medicine", "drugs", "healthcare"]),
    ("Cycling", &["cycling", "bicycle", "biking", "sports"]),
    ("Knitting", &["knitting", "sewing", "textile", "crafts"]),
    ("Director", &["director", "film", "movie", "leadership"]),
    ("Journalism", &["journalism", "news", "reporting", "media"]),
    ("Business", &["business", "commerce", "trade", "entrepreneurship"]),
    ("Listening_Music", &["music", "listening", "audio", "sound"]),
];

/// The process-wide vocabulary instance.
static GLOBAL_VOCABULARY: LazyLock<Vocabulary> = LazyLock::new(Vocabulary::build);

/// The ordered, fixed interest vocabulary.
#[derive(Debug)]
pub struct Vocabulary {
    index_by_tag: HashMap<&'static str, usize>,
}

impl Vocabulary {
    fn build() -> Self {
        let index_by_tag = INTEREST_TRIGGERS
            .iter()
            .enumerate()
            .map(|(idx, (tag, _))| (*tag, idx))
            .collect();
        Vocabulary { index_by_tag }
    }

    /// Get the process-wide vocabulary.
    pub fn global() -> &'static Vocabulary {
        &GLOBAL_VOCABULARY
    }

    /// The number of interest tags. This is also the feature-vector length.
    pub fn len(&self) -> usize {
        INTEREST_TRIGGERS.len()
    }

    /// Whether the vocabulary is empty (it never is).
    pub fn is_empty(&self) -> bool {
        INTEREST_TRIGGERS.is_empty()
    }

    /// The feature-vector index of a tag, if the tag is known.
    pub fn index_of(&self, tag: &str) -> Option<usize> {
        self.index_by_tag.get(tag).copied()
    }

    /// The tag name at a feature-vector index.
    pub fn tag_at(&self, index: usize) -> Option<&'static str> {
        INTEREST_TRIGGERS.get(index).map(|(tag, _)| *tag)
    }

    /// Iterate tags in feature-vector order.
    pub fn tags(&self) -> impl Iterator<Item = &'static str> {
        INTEREST_TRIGGERS.iter().map(|(tag, _)| *tag)
    }

    /// Iterate `(tag, trigger phrases)` pairs in feature-vector order.
    pub fn triggers(&self) -> impl Iterator<Item = (&'static str, &'static [&'static str])> {
        INTEREST_TRIGGERS.iter().map(|(tag, phrases)| (*tag, *phrases))
    }

    /// Whether the given name is a vocabulary tag.
    pub fn contains(&self, tag: &str) -> bool {
        self.index_by_tag.contains_key(tag)
    }
}
