//! Lexicon-based sentiment polarity
//!
//! Polarity is the mean of the lexicon values of every opinion word in the
//! text, after adjusting each one for a preceding intensifier or negation.
//! The same heuristic scores every dimension; it reads the whole comment, not
//! the span that matched a keyword.

use ahash::AHashMap;

/// Scores the overall tone of a text in [-1, 1]
pub trait PolarityScorer: Send + Sync {
    fn polarity(&self, text: &str) -> f64;
}

/// Scale applied to a negated opinion word
const NEGATION_FACTOR: f64 = -0.5;

/// Tokens after a negator that it can still reach
const NEGATION_WINDOW: usize = 3;

const OPINION_WORDS: &[(&str, f64)] = &[
    // positive
    ("good", 0.7),
    ("great", 0.8),
    ("excellent", 1.0),
    ("perfect", 1.0),
    ("wonderful", 1.0),
    ("amazing", 0.6),
    ("awesome", 1.0),
    ("fantastic", 0.4),
    ("superb", 1.0),
    ("brilliant", 0.9),
    ("outstanding", 0.5),
    ("lovely", 0.5),
    ("nice", 0.6),
    ("beautiful", 0.85),
    ("gorgeous", 0.7),
    ("charming", 0.5),
    ("stunning", 0.5),
    ("cozy", 0.5),
    ("cosy", 0.5),
    ("comfortable", 0.4),
    ("clean", 0.37),
    ("spotless", 0.6),
    ("spacious", 0.3),
    ("bright", 0.7),
    ("friendly", 0.375),
    ("helpful", 0.4),
    ("welcoming", 0.4),
    ("responsive", 0.3),
    ("convenient", 0.4),
    ("central", 0.2),
    ("pleasant", 0.7),
    ("enjoyable", 0.4),
    ("relaxing", 0.5),
    ("peaceful", 0.4),
    ("tranquil", 0.4),
    ("safe", 0.5),
    ("secure", 0.4),
    ("vibrant", 0.4),
    ("lively", 0.14),
    ("fun", 0.3),
    ("delicious", 1.0),
    ("tasty", 0.6),
    ("best", 1.0),
    ("better", 0.5),
    ("happy", 0.8),
    ("recommend", 0.5),
    ("recommended", 0.5),
    ("love", 0.5),
    ("loved", 0.7),
    ("enjoyed", 0.4),
    ("easy", 0.43),
    ("ideal", 0.9),
    ("fabulous", 0.4),
    ("incredible", 0.9),
    ("impeccable", 0.8),
    ("modern", 0.2),
    ("authentic", 0.5),
    ("handy", 0.3),
    ("quick", 0.33),
    ("well", 0.1),
    // negative
    ("bad", -0.7),
    ("poor", -0.4),
    ("terrible", -1.0),
    ("awful", -1.0),
    ("horrible", -1.0),
    ("worst", -1.0),
    ("worse", -0.4),
    ("disappointing", -0.6),
    ("disappointed", -0.75),
    ("dirty", -0.6),
    ("smelly", -0.5),
    ("noisy", -0.3),
    ("loud", -0.2),
    ("uncomfortable", -0.5),
    ("unsafe", -0.5),
    ("dangerous", -0.6),
    ("sketchy", -0.5),
    ("scary", -0.5),
    ("rude", -0.3),
    ("unfriendly", -0.5),
    ("broken", -0.4),
    ("expensive", -0.5),
    ("overpriced", -0.5),
    ("small", -0.25),
    ("tiny", -0.3),
    ("cramped", -0.4),
    ("dark", -0.15),
    ("old", -0.1),
    ("hard", -0.3),
    ("difficult", -0.5),
    ("annoying", -0.8),
    ("unpleasant", -0.6),
    ("problem", -0.3),
    ("crowded", -0.2),
    ("filthy", -0.8),
    ("hate", -0.8),
    ("avoid", -0.4),
    ("stolen", -0.6),
    ("unfortunately", -0.5),
];

const INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("really", 1.2),
    ("so", 1.2),
    ("super", 1.3),
    ("extremely", 1.5),
    ("incredibly", 1.5),
    ("absolutely", 1.4),
    ("truly", 1.2),
    ("quite", 1.1),
    ("too", 1.2),
    ("highly", 1.3),
];

const NEGATORS: &[&str] = &[
    "not", "no", "never", "nothing", "without", "hardly", "barely", "cannot", "cant", "dont", "didnt",
    "isnt", "wasnt", "wont", "arent", "werent", "doesnt", "couldnt", "wouldnt", "hasnt", "havent",
    "shouldnt", "aint", "neither", "nor",
];

/// The default polarity heuristic
#[derive(Debug, Clone)]
pub struct LexiconPolarity {
    opinions: AHashMap<&'static str, f64>,
    intensifiers: AHashMap<&'static str, f64>,
}

impl Default for LexiconPolarity {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconPolarity {
    pub fn new() -> Self {
        Self {
            opinions: OPINION_WORDS.iter().copied().collect(),
            intensifiers: INTENSIFIERS.iter().copied().collect(),
        }
    }

    /// Lower-case word tokens with apostrophes stripped (`didn't` -> `didnt`)
    pub fn tokenize(text: &str) -> Vec<String> {
        text.to_lowercase()
            .split(|c: char| !(c.is_alphanumeric() || c == '\'' || c == '\u{2019}'))
            .map(|s| s.chars().filter(|c| c.is_alphanumeric()).collect::<String>())
            .filter(|s| !s.is_empty())
            .collect()
    }

    fn is_negator(token: &str) -> bool {
        NEGATORS.contains(&token)
    }
}

impl PolarityScorer for LexiconPolarity {
    fn polarity(&self, text: &str) -> f64 {
        let mut total = 0.0;
        let mut count = 0usize;
        let mut intensity = 1.0;
        let mut negation_left = 0usize;

        for token in Self::tokenize(text) {
            if Self::is_negator(&token) {
                negation_left = NEGATION_WINDOW;
                intensity = 1.0;
                continue;
            }
            if let Some(&boost) = self.intensifiers.get(token.as_str()) {
                intensity = boost;
                continue;
            }

            if let Some(&value) = self.opinions.get(token.as_str()) {
                let mut score = value * intensity;
                if negation_left > 0 {
                    score *= NEGATION_FACTOR;
                    negation_left = 0;
                }
                total += score.clamp(-1.0, 1.0);
                count += 1;
            } else {
                negation_left = negation_left.saturating_sub(1);
            }
            intensity = 1.0;
        }

        if count == 0 {
            0.0
        } else {
            (total / count as f64).clamp(-1.0, 1.0)
        }
    }
}
