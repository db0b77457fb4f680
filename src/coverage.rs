//! Frequency ranking and comprehension cutoffs
//!
//! Given morphemes in reading order and the morphemes a reader already knows, [`analyze`]
//! counts the unknown ones, ranks them by frequency, and finds how many of the most frequent
//! must be learned before known + learned morphemes cover each of [`TARGET_PERCENTAGES`] of
//! the text.
//!
//! ```
//! use jstats::coverage::{analyze, KnownSet};
//!
//! let known: KnownSet = vec!["猫".to_string()].into_iter().collect();
//! let result = analyze(vec!["猫", "猫", "犬"], &known);
//! assert_eq!(result.total_known_morphs(), 2);
//! assert_eq!(result.cutoff(90), Some(1));
//! ```
use std::collections::BTreeMap;
use farm::{new_farm, new_farm_set, FarmSet};

/// Comprehension levels (in percent of all morpheme occurrences) that get a cutoff
pub const TARGET_PERCENTAGES: [u32; 6] = [80, 85, 90, 95, 98, 99];

/// Morphemes the reader already knows
pub type KnownSet = FarmSet<String>;

/// An empty known set: every valid morpheme counts as unknown
pub fn no_known() -> KnownSet {
    new_farm_set()
}

/// Whether a character is in the CJK Unified Ideographs block
#[inline]
pub fn is_cjk_ideograph(c: char) -> bool {
    c >= '\u{4E00}' && c <= '\u{9FFF}'
}

/// Whether a token is worth counting
///
/// Anything longer than one character counts. A lone character only counts if it is an
/// ideograph; single kana, punctuation and latin letters say nothing about vocabulary size.
pub fn is_valid_morpheme(token: &str) -> bool {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (None, _) => false,
        (Some(c), None) => is_cjk_ideograph(c),
        (Some(_), Some(_)) => true,
    }
}

/// An unknown morpheme and how many times it occurred
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FrequencyEntry {
    morpheme: String,
    count: usize,
}

impl FrequencyEntry {
    pub fn morpheme(&self) -> &str {
        &self.morpheme
    }
    pub fn count(&self) -> usize {
        self.count
    }
}

/// Everything [`analyze`] learned about a text
#[derive(Debug, Clone, PartialEq)]
pub struct CoverageResult {
    ranked_unknown: Vec<FrequencyEntry>,
    cutoffs: BTreeMap<u32, usize>,
    total_morphs: usize,
    total_known_morphs: usize,
}

impl CoverageResult {
    fn nothing() -> Self {
        CoverageResult {
            ranked_unknown: vec![],
            cutoffs: BTreeMap::new(),
            total_morphs: 0,
            total_known_morphs: 0,
        }
    }

    /// True when the text had no valid morphemes at all, so there is nothing to report
    pub fn is_empty(&self) -> bool {
        self.total_morphs == 0
    }

    /// Unknown morphemes, most frequent first, ties in order of first appearance
    pub fn ranked_unknown(&self) -> &[FrequencyEntry] {
        &self.ranked_unknown
    }

    /// Cutoff for each of [`TARGET_PERCENTAGES`], in ascending order of percentage.
    /// Empty when [`is_empty`](#method.is_empty).
    pub fn cutoffs(&self) -> &BTreeMap<u32, usize> {
        &self.cutoffs
    }

    /// How many of the top ranked unknown morphemes must be learned to reach `percentage`
    pub fn cutoff(&self, percentage: u32) -> Option<usize> {
        self.cutoffs.get(&percentage).cloned()
    }

    /// Valid morphemes in the text, duplicates included
    pub fn total_morphs(&self) -> usize {
        self.total_morphs
    }

    /// Valid morphemes the reader already knows, duplicates included
    pub fn total_known_morphs(&self) -> usize {
        self.total_known_morphs
    }

    pub fn unique_unknown_morphs(&self) -> usize {
        self.ranked_unknown.len()
    }

    /// Fraction of the text (0 to 1) already covered by known morphemes
    pub fn comprehension(&self) -> Option<f64> {
        if self.is_empty() {
            None
        } else {
            Some(self.total_known_morphs as f64 / self.total_morphs as f64)
        }
    }
}

/// Whether `covered` of `total` morphemes reaches `percentage`
///
/// Integer arithmetic, so 4 of 5 really is 80%.
#[inline]
fn reaches(covered: usize, total: usize, percentage: u32) -> bool {
    (covered as u128) * 100 >= (percentage as u128) * (total as u128)
}

/// Rank the unknown morphemes of `tokens` and compute comprehension cutoffs
///
/// `tokens` must be in reading order, since that breaks ties between equally frequent
/// morphemes. Pass [`no_known`] when nothing is known yet.
pub fn analyze<I, S>(tokens: I, known: &KnownSet) -> CoverageResult
    where I: IntoIterator<Item=S>, S: AsRef<str>
{
    // Entries are kept in order of first appearance and the map points into them
    let mut index = new_farm::<String, usize>();
    let mut ranked_unknown: Vec<FrequencyEntry> = vec![];
    let mut total_morphs = 0;
    let mut total_known_morphs = 0;

    for token in tokens {
        let token = token.as_ref();
        if !is_valid_morpheme(token) {
            trace!("Skipping {:?}", token);
            continue;
        }
        total_morphs += 1;
        if known.contains(token) {
            total_known_morphs += 1;
        } else if let Some(&i) = index.get(token) {
            ranked_unknown[i].count += 1;
        } else {
            index.insert(token.to_string(), ranked_unknown.len());
            ranked_unknown.push(FrequencyEntry { morpheme: token.to_string(), count: 1 });
        }
    }
    debug!("{} morphemes, {} known, {} unique unknown",
        total_morphs, total_known_morphs, ranked_unknown.len());

    if total_morphs == 0 {
        return CoverageResult::nothing();
    }

    // Stable, so first appearance still breaks ties
    ranked_unknown.sort_by(|a, b| b.count.cmp(&a.count));

    let cutoffs = find_cutoffs(&ranked_unknown, total_known_morphs, total_morphs);
    CoverageResult {
        ranked_unknown: ranked_unknown,
        cutoffs: cutoffs,
        total_morphs: total_morphs,
        total_known_morphs: total_known_morphs,
    }
}

/// Walk the ranked list, adding counts until each percentage is covered
fn find_cutoffs(ranked: &[FrequencyEntry], known: usize, total: usize) -> BTreeMap<u32, usize> {
    // None means unset; 0 is a real answer
    let mut found: [Option<usize>; 6] = [None; 6];
    // TARGET_PERCENTAGES is ascending, so everything below `next` is set
    let mut next = 0;
    let mut accumulator = known;

    while next < found.len() && reaches(accumulator, total, TARGET_PERCENTAGES[next]) {
        found[next] = Some(0);
        next += 1;
    }
    for (i, entry) in ranked.iter().enumerate() {
        if next == found.len() { break; }
        accumulator += entry.count;
        while next < found.len() && reaches(accumulator, total, TARGET_PERCENTAGES[next]) {
            found[next] = Some(i + 1);
            next += 1;
        }
    }

    TARGET_PERCENTAGES.iter()
        .zip(found.iter())
        .map(|(&pct, cut)| (pct, cut.unwrap_or(ranked.len())))
        .collect()
}
