//! Category/search filtering and priority ordering for record tables.
//!
//! The displayed list is a pure function of the records and a
//! [`FilterCriteria`]: records are kept if they match the category filter
//! and the search term, then stably sorted by rank. Equal ranks keep their
//! input order.
//!
//! Text matching ignores case. The default [`SearchMode::Substring`] keeps
//! records where the lowercased term occurs in any lowercased search field;
//! [`SearchMode::Fuzzy`] goes through nucleo-matcher, accepts scattered
//! matches, and orders equal ranks by match score.

use std::cmp::Reverse;
use std::str::FromStr;

use nucleo_matcher::pattern::{Atom, AtomKind, CaseMatching, Normalization};
use nucleo_matcher::{Config, Matcher, Utf32Str};

// =============================================================================
// Criteria
// =============================================================================

/// Category part of a filter: everything, or one category.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter<C> {
    #[default]
    All,
    Only(C),
}

impl<C: PartialEq> CategoryFilter<C> {
    pub fn matches(&self, category: &C) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => c == category,
        }
    }
}

impl<C: FromStr> CategoryFilter<C> {
    /// Parse `"all"` (any case) or a category name.
    pub fn parse(s: &str) -> Result<Self, C::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(CategoryFilter::All)
        } else {
            s.trim().parse().map(CategoryFilter::Only)
        }
    }
}

/// How the search term is matched against text fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    /// Case-insensitive substring.
    #[default]
    Substring,
    /// Case-insensitive fuzzy match (characters in order, gaps allowed).
    Fuzzy,
}

/// What the host view is currently filtering by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria<C> {
    pub category: CategoryFilter<C>,
    pub search_term: String,
    pub mode: SearchMode,
}

impl<C> Default for FilterCriteria<C> {
    fn default() -> Self {
        Self {
            category: CategoryFilter::All,
            search_term: String::new(),
            mode: SearchMode::Substring,
        }
    }
}

impl<C> FilterCriteria<C> {
    /// Criteria that keep every record.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: CategoryFilter<C>) -> Self {
        self.category = category;
        self
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    pub fn with_mode(mut self, mode: SearchMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn matches_category(&self, category: &C) -> bool
    where
        C: PartialEq,
    {
        self.category.matches(category)
    }

    /// Whether the search term matches any of `fields`.
    pub fn matches_search(&self, fields: &[&str]) -> bool {
        TextMatcher::new(&self.search_term, self.mode)
            .score(fields)
            .is_some()
    }
}

// =============================================================================
// Filterable
// =============================================================================

/// Accessors the filter reads from a record.
pub trait Filterable {
    /// Value compared against [`CategoryFilter::Only`].
    type Category: PartialEq;
    /// Sort key; lower ranks are listed first.
    type Rank: Ord;

    fn category(&self) -> Self::Category;

    /// Text fields searched by the search term (e.g. name, location, type).
    fn search_fields(&self) -> Vec<&str>;

    fn rank(&self) -> Self::Rank;
}

/// Derive the displayed list: filter by `criteria`, then stable-sort by rank.
///
/// In [`SearchMode::Fuzzy`] the match score only orders records whose ranks
/// are equal; a rank that is unique per record leaves scores unused.
///
/// # Example
///
/// ```
/// use assetdesk_core::filter::{apply, FilterCriteria, Filterable};
///
/// struct Task {
///     name: &'static str,
///     priority: u8,
/// }
///
/// impl Filterable for Task {
///     type Category = u8;
///     type Rank = u8;
///
///     fn category(&self) -> u8 {
///         self.priority
///     }
///
///     fn search_fields(&self) -> Vec<&str> {
///         vec![self.name]
///     }
///
///     fn rank(&self) -> u8 {
///         self.priority
///     }
/// }
///
/// let tasks = [
///     Task { name: "Pump seal", priority: 2 },
///     Task { name: "Boiler", priority: 0 },
///     Task { name: "Pump motor", priority: 0 },
/// ];
/// let shown = apply(&tasks, &FilterCriteria::new().with_search("PUMP"));
/// let names: Vec<_> = shown.iter().map(|t| t.name).collect();
/// assert_eq!(names, ["Pump motor", "Pump seal"]);
/// ```
pub fn apply<'a, T: Filterable>(
    records: &'a [T],
    criteria: &FilterCriteria<T::Category>,
) -> Vec<&'a T> {
    let mut text = TextMatcher::new(&criteria.search_term, criteria.mode);

    let mut matched: Vec<(&'a T, u16)> = records
        .iter()
        .filter(|r| criteria.matches_category(&r.category()))
        .filter_map(|r| text.score(&r.search_fields()).map(|score| (r, score)))
        .collect();

    match criteria.mode {
        SearchMode::Substring => matched.sort_by_key(|(r, _)| r.rank()),
        SearchMode::Fuzzy => matched.sort_by_key(|(r, score)| (r.rank(), Reverse(*score))),
    }

    log::debug!(
        "[filter::apply] {} of {} records shown (term={:?})",
        matched.len(),
        records.len(),
        criteria.search_term
    );

    matched.into_iter().map(|(r, _)| r).collect()
}

/// Closure form: keep records passing `predicate`, stable-sorted by `rank`.
pub fn filter_and_rank<'a, T, P, R, K>(records: &'a [T], mut predicate: P, rank: R) -> Vec<&'a T>
where
    P: FnMut(&T) -> bool,
    R: Fn(&T) -> K,
    K: Ord,
{
    let mut shown: Vec<&'a T> = records.iter().filter(|r| predicate(*r)).collect();
    shown.sort_by_key(|r| rank(*r));
    shown
}

// =============================================================================
// TextMatcher (internal)
// =============================================================================

/// A compiled search term.
enum TextMatcher {
    /// Empty term: everything matches.
    Any,
    /// Lowercased term, matched by containment.
    Substring(String),
    Fuzzy {
        matcher: Matcher,
        atom: Atom,
        buf: Vec<char>,
    },
}

impl TextMatcher {
    fn new(term: &str, mode: SearchMode) -> Self {
        if term.is_empty() {
            return TextMatcher::Any;
        }
        match mode {
            SearchMode::Substring => TextMatcher::Substring(term.to_lowercase()),
            SearchMode::Fuzzy => TextMatcher::Fuzzy {
                matcher: Matcher::new(Config::DEFAULT),
                atom: Atom::new(
                    term,
                    CaseMatching::Ignore,
                    Normalization::Never,
                    AtomKind::Fuzzy,
                    false,
                ),
                buf: Vec::new(),
            },
        }
    }

    /// Best score over `fields`, or `None` if no field matches.
    ///
    /// Substring matches and the empty term score 0.
    fn score(&mut self, fields: &[&str]) -> Option<u16> {
        match self {
            TextMatcher::Any => Some(0),
            TextMatcher::Substring(term) => fields
                .iter()
                .any(|field| field.to_lowercase().contains(term.as_str()))
                .then_some(0),
            TextMatcher::Fuzzy { matcher, atom, buf } => fields
                .iter()
                .filter_map(|field| atom.score(Utf32Str::new(field, buf), matcher))
                .max(),
        }
    }
}
