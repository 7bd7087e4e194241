//! Answer options offered on the "best thing" / "worst thing" steps.

use csat_types::{KeywordFeed, KeywordSource};

/// The "none" option appended to every option list.
pub const NONE_OPTION: &str = "Nada";

/// Built-in "best thing" options.
pub const DEFAULT_BEST_OPTIONS: &[&str] = &[
    "Atendimento",
    "Agilidade",
    "Localização",
    "Profissionalismo",
    "Confiança",
    "Variedade",
];

/// Built-in "worst thing" options.
pub const DEFAULT_WORST_OPTIONS: &[&str] = &[
    "Atendimento",
    "Demora",
    "Localização",
    "Estoque",
    "Entrega",
    "Infraestrutura",
    "Suporte técnico",
];

/// Where the option lists of a session came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionOrigin {
    BuiltIn,
    Feed,
}

/// The option lists for the two free-choice questions.
///
/// Both lists are de-duplicated case-insensitively and end with
/// [`NONE_OPTION`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionCatalog {
    best: Vec<String>,
    worst: Vec<String>,
    origin: OptionOrigin,
}

impl Default for OptionCatalog {
    fn default() -> Self {
        Self::built_in()
    }
}

impl OptionCatalog {
    /// The built-in option lists.
    pub fn built_in() -> Self {
        Self {
            best: finish_list(DEFAULT_BEST_OPTIONS.iter().map(|s| s.to_string()).collect()),
            worst: finish_list(DEFAULT_WORST_OPTIONS.iter().map(|s| s.to_string()).collect()),
            origin: OptionOrigin::BuiltIn,
        }
    }

    /// Build the lists from a keyword feed.
    ///
    /// Keywords are sentence-cased and de-duplicated. A category whose
    /// feed list is empty keeps its built-in list.
    pub fn from_feed(feed: &KeywordFeed) -> Self {
        let defaults = Self::built_in();
        let best = normalize_keywords(&feed.best);
        let worst = normalize_keywords(&feed.worst);

        Self {
            best: if best.is_empty() {
                defaults.best
            } else {
                finish_list(best)
            },
            worst: if worst.is_empty() {
                defaults.worst
            } else {
                finish_list(worst)
            },
            origin: OptionOrigin::Feed,
        }
    }

    /// Fetch keywords from `source`, falling back to the built-in lists on
    /// any failure.
    pub fn load(source: &dyn KeywordSource) -> Self {
        match source.fetch() {
            Ok(feed) => {
                tracing::debug!(
                    best = feed.best.len(),
                    worst = feed.worst.len(),
                    "Loaded answer keywords"
                );
                Self::from_feed(&feed)
            }
            Err(err) => {
                tracing::debug!("Keyword feed unavailable, using built-in options: {err}");
                Self::built_in()
            }
        }
    }

    /// Options for the "best thing" question.
    pub fn best(&self) -> &[String] {
        &self.best
    }

    /// Options for the "worst thing" question.
    pub fn worst(&self) -> &[String] {
        &self.worst
    }

    /// Where these lists came from.
    pub fn origin(&self) -> OptionOrigin {
        self.origin
    }

    /// Check if `value` is one of `options` rather than free text.
    pub fn is_listed(options: &[String], value: &str) -> bool {
        options.iter().any(|o| o == value)
    }
}

/// Trim, lowercase the whole keyword and uppercase its first character.
pub fn sentence_case(keyword: &str) -> String {
    let lower = keyword.trim().to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn normalize_keywords(keywords: &[String]) -> Vec<String> {
    dedup_case_insensitive(
        keywords
            .iter()
            .map(|k| sentence_case(k))
            .filter(|k| !k.is_empty()),
    )
}

fn finish_list(mut options: Vec<String>) -> Vec<String> {
    options.push(NONE_OPTION.to_string());
    dedup_case_insensitive(options)
}

/// Keep the first occurrence of each option, comparing case-insensitively.
fn dedup_case_insensitive(options: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    options
        .into_iter()
        .filter(|o| seen.insert(o.to_lowercase()))
        .collect()
}
