use std::fmt::Display;

use url::form_urlencoded;

/// The qualifier scoping the search to repositories tagged with the keywords.
const TOPIC_QUALIFIER: &str = "topic:";

/// A topic search built from the keywords typed by the user
#[derive(Debug, PartialEq, Eq, Clone, Hash, Default)]
pub struct SearchQuery {
    /// The keywords of the search.
    pub(crate) terms: Vec<String>,
}

impl SearchQuery {
    /// Creates a new `SearchQuery` with the given keywords.
    pub fn new<T: AsRef<str>>(terms: &[T]) -> Self {
        Self {
            terms: terms
                .iter()
                .map(|term| term.as_ref().to_string())
                .collect(),
        }
    }

    /// Creates a new `SearchQuery` from a whitespace-delimited line of keywords.
    pub fn from_line(line: &str) -> Self {
        Self {
            terms: line.split_whitespace().map(str::to_string).collect(),
        }
    }

    /// Retrieves the keywords of the search.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Returns true if the search has no keyword.
    pub fn is_empty(&self) -> bool {
        self.joined_terms().is_empty()
    }

    fn joined_terms(&self) -> String {
        self.terms.join(" ")
    }

    /// Builds the query string appended to the search endpoint.
    ///
    /// An empty search yields an empty suffix, i.e. an unfiltered search.
    pub fn to_query_suffix(&self) -> String {
        let joined_terms = self.joined_terms();
        if joined_terms.is_empty() {
            return String::new();
        }
        let encoded_terms =
            form_urlencoded::byte_serialize(joined_terms.as_bytes()).collect::<String>();

        format!("?q={TOPIC_QUALIFIER}{encoded_terms}")
    }
}

impl Display for SearchQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SearchQuery: terms={:?}", self.joined_terms())
    }
}
