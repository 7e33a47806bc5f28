use crate::models::Track;

/// Search screen state: one query, two parallel result sets.
///
/// Both result sets are keyed by the query that produced them. Online results
/// arrive asynchronously; an in-flight lookup is never cancelled, so the last
/// response to arrive wins (accepted limitation).
#[derive(Default)]
pub struct SearchState {
    pub query: String,
    pub local_results: Vec<Track>,
    pub online_results: Vec<Track>,
    pub online_loading: bool,
}
