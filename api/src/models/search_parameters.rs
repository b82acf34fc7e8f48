/// Body of the search forms. A missing term behaves like an empty one and
/// matches every record.
#[derive(Deserialize)]
pub struct SearchParameters {
    #[serde(default)]
    pub search_term: String,
}
