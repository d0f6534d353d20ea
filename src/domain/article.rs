use serde::Deserialize;
use serde_json::Value;

/// Column labels for the tabular view and the exported sheet, in order.
pub const COLUMN_LABELS: [&str; 6] = [
    "Content",
    "Date",
    "Overseas Investment Related",
    "Supporting Evidence",
    "Title",
    "URL",
];

/// One record from the actor's dataset. Every field is optional; the actor
/// makes no guarantees, and unknown extra fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Article {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub overseas_investment_related: Option<Value>,
    #[serde(default)]
    pub supporting_evidence: Option<String>,
}

impl Article {
    /// The relevance flag comes back as a bool from some runs and a string
    /// from others; render both as text.
    fn relevance_text(&self) -> Option<String> {
        match &self.overseas_investment_related {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(Value::Bool(b)) => Some(b.to_string()),
            Some(other) => Some(other.to_string()),
        }
    }

    /// Row cells in [`COLUMN_LABELS`] order. Missing fields are blank here;
    /// the detail view uses explicit placeholders instead. Both the HTML
    /// table and the spreadsheet read from this, so they always agree.
    pub fn cells(&self) -> [String; 6] {
        [
            self.content.clone().unwrap_or_default(),
            self.date.clone().unwrap_or_default(),
            self.relevance_text().unwrap_or_default(),
            self.supporting_evidence.clone().unwrap_or_default(),
            self.title.clone().unwrap_or_default(),
            self.url.clone().unwrap_or_default(),
        ]
    }

    pub fn title_display(&self) -> String {
        self.title.clone().unwrap_or_else(|| "Untitled".to_string())
    }

    pub fn date_display(&self) -> String {
        self.date.clone().unwrap_or_else(|| "N/A".to_string())
    }

    pub fn content_display(&self) -> String {
        self.content
            .clone()
            .unwrap_or_else(|| "No content available".to_string())
    }

    pub fn relevance_display(&self) -> String {
        self.relevance_text().unwrap_or_else(|| "N/A".to_string())
    }

    pub fn evidence_display(&self) -> String {
        self.supporting_evidence
            .clone()
            .unwrap_or_else(|| "N/A".to_string())
    }

    /// Dead link when the actor returned no URL.
    pub fn link(&self) -> String {
        self.url.clone().unwrap_or_else(|| "#".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{Article, COLUMN_LABELS};
    use serde_json::json;

    #[test]
    fn missing_date_is_blank_in_cells_but_na_in_detail() {
        let article: Article = serde_json::from_value(json!({
            "title": "Factory deal",
            "url": "https://example.com/a",
            "content": "body",
            "overseas_investment_related": true,
            "supporting_evidence": "quote"
        }))
        .unwrap();

        let date_col = COLUMN_LABELS.iter().position(|l| *l == "Date").unwrap();
        assert_eq!(article.cells()[date_col], "");
        assert_eq!(article.date_display(), "N/A");
    }

    #[test]
    fn cells_follow_column_order() {
        let article: Article = serde_json::from_value(json!({
            "content": "c",
            "date": "2025-01-02",
            "overseas_investment_related": "Yes",
            "supporting_evidence": "e",
            "title": "t",
            "url": "https://example.com"
        }))
        .unwrap();

        assert_eq!(
            article.cells(),
            ["c", "2025-01-02", "Yes", "e", "t", "https://example.com"]
        );
    }

    #[test]
    fn boolean_relevance_flag_renders_as_text() {
        let article: Article =
            serde_json::from_value(json!({ "overseas_investment_related": false })).unwrap();
        assert_eq!(article.relevance_display(), "false");
    }

    #[test]
    fn empty_record_uses_every_placeholder() {
        let article = Article::default();
        assert_eq!(article.title_display(), "Untitled");
        assert_eq!(article.date_display(), "N/A");
        assert_eq!(article.content_display(), "No content available");
        assert_eq!(article.relevance_display(), "N/A");
        assert_eq!(article.evidence_display(), "N/A");
        assert_eq!(article.link(), "#");
        assert_eq!(article.cells(), ["", "", "", "", "", ""]);
    }

    #[test]
    fn unknown_fields_from_the_actor_are_ignored() {
        let article: Article = serde_json::from_value(json!({
            "title": "t",
            "crawl_depth": 3,
            "language": "en"
        }))
        .unwrap();
        assert_eq!(article.title.as_deref(), Some("t"));
    }
}
