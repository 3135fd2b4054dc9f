//! Pre-populated GraphQL query documents.

use derive_more::Display;
use serde::Serialize;

/// Immutable GraphQL query document shipped verbatim to the Playground.
///
/// The document is opaque to this crate: it is never parsed, validated or
/// executed here. Its schema (`version`, `get(url)`, `select(selector)`, ...)
/// belongs to the goqldom backend.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq, Serialize)]
#[serde(transparent)]
pub struct QueryTemplate(&'static str);

impl QueryTemplate {
    /// Asks the backend for its version string.
    pub const VERSION: Self = Self(
        "{
  version
}
",
    );

    /// Fetches the Go blog index and projects title, date and link of every
    /// article entry.
    pub const GOLANG_BLOG_ARTICLES: Self = Self(
        r#"{
  golang_blog_articles: get(url: "https://blog.golang.org/index") {
    statusCode
    statusMessage
    contentType
    document {
      location
      title
      articles: select(selector: ".blogtitle") {
        all: elements {
          title: text(selector: "a")
          date: text(selector: ".date")
          link: attr(selector: "a", key: "href")
        }
      }
    }
  }
}
"#,
    );

    /// Returns the raw query document.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use graphql_parser::query::{
        Definition, Document, OperationDefinition, Selection, parse_query,
    };
    use pretty_assertions::assert_eq;

    use super::QueryTemplate;

    fn top_level_fields<'a>(doc: &'a Document<'a, &'a str>) -> Vec<&'a str> {
        doc.definitions
            .iter()
            .flat_map(|def| match def {
                Definition::Operation(OperationDefinition::SelectionSet(set)) => {
                    set.items.iter().collect::<Vec<_>>()
                }
                _ => vec![],
            })
            .filter_map(|sel| match sel {
                Selection::Field(f) => Some(f.name),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn version_query_selects_only_version() {
        let doc = parse_query::<&str>(QueryTemplate::VERSION.as_str())
            .expect("version query is valid GraphQL");

        assert_eq!(top_level_fields(&doc), vec!["version"]);
    }

    #[test]
    fn blog_query_is_valid_graphql() {
        let doc = parse_query::<&str>(QueryTemplate::GOLANG_BLOG_ARTICLES.as_str())
            .expect("blog query is valid GraphQL");

        assert_eq!(top_level_fields(&doc), vec!["get"]);
    }

    #[test]
    fn blog_query_targets_go_blog_selectors() {
        let query = QueryTemplate::GOLANG_BLOG_ARTICLES.as_str();

        for needle in [
            "blog.golang.org/index",
            r#"".blogtitle""#,
            r#"".date""#,
            r#"key: "href""#,
        ] {
            assert!(query.contains(needle), "missing `{needle}` in:\n{query}");
        }
    }

    #[test]
    fn serializes_as_plain_string() {
        assert_eq!(
            serde_json::to_value(QueryTemplate::VERSION).unwrap(),
            serde_json::json!("{\n  version\n}\n"),
        );
    }
}
