//! [`BootstrapConfig`] and its building blocks.

use std::borrow::Cow;

use derive_more::Display;
use serde::Serialize;

use crate::{query::QueryTemplate, settings::EditorSettings};

/// Workspace name shown by the Playground.
pub const WORKSPACE_NAME: &str = "goqldom service";

/// Path segment appended to the page location in [`DeploymentMode::SameOrigin`].
pub const GRAPHQL_PATH: &str = "graphql";

/// Top-level endpoint used by [`DeploymentMode::FixedRemote`].
pub const FIXED_REMOTE_ENDPOINT: &str = "https://api.graph.cool/simple/v1/swapi";

/// Tab endpoint used by [`DeploymentMode::FixedRemote`].
pub const FIXED_REMOTE_TAB_ENDPOINT: &str = "http://localhost:8080/graphql";

/// Where the Playground sends its queries.
#[derive(Clone, Copy, Debug, Default, Display, Eq, Hash, PartialEq)]
pub enum DeploymentMode {
    /// Hardcoded absolute endpoints, regardless of where the page is hosted.
    ///
    /// The top-level endpoint ([`FIXED_REMOTE_ENDPOINT`]) differs from the
    /// tab endpoints ([`FIXED_REMOTE_TAB_ENDPOINT`]).
    #[display("fixed-remote")]
    FixedRemote,

    /// `<page location> + "graphql"` for every endpoint.
    #[default]
    #[display("same-origin")]
    SameOrigin,
}

/// Current document location of the page hosting the Playground, e.g.
/// `http://127.0.0.1:8080/`.
#[derive(Clone, Debug, Display, Eq, Hash, PartialEq)]
pub struct PageLocation(String);

impl PageLocation {
    /// Wraps the given `href`.
    pub fn new(href: impl Into<String>) -> Self {
        Self(href.into())
    }

    /// Builds the `href` of a page served over `scheme` from `host` at `path`.
    ///
    /// ```
    /// # use goqldom_playground::PageLocation;
    /// let location = PageLocation::from_parts("http", "localhost:8080", "/");
    /// assert_eq!(location.as_str(), "http://localhost:8080/");
    /// ```
    pub fn from_parts(scheme: &str, host: &str, path: &str) -> Self {
        Self(format!("{scheme}://{host}{path}"))
    }

    /// Returns the `href` of this location.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Appends `segment` to this location textually, the way the browser's
    /// `location + segment` does: no normalization takes place.
    pub fn join(&self, segment: &str) -> String {
        format!("{}{segment}", self.0)
    }
}

/// Named query/endpoint pair shown as a selectable panel.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TabDescriptor {
    /// Display label.
    pub name: Cow<'static, str>,

    /// URL the tab submits its query to.
    pub endpoint: String,

    /// Pre-populated query.
    pub query: QueryTemplate,
}

impl TabDescriptor {
    /// Creates a new [`TabDescriptor`].
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        endpoint: impl Into<String>,
        query: QueryTemplate,
    ) -> Self {
        Self {
            name: name.into(),
            endpoint: endpoint.into(),
            query,
        }
    }
}

/// Root configuration record passed to `GraphQLPlayground.init()`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BootstrapConfig {
    /// Default GraphQL endpoint.
    pub endpoint: String,

    /// Workspace name.
    pub workspace_name: Cow<'static, str>,

    /// Editor preferences.
    pub settings: EditorSettings,

    /// Tabs in display order.
    pub tabs: Vec<TabDescriptor>,
}

impl BootstrapConfig {
    /// Builds the configuration for the given `mode`, as seen from a page
    /// hosted at `location`.
    ///
    /// `location` is ignored in [`DeploymentMode::FixedRemote`].
    pub fn build(mode: DeploymentMode, location: &PageLocation) -> Self {
        let (endpoint, tab_endpoint) = match mode {
            DeploymentMode::FixedRemote => (
                FIXED_REMOTE_ENDPOINT.to_owned(),
                FIXED_REMOTE_TAB_ENDPOINT.to_owned(),
            ),
            DeploymentMode::SameOrigin => {
                let url = location.join(GRAPHQL_PATH);
                (url.clone(), url)
            }
        };

        Self {
            endpoint,
            workspace_name: WORKSPACE_NAME.into(),
            settings: EditorSettings::default(),
            tabs: vec![
                TabDescriptor::new(
                    "Service version",
                    tab_endpoint.clone(),
                    QueryTemplate::VERSION,
                ),
                TabDescriptor::new(
                    "Golang blog articles",
                    tab_endpoint,
                    QueryTemplate::GOLANG_BLOG_ARTICLES,
                ),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use crate::QueryTemplate;

    use super::{BootstrapConfig, DeploymentMode, PageLocation};

    fn location() -> PageLocation {
        PageLocation::new("http://127.0.0.1:41337/")
    }

    #[test]
    fn fixed_remote_keeps_diverging_endpoints() {
        let config = BootstrapConfig::build(DeploymentMode::FixedRemote, &location());

        assert_eq!(config.endpoint, "https://api.graph.cool/simple/v1/swapi");
        for tab in &config.tabs {
            assert_eq!(tab.endpoint, "http://localhost:8080/graphql");
        }
    }

    #[test]
    fn same_origin_derives_every_endpoint_from_location() {
        let config = BootstrapConfig::build(DeploymentMode::SameOrigin, &location());

        assert_eq!(config.endpoint, "http://127.0.0.1:41337/graphql");
        for tab in &config.tabs {
            assert_eq!(tab.endpoint, config.endpoint);
        }
    }

    #[test]
    fn same_origin_concatenates_without_normalizing() {
        let config = BootstrapConfig::build(
            DeploymentMode::SameOrigin,
            &PageLocation::new("https://example.test/ide/index.html"),
        );

        assert_eq!(config.endpoint, "https://example.test/ide/index.htmlgraphql");
    }

    #[test]
    fn tabs_are_ordered() {
        for mode in [DeploymentMode::FixedRemote, DeploymentMode::SameOrigin] {
            let config = BootstrapConfig::build(mode, &location());

            let tabs = config
                .tabs
                .iter()
                .map(|t| (&*t.name, t.query))
                .collect::<Vec<_>>();
            assert_eq!(
                tabs,
                [
                    ("Service version", QueryTemplate::VERSION),
                    ("Golang blog articles", QueryTemplate::GOLANG_BLOG_ARTICLES),
                ],
            );
        }
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let config = BootstrapConfig::build(DeploymentMode::SameOrigin, &location());

        let value = serde_json::to_value(&config).unwrap();

        assert_eq!(value["workspaceName"], json!("goqldom service"));
        assert_eq!(value["endpoint"], json!("http://127.0.0.1:41337/graphql"));
        assert_eq!(value["settings"]["editor.theme"], json!("light"));
        assert_eq!(value["tabs"][0]["name"], json!("Service version"));
        assert_eq!(value["tabs"][0]["query"], json!("{\n  version\n}\n"));
        assert_eq!(
            value["tabs"][1]["endpoint"],
            json!("http://127.0.0.1:41337/graphql"),
        );
    }

    #[test]
    fn mode_displays_as_kebab_case() {
        assert_eq!(DeploymentMode::FixedRemote.to_string(), "fixed-remote");
        assert_eq!(DeploymentMode::default().to_string(), "same-origin");
    }

    #[test]
    fn location_from_parts() {
        assert_eq!(
            PageLocation::from_parts("https", "example.test:8443", "/ide/").as_str(),
            "https://example.test:8443/ide/",
        );
    }
}
