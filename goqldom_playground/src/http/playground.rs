//! Utility module to generate a GraphQL Playground interface.

use crate::{
    bootstrap::{MountPoint, Widget},
    config::BootstrapConfig,
};

/// Base URL of the GraphQL Playground static bundle.
pub const PLAYGROUND_CDN: &str = "https://cdn.jsdelivr.net/npm/graphql-playground-react/build";

/// Generates the script initializing the Playground once the page is loaded.
///
/// ```
/// # use goqldom_playground::{
/// #     BootstrapConfig, DeploymentMode, MountPoint, PageLocation,
/// #     http::playground::bootstrap_script,
/// # };
/// let config = BootstrapConfig::build(
///     DeploymentMode::SameOrigin,
///     &PageLocation::new("http://localhost:8080/"),
/// );
/// let script = bootstrap_script(&MountPoint::default(), &config);
/// assert!(script.contains(r#"document.getElementById("root")"#));
/// ```
pub fn bootstrap_script(mount: &MountPoint, config: &BootstrapConfig) -> String {
    format!(
        "window.addEventListener('load', function () {{\n    \
             GraphQLPlayground.init(document.getElementById({mount}), {config})\n\
         }});\n",
        mount = script_json(mount.id()),
        config = script_json(config),
    )
}

/// Generates the HTML source showing a GraphQL Playground interface
/// configured by `config` and mounted into `mount`.
pub fn playground_source(mount: &MountPoint, config: &BootstrapConfig) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="user-scalable=no, initial-scale=1.0, minimum-scale=1.0, maximum-scale=1.0, minimal-ui" />
  <title>{title}</title>
  <link rel="stylesheet" href="{cdn}/static/css/index.css" />
  <link rel="shortcut icon" href="{cdn}/favicon.png" />
  <script src="{cdn}/static/js/middleware.js"></script>
</head>
<body>
  <div id="{mount}"></div>
  <script>
{script}  </script>
</body>
</html>
"#,
        title = html_escape(&config.workspace_name),
        cdn = PLAYGROUND_CDN,
        mount = html_escape(mount.id()),
        script = bootstrap_script(mount, config),
    )
}

/// [`Widget`] rendering the Playground HTML page.
///
/// ```
/// # use goqldom_playground::{
/// #     DeploymentMode, PageLoad, PageLocation, http::playground::PlaygroundPage,
/// #     on_page_load,
/// # };
/// let mut page = PlaygroundPage::default();
/// on_page_load(
///     PageLoad::new(PageLocation::new("http://localhost:8080/")),
///     DeploymentMode::SameOrigin,
///     &mut page,
/// );
/// assert!(page.into_source().contains("GraphQLPlayground.init"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct PlaygroundPage {
    source: String,
}

impl PlaygroundPage {
    /// Returns the rendered page, or an empty string if the widget has not
    /// been initialized.
    pub fn into_source(self) -> String {
        self.source
    }
}

impl Widget for PlaygroundPage {
    fn init(&mut self, mount: &MountPoint, config: &BootstrapConfig) {
        self.source = playground_source(mount, config);
    }
}

/// Serializes `value` as JSON that is safe to inline into a `<script>`
/// element.
fn script_json<T: serde::Serialize + ?Sized>(value: &T) -> String {
    // PANIC: Expecting is OK here, as only string-keyed maps and plain data
    //        are ever serialized, which `serde_json` cannot fail on.
    serde_json::to_string(value)
        .expect("script data serializes to JSON")
        .replace("</", "<\\/")
}

fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
