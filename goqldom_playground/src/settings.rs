//! Editor preferences handed to the Playground.

use std::{
    borrow::Cow,
    fmt::{self, Write as _},
    num::NonZeroU16,
};

use derive_more::Display;
use indexmap::IndexMap;
use serde::{Serialize, Serializer};

/// Caret rendering style in the query editor.
#[derive(Clone, Copy, Debug, Default, Display, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CursorShape {
    /// Thin vertical bar.
    #[default]
    #[display("line")]
    Line,

    /// Full character cell.
    #[display("block")]
    Block,

    /// Bar below the character.
    #[display("underline")]
    Underline,
}

/// Color scheme of the IDE.
#[derive(Clone, Copy, Debug, Default, Display, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Dark background.
    #[display("dark")]
    Dark,

    /// Light background.
    #[default]
    #[display("light")]
    Light,
}

/// Credential-forwarding policy of outgoing GraphQL requests, as understood by
/// the `fetch` API.
#[derive(Clone, Copy, Debug, Default, Display, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RequestCredentials {
    /// Never send credentials.
    #[default]
    #[display("omit")]
    Omit,

    /// Always send credentials, even cross-origin.
    #[display("include")]
    Include,

    /// Send credentials to the page's own origin only.
    #[display("same-origin")]
    SameOrigin,
}

/// CSS keywords that must stay unquoted in a font stack.
const GENERIC_FAMILIES: &[&str] = &[
    "serif",
    "sans-serif",
    "monospace",
    "cursive",
    "fantasy",
    "system-ui",
    "ui-serif",
    "ui-sans-serif",
    "ui-monospace",
    "ui-rounded",
    "emoji",
    "math",
    "fangsong",
];

/// Ordered fallback list of font names.
///
/// Serialized as a single CSS font stack where named families are quoted (with
/// `'` and `\` escaped) and generic families are not:
///
/// ```
/// # use goqldom_playground::FontFamily;
/// let stack = FontFamily::new(["Monaco", "monospace"]);
/// assert_eq!(stack.to_string(), "'Monaco', monospace");
/// ```
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct FontFamily(Vec<Cow<'static, str>>);

impl FontFamily {
    /// Creates a new [`FontFamily`] out of the given names, most preferred
    /// first.
    pub fn new<I, N>(names: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Cow<'static, str>>,
    {
        Self(names.into_iter().map(Into::into).collect())
    }

    /// Iterates over the font names in fallback order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(AsRef::as_ref)
    }
}

impl Default for FontFamily {
    fn default() -> Self {
        Self::new([
            "Source Code Pro",
            "Consolas",
            "Inconsolata",
            "Droid Sans Mono",
            "Monaco",
            "monospace",
        ])
    }
}

impl fmt::Display for FontFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, name) in self.names().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            if GENERIC_FAMILIES.contains(&name) {
                f.write_str(name)?;
            } else {
                f.write_char('\'')?;
                for c in name.chars() {
                    if matches!(c, '\'' | '\\') {
                        f.write_char('\\')?;
                    }
                    f.write_char(c)?;
                }
                f.write_char('\'')?;
            }
        }
        Ok(())
    }
}

impl Serialize for FontFamily {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

const DEFAULT_FONT_SIZE: NonZeroU16 = NonZeroU16::new(13).unwrap();

/// Editor settings of the Playground, keyed by their dotted setting names.
///
/// The fixed keys are always present. Additional keys may be attached with
/// [`EditorSettings::with_setting()`]; they are serialized after the fixed
/// ones, so the widget sees them last.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EditorSettings {
    /// Opt-in to pre-release features.
    #[serde(rename = "general.betaUpdates")]
    pub beta_updates: bool,

    /// Caret style.
    #[serde(rename = "editor.cursorShape")]
    pub cursor_shape: CursorShape,

    /// Editor text size in points.
    #[serde(rename = "editor.fontSize")]
    pub font_size: NonZeroU16,

    /// Editor font stack.
    #[serde(rename = "editor.fontFamily")]
    pub font_family: FontFamily,

    /// Color scheme.
    #[serde(rename = "editor.theme")]
    pub theme: Theme,

    /// Whether HTTP headers persist across tab switches.
    #[serde(rename = "editor.reuseHeaders")]
    pub reuse_headers: bool,

    /// Credential-forwarding policy for outgoing requests.
    #[serde(rename = "request.credentials")]
    pub request_credentials: RequestCredentials,

    /// Whether response tracing metadata is hidden.
    #[serde(rename = "tracing.hideTracingResponse")]
    pub hide_tracing_response: bool,

    #[serde(flatten)]
    extra: IndexMap<String, serde_json::Value>,
}

impl EditorSettings {
    /// Setting names that are always supplied, in serialization order.
    pub const KEYS: [&'static str; 8] = [
        "general.betaUpdates",
        "editor.cursorShape",
        "editor.fontSize",
        "editor.fontFamily",
        "editor.theme",
        "editor.reuseHeaders",
        "request.credentials",
        "tracing.hideTracingResponse",
    ];

    /// Attaches an additional Playground setting.
    ///
    /// Keys among the fixed [`EditorSettings::KEYS`] are ignored: set the typed
    /// field instead, so every key is serialized exactly once.
    ///
    /// ```
    /// # use goqldom_playground::EditorSettings;
    /// let settings = EditorSettings::default()
    ///     .with_setting("schema.polling.enable", false)
    ///     .with_setting("prettier.tabWidth", 4);
    /// ```
    #[must_use]
    pub fn with_setting(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        let key = key.into();
        if !Self::KEYS.contains(&key.as_str()) {
            self.extra.insert(key, value.into());
        }
        self
    }

    /// Returns the additional settings attached via
    /// [`EditorSettings::with_setting()`].
    pub fn extra(&self) -> &IndexMap<String, serde_json::Value> {
        &self.extra
    }
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            beta_updates: false,
            cursor_shape: CursorShape::Line,
            font_size: DEFAULT_FONT_SIZE,
            font_family: FontFamily::default(),
            theme: Theme::Light,
            reuse_headers: true,
            request_credentials: RequestCredentials::Omit,
            hide_tracing_response: true,
            extra: IndexMap::new(),
        }
    }
}
