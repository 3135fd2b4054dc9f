//! One-shot page-load bootstrap of the Playground widget.

use std::borrow::Cow;

use derive_more::Display;

use crate::config::{BootstrapConfig, DeploymentMode, PageLocation};

/// Identifier of the default [`MountPoint`] element.
pub const DEFAULT_MOUNT_ID: &str = "root";

/// Page element the widget renders itself into, referenced by its `id`.
#[derive(Clone, Debug, Display, Eq, Hash, PartialEq)]
pub struct MountPoint(Cow<'static, str>);

impl MountPoint {
    /// Creates a [`MountPoint`] referencing the element with the given `id`.
    pub fn new(id: impl Into<Cow<'static, str>>) -> Self {
        Self(id.into())
    }

    /// Returns the element `id`.
    pub fn id(&self) -> &str {
        &self.0
    }
}

impl Default for MountPoint {
    fn default() -> Self {
        Self::new(DEFAULT_MOUNT_ID)
    }
}

/// Page-level `load` signal.
///
/// Neither [`Clone`] nor [`Copy`]: [`on_page_load()`] consumes it, so a
/// single signal initializes the widget at most once.
#[derive(Debug)]
pub struct PageLoad {
    location: PageLocation,
}

impl PageLoad {
    /// Signals that the page hosted at `location` has finished loading.
    pub fn new(location: PageLocation) -> Self {
        Self { location }
    }

    /// Returns the location of the loaded page.
    pub fn location(&self) -> &PageLocation {
        &self.location
    }
}

/// External widget initialization entry point.
///
/// Whatever happens inside [`Widget::init()`] is opaque to the bootstrap: no
/// result is inspected and nothing is retried.
pub trait Widget {
    /// Renders the widget into `mount`, configured by `config`.
    fn init(&mut self, mount: &MountPoint, config: &BootstrapConfig);
}

impl<W: Widget + ?Sized> Widget for &mut W {
    fn init(&mut self, mount: &MountPoint, config: &BootstrapConfig) {
        (**self).init(mount, config)
    }
}

/// Builds a fresh [`BootstrapConfig`] for `mode` and hands it over to
/// `widget`, mounted at the [default](MountPoint::default) element.
///
/// The configuration is dropped once `widget` returns.
pub fn on_page_load<W: Widget>(signal: PageLoad, mode: DeploymentMode, mut widget: W) {
    let config = BootstrapConfig::build(mode, &signal.location);
    widget.init(&MountPoint::default(), &config);
}
