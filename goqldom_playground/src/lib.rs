#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]

pub mod bootstrap;
pub mod config;
pub mod http;
pub mod query;
pub mod settings;

#[doc(inline)]
pub use self::{
    bootstrap::{MountPoint, PageLoad, Widget, on_page_load},
    config::{BootstrapConfig, DeploymentMode, PageLocation, TabDescriptor},
    query::QueryTemplate,
    settings::{CursorShape, EditorSettings, FontFamily, RequestCredentials, Theme},
};
