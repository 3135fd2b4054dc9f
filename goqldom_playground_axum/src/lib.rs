#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]

pub mod extract;

use std::future;

use axum::{Router, response::Html, routing::get};
use goqldom_playground::{DeploymentMode, PageLoad, http::playground::PlaygroundPage, on_page_load};

use self::extract::RequestLocation;

/// Creates a handler that replies with an HTML page containing [GraphQL Playground],
/// bootstrapped for the given [`DeploymentMode`].
///
/// Each request is a separate page load: the configuration is built from
/// scratch out of the request's [`RequestLocation`] and dropped once rendered.
///
/// This does not handle routing, so you can mount it on any endpoint.
///
/// # Example
///
/// ```rust
/// use axum::{routing::get, Router};
/// use goqldom_playground::DeploymentMode;
/// use goqldom_playground_axum::playground;
///
/// let app: Router = Router::new().route("/", get(playground(DeploymentMode::FixedRemote)));
/// ```
///
/// [GraphQL Playground]: https://github.com/graphql/graphql-playground
pub fn playground(
    mode: DeploymentMode,
) -> impl FnOnce(RequestLocation) -> future::Ready<Html<String>> + Clone + Send + Sync + 'static {
    move |RequestLocation(location)| {
        tracing::debug!(%location, %mode, "rendering playground");

        let mut page = PlaygroundPage::default();
        on_page_load(PageLoad::new(location), mode, &mut page);

        future::ready(Html(page.into_source()))
    }
}

/// Creates a [`Router`] serving the [`playground()`] at `/`.
pub fn router(mode: DeploymentMode) -> Router {
    Router::new().route("/", get(playground(mode)))
}
