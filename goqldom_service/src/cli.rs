//! Command line definition.

use clap::{Parser, ValueEnum};
use goqldom_playground::DeploymentMode;

/// Serves the goqldom GraphQL Playground.
#[derive(Clone, Debug, Parser)]
#[command(name = "goqldom-playground", version)]
pub struct Cli {
    /// TCP address to listen on (port `0` picks a free one).
    #[arg(long, env = "GOQLDOM_ADDR", default_value = "127.0.0.1:0")]
    pub addr: String,

    /// Where the Playground sends its queries.
    #[arg(long, env = "GOQLDOM_MODE", value_enum, default_value_t = Mode::SameOrigin)]
    pub mode: Mode,

    /// Open the served page in the default browser once listening.
    #[arg(long, env = "GOQLDOM_OPEN")]
    pub open: bool,

    /// Log filter directive, used when `RUST_LOG` is not set.
    #[arg(long, env = "GOQLDOM_LOG", default_value = "info")]
    pub log_level: String,
}

/// Command line spelling of [`DeploymentMode`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum Mode {
    /// `<page location>graphql` for every endpoint.
    SameOrigin,

    /// Hardcoded absolute endpoints.
    FixedRemote,
}

impl From<Mode> for DeploymentMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::SameOrigin => Self::SameOrigin,
            Mode::FixedRemote => Self::FixedRemote,
        }
    }
}
