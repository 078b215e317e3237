use clap::{Parser, ValueEnum};
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;
use std::path::PathBuf;

pub const LISTEN_ADDR_ENV: &str = "WAYPOST_LISTEN_ADDR";
pub const SETTINGS_BACKEND_ENV: &str = "WAYPOST_SETTINGS_BACKEND";
pub const SETTINGS_PATH_ENV: &str = "WAYPOST_SETTINGS_PATH";
pub const CONTENT_TYPES_ENV: &str = "WAYPOST_CONTENT_TYPES";

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SettingsBackendArg {
    #[value(name = "in-memory")]
    InMemory,
    #[value(name = "file")]
    File,
}

impl Display for SettingsBackendArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsBackendArg::InMemory => write!(f, "in-memory"),
            SettingsBackendArg::File => write!(f, "file"),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "waypost")]
pub struct CLI {
    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    #[arg(
        long,
        env = SETTINGS_BACKEND_ENV,
        value_enum,
        default_value_t = SettingsBackendArg::InMemory
    )]
    pub settings: SettingsBackendArg,

    /// Path of the settings JSON file when the file backend is used.
    #[arg(long, env = SETTINGS_PATH_ENV, required_if_eq("settings", "file"))]
    pub settings_path: Option<PathBuf>,

    /// Optional JSON file declaring the host's content types.
    #[arg(long, env = CONTENT_TYPES_ENV)]
    pub content_types: Option<PathBuf>,
}
