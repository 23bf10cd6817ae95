//! Startup configuration for the link server
//!

use std::net::{SocketAddr, ToSocketAddrs};
use std::path::{Path, PathBuf};

use crate::constants::{DEFAULT_LISTEN_ADDR, DEFAULT_PAGE_SIZE, DEFAULT_TEMPLATE_DIR};
use crate::error::LinkPagerError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub filename: PathBuf,
    pub per_page: usize,
    pub listen_addr: String,
    pub template_dir: PathBuf,
}

impl ServerConfig {
    /// Config with every default filled in. The filename has no default.
    pub fn new(filename: impl AsRef<Path>) -> ServerConfig {
        ServerConfig {
            filename: filename.as_ref().to_path_buf(),
            per_page: DEFAULT_PAGE_SIZE,
            listen_addr: String::from(DEFAULT_LISTEN_ADDR),
            template_dir: PathBuf::from(DEFAULT_TEMPLATE_DIR),
        }
    }

    pub fn validate(&self) -> Result<(), LinkPagerError> {
        if self.filename.as_os_str().is_empty() {
            return Err(LinkPagerError::invalid_config("filename must be set"));
        }
        if self.per_page == 0 {
            return Err(LinkPagerError::invalid_config("per-page must be positive"));
        }
        if self.template_dir.as_os_str().is_empty() {
            return Err(LinkPagerError::invalid_config("template-dir must be set"));
        }
        self.socket_addr()?;
        Ok(())
    }

    /// Resolve the listen address, accepting `host:port` or a literal socket address
    pub fn socket_addr(&self) -> Result<SocketAddr, LinkPagerError> {
        if self.listen_addr.trim().is_empty() {
            return Err(LinkPagerError::invalid_config("listen-addr must be set"));
        }
        self.listen_addr
            .to_socket_addrs()
            .map_err(|err| {
                LinkPagerError::invalid_config(format!(
                    "listen-addr {:?} is invalid: {}",
                    self.listen_addr, err
                ))
            })?
            .next()
            .ok_or_else(|| {
                LinkPagerError::invalid_config(format!(
                    "listen-addr {:?} did not resolve",
                    self.listen_addr
                ))
            })
    }
}
