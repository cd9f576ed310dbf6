/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 Exemel and/or its affiliates.
 */

use std::io;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr, UdpSocket};

use thiserror::Error;

use crate::{StatsdClient, StatsdMetricsSink};

const DEFAULT_CACHE_SIZE: usize = 1024;
const DEFAULT_STATSD_PORT: u16 = 8125;

#[derive(Debug, Error)]
pub enum StatsdClientBuildError {
    #[error("socket error: {0:?}")]
    SocketError(io::Error),
}

#[derive(Debug, Clone)]
pub enum StatsdBackend {
    Udp(SocketAddr, Option<IpAddr>),
}

impl Default for StatsdBackend {
    fn default() -> Self {
        StatsdBackend::Udp(
            SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), DEFAULT_STATSD_PORT),
            None,
        )
    }
}

#[derive(Debug, Clone)]
pub struct StatsdClientConfig {
    backend: StatsdBackend,
    prefix: String,
    pub cache_size: usize,
}

impl Default for StatsdClientConfig {
    fn default() -> Self {
        StatsdClientConfig::with_prefix(String::new())
    }
}

impl StatsdClientConfig {
    pub fn with_prefix<T: Into<String>>(prefix: T) -> Self {
        StatsdClientConfig {
            backend: StatsdBackend::default(),
            prefix: prefix.into(),
            cache_size: DEFAULT_CACHE_SIZE,
        }
    }

    pub fn set_backend(&mut self, target: StatsdBackend) {
        self.backend = target;
    }

    pub fn set_prefix<T: Into<String>>(&mut self, prefix: T) {
        self.prefix = prefix.into();
    }

    pub fn build(&self) -> Result<StatsdClient, StatsdClientBuildError> {
        match &self.backend {
            StatsdBackend::Udp(addr, bind) => {
                let bind_ip = bind.unwrap_or(match addr {
                    SocketAddr::V4(_) => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
                    SocketAddr::V6(_) => IpAddr::V6(Ipv6Addr::UNSPECIFIED),
                });
                let socket = UdpSocket::bind(SocketAddr::new(bind_ip, 0))
                    .map_err(StatsdClientBuildError::SocketError)?;
                let sink = StatsdMetricsSink::udp_with_capacity(*addr, socket, self.cache_size);
                Ok(StatsdClient::new(self.prefix.clone(), sink))
            }
        }
    }
}
