/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 Exemel and/or its affiliates.
 */

use std::net::ToSocketAddrs;
use std::str::FromStr;

use anyhow::{Context, anyhow};
use async_trait::async_trait;
use log::debug;

use tsd_plugin_api::{HostConfig, LatencyStatsPlugin, MetricsName, StatsCollector};
use tsd_statsd_client::{StatsdBackend, StatsdClient, StatsdClientConfig};

use crate::metric;

const CONFIG_STATSD_HOST: &str = "tsd.latency_stats.statsd.host";
const CONFIG_STATSD_PORT: &str = "tsd.latency_stats.statsd.port";

const DEFAULT_STATSD_PORT: u16 = 8125;

/// Forwards each latency measurement to a statsd daemon as one timing
/// sample.
#[derive(Default)]
pub struct StatsdLatencyPlugin {
    packet_name: MetricsName,
    statsd_host: String,
    statsd_port: u16,
    statsd: Option<StatsdClient>,
}

#[async_trait]
impl LatencyStatsPlugin for StatsdLatencyPlugin {
    fn initialize(
        &mut self,
        config: &HostConfig,
        metric_name: &str,
        extra_tags: Option<&str>,
    ) -> anyhow::Result<()> {
        let name = metric::compose_packet_name(metric_name, extra_tags)?;
        self.packet_name = MetricsName::from_str(&name)
            .map_err(|e| anyhow!("invalid metric name '{name}': {e}"))?;
        self.statsd_host = config
            .get_str(CONFIG_STATSD_HOST)
            .context("statsd host is required")?
            .to_string();
        self.statsd_port = if config.has_key(CONFIG_STATSD_PORT) {
            config.get_u16(CONFIG_STATSD_PORT)?
        } else {
            DEFAULT_STATSD_PORT
        };
        Ok(())
    }

    fn start(&mut self) -> anyhow::Result<()> {
        let host = self.statsd_host.as_str();
        let addr = (host, self.statsd_port)
            .to_socket_addrs()
            .context(format!(
                "unable to resolve statsd peer {host}:{}",
                self.statsd_port
            ))?
            .next()
            .ok_or_else(|| {
                anyhow!("no address found for statsd peer {host}:{}", self.statsd_port)
            })?;

        let mut config = StatsdClientConfig::with_prefix("");
        config.set_backend(StatsdBackend::Udp(addr, None));
        let client = config.build().context("failed to build statsd client")?;
        debug!("emitting latency stats to statsd peer {addr}");
        self.statsd = Some(client);
        Ok(())
    }

    async fn shutdown(&mut self) -> anyhow::Result<()> {
        if let Some(statsd) = self.statsd.take() {
            statsd.flush_sink();
        }
        Ok(())
    }

    fn version(&self) -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    fn collect_stats(&self, _collector: &mut dyn StatsCollector) {
        // no-op
    }

    fn add(&self, value: u64) {
        if let Some(statsd) = &self.statsd {
            statsd.timing(self.packet_name.as_str(), value).send();
            statsd.flush_sink();
        }
    }
}
