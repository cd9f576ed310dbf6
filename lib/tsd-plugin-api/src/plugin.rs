/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 Exemel and/or its affiliates.
 */

use async_trait::async_trait;

use crate::{HostConfig, StatsCollector};

/// The lifecycle contract for latency stats plugins.
///
/// The host guarantees the call order initialize → start → {add,
/// collect_stats}* → shutdown, with each transition made while holding
/// exclusive access to the plugin. `add` may be called concurrently from
/// multiple threads between `start` and `shutdown`.
#[async_trait]
pub trait LatencyStatsPlugin: Send + Sync {
    /// Read plugin settings from the host configuration and fix the metric
    /// name the aggregations will be emitted under.
    ///
    /// Must not open any I/O resource. An error aborts host startup, so
    /// missing or malformed configuration should fail here.
    fn initialize(
        &mut self,
        config: &HostConfig,
        metric_name: &str,
        extra_tags: Option<&str>,
    ) -> anyhow::Result<()>;

    /// Called once when the plugin goes live. `add` will not be called
    /// before this. Under host race conditions this may never be called on
    /// a given instance.
    fn start(&mut self) -> anyhow::Result<()>;

    /// Flush buffers and release connections on host shutdown.
    async fn shutdown(&mut self) -> anyhow::Result<()>;

    /// Version string in MAJOR.MINOR.MAINT form, logged by the host. The
    /// MAJOR version should match the host major version the plugin is
    /// built for.
    fn version(&self) -> &'static str;

    /// Called on each host statistics collection pass.
    fn collect_stats(&self, collector: &mut dyn StatsCollector);

    /// Add a measured value, in milliseconds.
    fn add(&self, value: u64);
}
