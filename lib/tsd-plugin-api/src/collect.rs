/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 Exemel and/or its affiliates.
 */

/// The collector handle the host passes to [`collect_stats`].
///
/// [`collect_stats`]: crate::LatencyStatsPlugin::collect_stats
pub trait StatsCollector {
    fn record(&mut self, name: &str, value: u64);
}
