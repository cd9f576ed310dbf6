/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 Exemel and/or its affiliates.
 */

//! The plugin contract the time-series database host drives.
//!
//! The host loads a plugin as `Box<dyn LatencyStatsPlugin>` and calls it in
//! the fixed order initialize → start → {add, collect_stats}* → shutdown.

mod metrics;
pub use metrics::{MetricsName, ParseError};

mod config;
pub use config::HostConfig;

mod collect;
pub use collect::StatsCollector;

mod plugin;
pub use plugin::LatencyStatsPlugin;
