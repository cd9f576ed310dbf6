/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 Exemel and/or its affiliates.
 */

//! Latency stats plugin that bridges the host's latency-measurement hook to
//! a statsd daemon over UDP.
//!
//! Each measurement is forwarded as one timing sample,
//! `<metric-name>:<value>|ms`, under a metric name fixed at initialization
//! from the host-supplied base name and extra tags.

mod metric;

mod plugin;
pub use plugin::StatsdLatencyPlugin;
