/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 Exemel and/or its affiliates.
 */

mod sink;
use sink::StatsdMetricsSink;

mod client;
pub use client::StatsdClient;

mod config;
pub use config::{StatsdBackend, StatsdClientBuildError, StatsdClientConfig};
