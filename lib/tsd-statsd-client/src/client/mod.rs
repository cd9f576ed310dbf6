/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 Exemel and/or its affiliates.
 */

use std::io;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard};
use std::time::Instant;

use log::warn;

use crate::StatsdMetricsSink;

mod formatter;
pub use formatter::MetricFormatter;

/// A fire-and-forget statsd client.
///
/// Samples are formatted into a small datagram buffer and sent over an
/// unreliable transport, so sends may be dropped silently. All methods take
/// `&self` and are safe to call from multiple threads.
pub struct StatsdClient {
    prefix: String,
    sink: Mutex<StatsdMetricsSink>,

    create_instant: Instant,
    last_error_report: AtomicU64,
}

impl StatsdClient {
    pub(crate) fn new(prefix: String, sink: StatsdMetricsSink) -> Self {
        StatsdClient {
            prefix,
            sink: Mutex::new(sink),
            create_instant: Instant::now(),
            last_error_report: AtomicU64::new(0),
        }
    }

    pub fn flush_sink(&self) {
        let r = self.lock_sink().flush();
        if let Err(e) = r {
            self.handle_emit_error(e);
        }
    }

    fn lock_sink(&self) -> MutexGuard<'_, StatsdMetricsSink> {
        // the sink holds no cross-call invariants, a poisoned buffer is
        // still usable
        match self.sink.lock() {
            Ok(guard) => guard,
            Err(e) => e.into_inner(),
        }
    }

    fn handle_emit_error(&self, e: io::Error) {
        let time_slice = self.create_instant.elapsed().as_secs().rotate_right(6); // every 64s
        if self.last_error_report.swap(time_slice, Ordering::Relaxed) != time_slice {
            warn!("sending metrics error: {e:?}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn timing_simple() {
        let buf = Rc::new(Mutex::new(Vec::default()));
        let sink = StatsdMetricsSink::buf_with_capacity(buf.clone(), 32);
        let client = StatsdClient::new("test".to_string(), sink);
        client.timing("req", 20).send();
        client.flush_sink();

        let buf = buf.lock().unwrap();
        assert_eq!(buf.as_slice(), b"test.req:20|ms");
    }

    #[test]
    fn timing_no_prefix() {
        let buf = Rc::new(Mutex::new(Vec::default()));
        let sink = StatsdMetricsSink::buf_with_capacity(buf.clone(), 32);
        let client = StatsdClient::new(String::new(), sink);
        client.timing("req.latency", 150).send();
        client.flush_sink();

        let buf = buf.lock().unwrap();
        assert_eq!(buf.as_slice(), b"req.latency:150|ms");
    }

    #[test]
    fn timing_multiple() {
        let buf = Rc::new(Mutex::new(Vec::default()));
        let sink = StatsdMetricsSink::buf_with_capacity(buf.clone(), 32);
        let client = StatsdClient::new("test".to_string(), sink);
        client.timing("req", 20).send();
        client.timing("req", 30).send();
        client.flush_sink();

        let buf = buf.lock().unwrap();
        assert_eq!(buf.as_slice(), b"test.req:20|ms\ntest.req:30|ms");
    }

    #[test]
    fn timing_multiple_overflow() {
        let buf = Rc::new(Mutex::new(Vec::default()));
        let sink = StatsdMetricsSink::buf_with_capacity(buf.clone(), 16);
        let client = StatsdClient::new("test".to_string(), sink);
        client.timing("req", 20).send();
        client.timing("req", 30).send();
        client.flush_sink();

        let buf = buf.lock().unwrap();
        assert_eq!(buf.as_slice(), b"test.req:20|mstest.req:30|ms");
    }
}
