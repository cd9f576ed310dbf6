/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 Exemel and/or its affiliates.
 */

use std::io;
use std::net::{SocketAddr, UdpSocket};
#[cfg(test)]
use std::rc::Rc;
#[cfg(test)]
use std::sync::Mutex;

#[cfg(test)]
mod buf;
#[cfg(test)]
use buf::BufMetricsSink;

mod udp;
use udp::UdpMetricsSink;

enum MetricsSinkIo {
    #[cfg(test)]
    Buf(BufMetricsSink),
    Udp(UdpMetricsSink),
}

impl MetricsSinkIo {
    fn send_msg(&self, buf: &[u8]) -> io::Result<usize> {
        match self {
            #[cfg(test)]
            MetricsSinkIo::Buf(b) => b.send_msg(buf),
            MetricsSinkIo::Udp(s) => s.send_msg(buf),
        }
    }
}

pub(crate) struct StatsdMetricsSink {
    cache_size: usize,
    buf: Vec<u8>,
    io: MetricsSinkIo,
}

impl StatsdMetricsSink {
    #[cfg(test)]
    pub(crate) fn buf_with_capacity(buf: Rc<Mutex<Vec<u8>>>, cache_size: usize) -> Self {
        StatsdMetricsSink {
            cache_size,
            buf: Vec::with_capacity(cache_size),
            io: MetricsSinkIo::Buf(BufMetricsSink::new(buf)),
        }
    }

    pub(crate) fn udp_with_capacity(
        addr: SocketAddr,
        socket: UdpSocket,
        cache_size: usize,
    ) -> Self {
        StatsdMetricsSink {
            cache_size,
            buf: Vec::with_capacity(cache_size),
            io: MetricsSinkIo::Udp(UdpMetricsSink::new(addr, socket)),
        }
    }

    pub(crate) fn emit<F>(&mut self, msg_len: usize, format: F) -> io::Result<()>
    where
        F: FnOnce(&mut Vec<u8>),
    {
        if self.buf.is_empty() {
            format(&mut self.buf);
        } else if self.buf.len() + 1 + msg_len > self.cache_size {
            self.flush_buf()?;
            format(&mut self.buf);
        } else {
            self.buf.push(b'\n');
            format(&mut self.buf);
        }
        Ok(())
    }

    pub(crate) fn flush(&mut self) -> io::Result<()> {
        if self.buf.is_empty() {
            return Ok(());
        }
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> io::Result<()> {
        self.io.send_msg(&self.buf)?;
        self.buf.clear();
        Ok(())
    }
}
