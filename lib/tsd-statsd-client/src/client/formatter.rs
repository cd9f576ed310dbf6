/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 Exemel and/or its affiliates.
 */

use itoa::Integer;
use smallvec::SmallVec;

use super::StatsdClient;

/// A timing sample pending submission, `<prefix.><name>:<value>|ms` on the
/// wire.
pub struct MetricFormatter<'a> {
    client: &'a StatsdClient,
    name: &'a str,
    value: SmallVec<[u8; 16]>,
}

impl StatsdClient {
    pub fn timing<'a, T: Integer>(&'a self, name: &'a str, value: T) -> MetricFormatter<'a> {
        let mut buffer = itoa::Buffer::new();
        let value = buffer.format(value);
        MetricFormatter {
            client: self,
            name,
            value: SmallVec::from_slice(value.as_bytes()),
        }
    }
}

impl MetricFormatter<'_> {
    pub fn send(self) {
        let prefix = self.client.prefix.as_str();
        let mut msg_len = self.name.len() + 1 + self.value.len() + 3;
        if !prefix.is_empty() {
            msg_len += prefix.len() + 1;
        }

        let r = self.client.lock_sink().emit(msg_len, |buf| {
            if !prefix.is_empty() {
                buf.extend_from_slice(prefix.as_bytes());
                buf.push(b'.');
            }
            buf.extend_from_slice(self.name.as_bytes());
            buf.push(b':');
            buf.extend_from_slice(self.value.as_slice());
            buf.extend_from_slice(b"|ms");
        });
        if let Err(e) = r {
            self.client.handle_emit_error(e);
        }
    }
}
