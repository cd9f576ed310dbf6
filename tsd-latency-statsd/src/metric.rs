/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 Exemel and/or its affiliates.
 */

use anyhow::anyhow;

/// Fold space separated `key=value` tags into `base`: each pair appends
/// `._t_<key>.<value>`, with dots inside keys and values replaced by
/// underscores.
pub(crate) fn compose_packet_name(
    base: &str,
    extra_tags: Option<&str>,
) -> anyhow::Result<String> {
    let mut name = base.to_string();
    let Some(tags) = extra_tags else {
        return Ok(name);
    };
    for token in tags.split_ascii_whitespace() {
        let Some((key, value)) = token.split_once('=') else {
            return Err(anyhow!("invalid tag token '{token}': expected key=value"));
        };
        name.push_str("._t_");
        push_folded(&mut name, key);
        name.push('.');
        push_folded(&mut name, value);
    }
    Ok(name)
}

fn push_folded(name: &mut String, part: &str) {
    for c in part.chars() {
        name.push(if c == '.' { '_' } else { c });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_folded_into_name() {
        let name = compose_packet_name("m", Some("a.b=c.d e=f")).unwrap();
        assert_eq!(name, "m._t_a_b.c_d._t_e.f");
    }

    #[test]
    fn no_tags() {
        assert_eq!(compose_packet_name("m", None).unwrap(), "m");
        assert_eq!(compose_packet_name("m", Some("")).unwrap(), "m");
        assert_eq!(compose_packet_name("m", Some("   ")).unwrap(), "m");
    }

    #[test]
    fn malformed_tag_token() {
        assert!(compose_packet_name("m", Some("novalue")).is_err());
        assert!(compose_packet_name("m", Some("a=b novalue")).is_err());
    }
}
