/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 Exemel and/or its affiliates.
 */

use std::collections::HashMap;
use std::str::FromStr;

use anyhow::{Context, anyhow};
use yaml_rust::{Yaml, yaml};

/// The host configuration as handed to plugins: a flat map of dotted
/// property keys to scalar values.
#[derive(Clone, Debug, Default)]
pub struct HostConfig {
    values: HashMap<String, String>,
}

impl HostConfig {
    /// Parse a yaml mapping into config properties. Nested mappings are
    /// flattened by joining their keys with `.`.
    pub fn parse_yaml(v: &Yaml) -> anyhow::Result<Self> {
        if let Yaml::Hash(map) = v {
            let mut config = HostConfig::default();
            config.fold_yaml_map(None, map)?;
            Ok(config)
        } else {
            Err(anyhow!(
                "yaml value type for 'host config' should be 'map'"
            ))
        }
    }

    fn fold_yaml_map(&mut self, prefix: Option<&str>, map: &yaml::Hash) -> anyhow::Result<()> {
        for (k, v) in map.iter() {
            let Yaml::String(k) = k else {
                return Err(anyhow!("config keys should be strings"));
            };
            let key = match prefix {
                Some(prefix) => format!("{prefix}.{k}"),
                None => k.to_string(),
            };
            match v {
                Yaml::Hash(inner) => self
                    .fold_yaml_map(Some(&key), inner)
                    .context(format!("invalid value for key {key}"))?,
                Yaml::String(s) => self.set(key, s),
                Yaml::Integer(i) => self.set(key, i.to_string()),
                Yaml::Real(s) => self.set(key, s),
                Yaml::Boolean(b) => self.set(key, b.to_string()),
                _ => return Err(anyhow!("invalid value type for config key {key}")),
            }
        }
        Ok(())
    }

    pub fn set<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.values.insert(key.into(), value.into());
    }

    pub fn has_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn get_str(&self, key: &str) -> anyhow::Result<&str> {
        self.values
            .get(key)
            .map(|v| v.as_str())
            .ok_or_else(|| anyhow!("no value set for config key {key}"))
    }

    pub fn get_u16(&self, key: &str) -> anyhow::Result<u16> {
        let v = self.get_str(key)?;
        u16::from_str(v).map_err(|e| anyhow!("invalid u16 value for config key {key}: {e}"))
    }
}
