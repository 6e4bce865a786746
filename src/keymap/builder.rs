//! Builds binding maps from configuration
//!
//! Every known action is read twice, once per [`Namespace`], in registry
//! order. Bad items are reported and skipped; they never abort the build.
//! When two actions claim the same key, the one earlier in registry order
//! keeps it.

use super::action::{ActionId, ACTIONS};
use super::binding::Binding;
use super::codec::parse_key_string;
use super::dispatch::Namespace;
use super::error::KeymapError;
use super::map::BindingMap;
use crate::config::{ConfigSource, KEY_SEPARATOR};

/// Outcome of a build: how many bindings took effect and what was dropped
#[derive(Debug, Default)]
pub struct BuildReport {
    pub bound: usize,
    pub issues: Vec<KeymapError>,
}

impl BuildReport {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    fn absorb(&mut self, other: BuildReport) {
        self.bound += other.bound;
        self.issues.extend(other.issues);
    }
}

/// The local and global maps built from one configuration
#[derive(Debug, Default)]
pub struct BindingMaps {
    pub local: BindingMap,
    pub global: BindingMap,
}

impl BindingMaps {
    pub fn get(&self, namespace: Namespace) -> &BindingMap {
        match namespace {
            Namespace::Local => &self.local,
            Namespace::Global => &self.global,
        }
    }

    fn get_mut(&mut self, namespace: Namespace) -> &mut BindingMap {
        match namespace {
            Namespace::Local => &mut self.local,
            Namespace::Global => &mut self.global,
        }
    }
}

/// Sets up all key mappings of one action from one configuration entry
///
/// `conf_name` is read from `config` as a tab-separated list of key strings.
/// A missing entry binds nothing.
pub fn map_action(
    config: &dyn ConfigSource,
    map: &mut BindingMap,
    namespace: Namespace,
    conf_name: &str,
    action: ActionId,
) -> BuildReport {
    let mut report = BuildReport::default();
    let Some(keys) = config.get_string(conf_name) else {
        return report;
    };

    for key in keys.split(KEY_SEPARATOR).filter(|key| !key.is_empty()) {
        let code = match parse_key_string(key) {
            Ok(code) => code,
            Err(e) => {
                tracing::warn!("{} ({})", e, conf_name);
                report.issues.push(e);
                continue;
            }
        };

        if code.is_unset() {
            tracing::debug!("{} explicitly unset", conf_name);
            continue;
        }

        match map.insert(Binding::new(code, action)) {
            Ok(()) => report.bound += 1,
            Err(existing) => {
                let e = KeymapError::DuplicateBinding {
                    key: key.to_string(),
                    code,
                    namespace,
                    kept: existing.action,
                    rejected: action,
                };
                tracing::warn!("{}", e);
                report.issues.push(e);
            }
        }
    }
    report
}

/// Build both namespace maps for every known action
pub fn build_maps(config: &dyn ConfigSource) -> (BindingMaps, BuildReport) {
    let mut maps = BindingMaps::default();
    let mut report = BuildReport::default();

    for desc in ACTIONS {
        for namespace in Namespace::ALL {
            let conf_name = namespace.config_key(desc.id);
            let map = maps.get_mut(namespace);
            report.absorb(map_action(config, map, namespace, &conf_name, desc.id));
        }
    }

    tracing::debug!(
        "Built hotkey maps: {} local, {} global, {} issues",
        maps.local.len(),
        maps.global.len(),
        report.issues.len()
    );
    (maps, report)
}
