//! Hotkey subsystem lifecycle
//!
//! [`Hotkeys::init`] builds both binding maps from configuration and then
//! attaches one key-press handler per namespace to the [`EventBus`]. The maps
//! are frozen behind `Arc`s from that point, so handlers may run on any
//! thread without locking. Dropping the subsystem (or [`Hotkeys::deinit`])
//! detaches the handlers before the maps go away.

use std::sync::Arc;

use crate::config::ConfigSource;
use crate::events::{CallbackId, EventBus, KEY_ACTION};
use crate::keymap::{
    build_maps, dispatch, ActionId, ActionTable, BindingMap, BuildReport, KeyCode, KeymapError,
    Namespace,
};

/// A live hotkey subsystem attached to an event bus
pub struct Hotkeys {
    bus: Arc<dyn EventBus>,
    local: Arc<BindingMap>,
    global: Arc<BindingMap>,
    actions: ActionTable,
    report: BuildReport,
    /// Handler registrations, in [`Namespace::ALL`] order; `None` once detached
    callbacks: Option<[CallbackId; 2]>,
}

impl Hotkeys {
    /// Initialize the key maps from configuration and start dispatching
    ///
    /// Malformed or conflicting bindings are logged and left out. The only
    /// failure is running out of memory, in which case nothing is registered.
    pub fn init(bus: Arc<dyn EventBus>, config: &dyn ConfigSource) -> Result<Self, KeymapError> {
        let actions = ActionTable::new()?;

        for namespace in Namespace::ALL {
            bus.create_integer(namespace.variable());
        }
        bus.create_integer(KEY_ACTION);

        let (maps, report) = build_maps(config);
        let local = Arc::new(maps.local);
        let global = Arc::new(maps.global);

        let callbacks = Namespace::ALL.map(|namespace| {
            let map = Arc::clone(match namespace {
                Namespace::Local => &local,
                Namespace::Global => &global,
            });
            bus.add_callback(
                namespace.variable(),
                Arc::new(move |bus: &dyn EventBus, raw: i64| {
                    dispatch::key_to_action(&map, bus, namespace, raw)
                }),
            )
        });

        tracing::info!(
            "Hotkeys ready: {} actions, {} local and {} global bindings",
            actions.len(),
            local.len(),
            global.len()
        );

        Ok(Self {
            bus,
            local,
            global,
            actions,
            report,
            callbacks: Some(callbacks),
        })
    }

    /// Detach from the event bus and free the maps
    pub fn deinit(mut self) {
        self.detach();
    }

    fn detach(&mut self) {
        let Some(callbacks) = self.callbacks.take() else {
            return;
        };
        // Reverse registration order
        for (namespace, id) in Namespace::ALL.into_iter().zip(callbacks).rev() {
            if !self.bus.del_callback(namespace.variable(), id) {
                tracing::debug!("{} key handler was already detached", namespace);
            }
        }
        tracing::debug!("Hotkeys detached");
    }

    /// Pure lookup of a key code in one namespace
    pub fn resolve(&self, code: KeyCode, namespace: Namespace) -> Option<ActionId> {
        self.map(namespace).lookup(code)
    }

    /// The bindings of one namespace
    pub fn map(&self, namespace: Namespace) -> &BindingMap {
        match namespace {
            Namespace::Local => &self.local,
            Namespace::Global => &self.global,
        }
    }

    /// Key codes bound to `action` in `namespace`
    pub fn keys_for(&self, action: ActionId, namespace: Namespace) -> Vec<KeyCode> {
        self.map(namespace).keys_for(action)
    }

    /// Names of every known action
    pub fn actions(&self) -> &ActionTable {
        &self.actions
    }

    /// Diagnostics collected while building the maps
    pub fn report(&self) -> &BuildReport {
        &self.report
    }

    pub fn is_attached(&self) -> bool {
        self.callbacks.is_some()
    }
}

impl Drop for Hotkeys {
    fn drop(&mut self) {
        self.detach();
    }
}

impl std::fmt::Debug for Hotkeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Hotkeys")
            .field("local", &self.local.len())
            .field("global", &self.global.len())
            .field("actions", &self.actions.len())
            .field("attached", &self.is_attached())
            .finish()
    }
}

/// Tear down a subsystem handle; an absent handle is a no-op
pub fn deinit(hotkeys: Option<Hotkeys>) {
    if let Some(hotkeys) = hotkeys {
        hotkeys.deinit();
    }
}
