use std::any::{Any, TypeId, type_name};
use std::collections::BTreeMap;
use std::fmt::{Debug, Formatter};

use flume::{Receiver, Sender};
use log::{trace, warn};

use crate::state::Update;
use crate::{Error, State, Updater};

/// Owner of every registered [`State`], keyed by type.
pub struct StateCtx {
    states: BTreeMap<TypeId, (&'static str, Box<dyn Any + Send>)>,

    send: Sender<Update>,
    recv: Receiver<Update>,
}

impl Default for StateCtx {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for StateCtx {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.states.values().map(|(name, _)| *name).collect();
        f.debug_struct("StateCtx")
            .field("states", &names)
            .field("pending", &self.recv.len())
            .finish()
    }
}

impl StateCtx {
    pub fn new() -> Self {
        let (send, recv) = flume::unbounded();
        Self {
            states: BTreeMap::new(),
            send,
            recv,
        }
    }

    /// Register `state`, replacing any previous value of the same type.
    pub fn add_state<T: State>(&mut self, state: T) {
        self.states
            .insert(TypeId::of::<T>(), (type_name::<T>(), Box::new(state)));
    }

    pub fn has_state<T: State>(&self) -> bool {
        self.states.contains_key(&TypeId::of::<T>())
    }

    pub fn try_state<T: State>(&self) -> Result<&T, Error> {
        self.states
            .get(&TypeId::of::<T>())
            .and_then(|(_, boxed)| boxed.downcast_ref::<T>())
            .ok_or_else(|| Error::state_not_found(TypeId::of::<T>(), type_name::<T>()))
    }

    pub fn try_state_mut<T: State>(&mut self) -> Result<&mut T, Error> {
        self.states
            .get_mut(&TypeId::of::<T>())
            .and_then(|(_, boxed)| boxed.downcast_mut::<T>())
            .ok_or_else(|| Error::state_not_found(TypeId::of::<T>(), type_name::<T>()))
    }

    /// # Panics
    /// Panics if `T` was never added.
    pub fn state<T: State>(&self) -> &T {
        self.try_state::<T>().unwrap_or_else(|err| panic!("{err}"))
    }

    /// # Panics
    /// Panics if `T` was never added.
    pub fn state_mut<T: State>(&mut self) -> &mut T {
        self.try_state_mut::<T>().unwrap_or_else(|err| panic!("{err}"))
    }

    pub fn updater(&self) -> Updater {
        Updater::new(self.send.clone())
    }

    /// Apply every update received so far. Returns how many were applied.
    pub fn sync(&mut self) -> usize {
        let pending: Vec<Update> = self.recv.try_iter().collect();
        let mut applied = 0;
        for update in pending {
            if self.apply(update) {
                applied += 1;
            }
        }
        applied
    }

    /// Wait for at least one update, then apply it together with anything
    /// else already queued. Returns how many were applied.
    pub async fn sync_next(&mut self) -> usize {
        let first = self.recv.recv_async().await;
        let Ok(first) = first else {
            // Unreachable while `self.send` is alive.
            return 0;
        };
        let applied = usize::from(self.apply(first));
        applied + self.sync()
    }

    fn apply(&mut self, update: Update) -> bool {
        let name = update.name();
        match update {
            Update::Replace { id, value, .. } => match self.states.get_mut(&id) {
                Some((_, slot)) => {
                    trace!("Replacing state {name}");
                    *slot = value;
                    true
                }
                None => {
                    warn!("Dropping replacement for unregistered state {name}");
                    false
                }
            },
            Update::Patch { id, patch, .. } => match self.states.get_mut(&id) {
                Some((_, slot)) => {
                    trace!("Patching state {name}");
                    patch(slot.as_mut());
                    true
                }
                None => {
                    warn!("Dropping patch for unregistered state {name}");
                    false
                }
            },
        }
    }
}
