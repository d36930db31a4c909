use std::any::{Any, TypeId, type_name};
use std::fmt::{Debug, Formatter};

use flume::Sender;
use log::warn;

/// A value that can live inside a [`StateCtx`](crate::StateCtx).
///
/// `Send` is required because updates are produced on async tasks and shipped
/// back to the owning thread through a channel.
pub trait State: Any + Send {}

pub(crate) type Patch = Box<dyn FnOnce(&mut dyn Any) + Send>;

/// A pending change addressed to one state type.
pub(crate) enum Update {
    Replace {
        id: TypeId,
        name: &'static str,
        value: Box<dyn Any + Send>,
    },
    Patch {
        id: TypeId,
        name: &'static str,
        patch: Patch,
    },
}

impl Update {
    pub(crate) fn name(&self) -> &'static str {
        match self {
            Self::Replace { name, .. } | Self::Patch { name, .. } => name,
        }
    }
}

/// Cloneable handle used by async work to change state owned by a `StateCtx`.
///
/// Nothing is applied until the owner calls [`StateCtx::sync`](crate::StateCtx::sync)
/// or [`StateCtx::sync_next`](crate::StateCtx::sync_next).
#[derive(Clone)]
pub struct Updater {
    send: Sender<Update>,
}

impl Updater {
    pub(crate) fn new(send: Sender<Update>) -> Self {
        Self { send }
    }

    /// Replace the stored `T` with `state`.
    pub fn set<T: State>(&self, state: T) {
        self.send_update(Update::Replace {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
            value: Box::new(state),
        });
    }

    /// Mutate the stored `T` in place once the owner syncs.
    pub fn update<T, F>(&self, f: F)
    where
        T: State,
        F: FnOnce(&mut T) + Send + 'static,
    {
        let patch: Patch = Box::new(move |any: &mut dyn Any| {
            if let Some(state) = any.downcast_mut::<T>() {
                f(state);
            }
        });
        self.send_update(Update::Patch {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
            patch,
        });
    }

    fn send_update(&self, update: Update) {
        let name = update.name();
        if self.send.send(update).is_err() {
            warn!("StateCtx is gone, dropping update for {name}");
        }
    }
}

impl Debug for Updater {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Updater")
            .field("pending", &self.send.len())
            .finish()
    }
}
