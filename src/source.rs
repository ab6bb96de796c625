//! Simulated asynchronous item source.
//!
//! Items are generated on a worker thread after an artificial latency and
//! delivered to the UI thread over an mpsc channel. Each load carries a
//! generation id so results from a superseded load are dropped.

use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread;
use std::time::Duration;

use log::{info, warn};
use serde::Serialize;

use crate::error::LoadError;

/// Default number of generated items.
pub const DEFAULT_COUNT: usize = 300;
/// Default simulated fetch latency.
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(500);

/// A selectable entry. Immutable once produced by the source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Item {
    pub id: u64,
    pub name: String,
}

impl Item {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Produce `count` items with ids `1..=count` named `Element <id>`.
#[must_use]
pub fn generate_items(count: usize) -> Vec<Item> {
    (1..=count as u64)
        .map(|id| Item::new(id, format!("Element {id}")))
        .collect()
}

/// Knobs controlling the simulated fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceOptions {
    pub count: usize,
    pub latency: Duration,
    /// Resolve the load with this error message instead of data.
    pub fail_with: Option<String>,
    /// Never deliver a result; the UI stays in its loading state.
    pub never_resolve: bool,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            latency: DEFAULT_LATENCY,
            fail_with: None,
            never_resolve: false,
        }
    }
}

/// Observable state of the current load.
#[derive(Debug, Clone)]
pub enum LoadState {
    Loading,
    Ready(Arc<[Item]>),
    Failed(LoadError),
}

struct LoadMessage {
    generation: u64,
    result: Result<Vec<Item>, LoadError>,
}

/// Owner of the candidate set and the channel its loader reports on.
pub struct ItemSource {
    options: SourceOptions,
    state: LoadState,
    generation: u64,
    rx: Option<Receiver<LoadMessage>>,
    held_tx: Option<Sender<LoadMessage>>,
}

impl ItemSource {
    /// Create a source and immediately start the first load.
    pub fn spawn(options: SourceOptions) -> Self {
        let mut source = Self {
            options,
            state: LoadState::Loading,
            generation: 0,
            rx: None,
            held_tx: None,
        };
        source.start_load();
        source
    }

    /// A source that is already resolved with the provided items.
    #[must_use]
    pub fn ready(items: Vec<Item>) -> Self {
        Self {
            options: SourceOptions {
                count: items.len(),
                latency: Duration::ZERO,
                ..SourceOptions::default()
            },
            state: LoadState::Ready(items.into()),
            generation: 0,
            rx: None,
            held_tx: None,
        }
    }

    /// A source that has already failed with `error`.
    #[must_use]
    pub fn failed(error: LoadError) -> Self {
        Self {
            options: SourceOptions::default(),
            state: LoadState::Failed(error),
            generation: 0,
            rx: None,
            held_tx: None,
        }
    }

    fn start_load(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.state = LoadState::Loading;

        let (tx, rx) = mpsc::channel();
        self.rx = Some(rx);

        let generation = self.generation;
        let options = self.options.clone();
        info!(
            "loading {} items (generation {generation}, latency {:?})",
            options.count, options.latency
        );

        if options.never_resolve {
            // Holding the sender keeps the channel from reporting a disconnect.
            self.held_tx = Some(tx);
            return;
        }
        self.held_tx = None;

        thread::spawn(move || {
            thread::sleep(options.latency);
            let result = match options.fail_with {
                Some(message) => Err(LoadError::Simulated(message)),
                None => Ok(generate_items(options.count)),
            };
            let _ = tx.send(LoadMessage { generation, result });
        });
    }

    /// Start a new load generation unless one is already pending.
    ///
    /// Returns `true` if a load was started.
    pub fn reload(&mut self) -> bool {
        if self.is_loading() {
            return false;
        }
        self.start_load();
        true
    }

    /// Drain the loader channel and return whether the state changed.
    pub fn poll(&mut self) -> bool {
        let Some(rx) = self.rx.as_ref() else {
            return false;
        };

        let outcome = loop {
            match rx.try_recv() {
                Ok(message) if message.generation != self.generation => continue,
                Ok(message) => break Some(message.result),
                Err(TryRecvError::Empty) => break None,
                Err(TryRecvError::Disconnected) => break Some(Err(LoadError::Disconnected)),
            }
        };

        let Some(result) = outcome else {
            return false;
        };
        self.rx = None;
        self.state = match result {
            Ok(items) => {
                info!("loaded {} items", items.len());
                LoadState::Ready(items.into())
            }
            Err(err) => {
                warn!("item load failed: {err}");
                LoadState::Failed(err)
            }
        };
        true
    }

    /// Items of the resolved load; empty while loading or after a failure.
    pub fn items(&self) -> &[Item] {
        match &self.state {
            LoadState::Ready(items) => items.as_ref(),
            _ => &[],
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, LoadState::Loading)
    }

    pub fn error(&self) -> Option<&LoadError> {
        match &self.state {
            LoadState::Failed(err) => Some(err),
            _ => None,
        }
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn options(&self) -> &SourceOptions {
        &self.options
    }
}
