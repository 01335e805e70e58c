//! Campaign configuration state: the column-fix collection, the
//! single-writer container the UI mutates through, and the locally cached
//! binary snapshot.

pub mod artifact;
pub mod config;

pub use artifact::*;
pub use config::*;

use crate::chain::FixChain;

/// Identifies a subscription so it can be dropped later.
pub type SubscriberId = usize;

type Subscriber = Box<dyn Fn(&CsvConfig)>;

/// In-process, single-writer container for a campaign's CSV configuration.
///
/// Mutations are synchronous and last-write-wins; subscribers are notified
/// once after every mutation. This matches the single-threaded UI event
/// loop the configuration dialogs run on — there is no locking and no
/// conflict resolution beyond call order.
pub struct ConfigStore {
    config: CsvConfig,
    subscribers: Vec<(SubscriberId, Subscriber)>,
    next_subscriber: SubscriberId,
}

impl ConfigStore {
    pub fn new(config: CsvConfig) -> Self {
        Self {
            config,
            subscribers: Vec::new(),
            next_subscriber: 0,
        }
    }

    pub fn config(&self) -> &CsvConfig {
        &self.config
    }

    /// Registers a listener invoked after every mutation with the new state.
    pub fn subscribe(&mut self, listener: impl Fn(&CsvConfig) + 'static) -> SubscriberId {
        let id = self.next_subscriber;
        self.next_subscriber += 1;
        self.subscribers.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriberId) {
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
    }

    /// Stores the fix for a column, replacing any existing one in place.
    pub fn add_column_fix(&mut self, column_name: impl Into<String>, chain: FixChain) {
        self.config
            .add_or_update(ColumnFix::new(column_name, chain));
        self.notify();
    }

    pub fn add_column_fixes(&mut self, fixes: impl IntoIterator<Item = ColumnFix>) {
        self.config.add_or_update_many(fixes);
        self.notify();
    }

    pub fn remove_column_fix(&mut self, column_name: &str) {
        self.config.remove(column_name);
        self.notify();
    }

    pub fn clear_column_fixes(&mut self) {
        self.config.clear();
        self.notify();
    }

    /// Replaces the detected-column list after a new lead-list upload.
    pub fn set_detected_columns(&mut self, columns: Vec<String>) {
        self.config.set_detected_columns(columns);
        self.notify();
    }

    fn notify(&self) {
        for (_, listener) in &self.subscribers {
            listener(&self.config);
        }
    }
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new(CsvConfig::default())
    }
}
