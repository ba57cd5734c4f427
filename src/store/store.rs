use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

#[cfg(feature = "emitter")]
use std::sync::Mutex;

#[cfg(feature = "emitter")]
use event_emitter_rs::EventEmitter;
use serde::{Deserialize, Serialize};

use super::change::ChangeRecord;
use super::seed::{seed_cases, seed_clients};
use super::{changes, StoreError, UpdateOutcome};
use crate::config::{DuplicateIdPolicy, StoreConfig};
use crate::model::{Case, CasePatch, Client, ClientPatch, Record, View};

/// Serializable copy of everything the store holds, minus the journal.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreSnapshot {
    pub cases: Vec<Case>,
    pub clients: Vec<Client>,
    pub current_view: View,
}

struct StoreState {
    cases: Vec<Case>,
    clients: Vec<Client>,
    current_view: View,
    changes: Vec<ChangeRecord>,
}

impl StoreState {
    fn journal<T: Serialize + ?Sized>(
        &mut self,
        name: &str,
        payload: &T,
    ) -> Result<ChangeRecord, StoreError> {
        let sequence = self.changes.len() as u64 + 1;
        let record = ChangeRecord::encode(name, payload, sequence)
            .map_err(|e| StoreError::Encode(e.message))?;
        self.changes.push(record.clone());
        Ok(record)
    }
}

/// Shared in-memory store of cases and clients.
///
/// Clone-friendly via Arc: every clone observes and mutates the same state.
#[derive(Clone)]
pub struct Store {
    state: Arc<RwLock<StoreState>>,
    config: StoreConfig,
    #[cfg(feature = "emitter")]
    emitter: Arc<Mutex<EventEmitter>>,
}

impl Default for Store {
    fn default() -> Self {
        Self::seeded()
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Store {
    pub fn new(config: StoreConfig) -> Self {
        let (cases, clients) = if config.seed {
            (seed_cases(), seed_clients())
        } else {
            (Vec::new(), Vec::new())
        };
        Self::with_records(config, cases, clients)
    }

    /// A store loaded with the demo cases and clients.
    pub fn seeded() -> Self {
        Self::new(StoreConfig::default())
    }

    /// A store with empty collections.
    pub fn empty() -> Self {
        Self::new(StoreConfig::unseeded())
    }

    /// A store holding exactly the given records, in the given order.
    pub fn with_records(config: StoreConfig, cases: Vec<Case>, clients: Vec<Client>) -> Self {
        tracing::debug!(
            cases = cases.len(),
            clients = clients.len(),
            view = %config.initial_view,
            "store initialized"
        );
        let state = StoreState {
            cases,
            clients,
            current_view: config.initial_view,
            changes: Vec::new(),
        };
        Store {
            state: Arc::new(RwLock::new(state)),
            config,
            #[cfg(feature = "emitter")]
            emitter: Arc::new(Mutex::new(EventEmitter::new())),
        }
    }

    pub fn from_snapshot(config: StoreConfig, snapshot: StoreSnapshot) -> Self {
        let store = Self::with_records(config, snapshot.cases, snapshot.clients);
        if let Ok(mut state) = store.state.write() {
            state.current_view = snapshot.current_view;
        }
        store
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    fn read(&self, operation: &'static str) -> Result<RwLockReadGuard<'_, StoreState>, StoreError> {
        self.state
            .read()
            .map_err(|_| StoreError::LockPoisoned(operation))
    }

    fn write(
        &self,
        operation: &'static str,
    ) -> Result<RwLockWriteGuard<'_, StoreState>, StoreError> {
        self.state
            .write()
            .map_err(|_| StoreError::LockPoisoned(operation))
    }

    // ------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------

    /// All cases in insertion order.
    pub fn cases(&self) -> Result<Vec<Case>, StoreError> {
        Ok(self.read("cases")?.cases.clone())
    }

    /// All clients in insertion order.
    pub fn clients(&self) -> Result<Vec<Client>, StoreError> {
        Ok(self.read("clients")?.clients.clone())
    }

    /// First case carrying `id`, if any.
    pub fn case(&self, id: &str) -> Result<Option<Case>, StoreError> {
        Ok(find(&self.read("case")?.cases, id).cloned())
    }

    /// First client carrying `id`, if any.
    pub fn client(&self, id: &str) -> Result<Option<Client>, StoreError> {
        Ok(find(&self.read("client")?.clients, id).cloned())
    }

    pub fn current_view(&self) -> Result<View, StoreError> {
        Ok(self.read("current_view")?.current_view)
    }

    pub fn snapshot(&self) -> Result<StoreSnapshot, StoreError> {
        let state = self.read("snapshot")?;
        Ok(StoreSnapshot {
            cases: state.cases.clone(),
            clients: state.clients.clone(),
            current_view: state.current_view,
        })
    }

    /// Every journaled change, oldest first.
    pub fn changes(&self) -> Result<Vec<ChangeRecord>, StoreError> {
        Ok(self.read("changes")?.changes.clone())
    }

    /// Journaled changes with a sequence greater than `sequence`.
    pub fn changes_since(&self, sequence: u64) -> Result<Vec<ChangeRecord>, StoreError> {
        let state = self.read("changes_since")?;
        Ok(state
            .changes
            .iter()
            .filter(|change| change.sequence > sequence)
            .cloned()
            .collect())
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    /// Append a case to the end of the collection.
    ///
    /// The caller supplies the id and timestamps. Whether an id that is already
    /// taken is accepted depends on [`StoreConfig::duplicate_ids`].
    pub fn add_case(&self, case: Case) -> Result<(), StoreError> {
        let change = {
            let mut state = self.write("add_case")?;
            check_duplicate(&state.cases, &case, self.config.duplicate_ids)?;
            let change = state.journal(changes::CASE_ADDED, &case)?;
            state.cases.push(case);
            change
        };
        tracing::debug!(
            collection = Case::COLLECTION,
            sequence = change.sequence,
            "case added"
        );
        self.notify(&change);
        Ok(())
    }

    /// Apply `patch` to every case whose id is `id`.
    ///
    /// An unknown id leaves the collection untouched and reports
    /// [`UpdateOutcome::NotFound`].
    pub fn update_case(&self, id: &str, patch: &CasePatch) -> Result<UpdateOutcome, StoreError> {
        let change = {
            let mut state = self.write("update_case")?;
            let matched = patch_matching(&mut state.cases, id, |case| patch.apply(case));
            if matched == 0 {
                None
            } else {
                let payload = (id.to_string(), patch.clone());
                Some((matched, state.journal(changes::CASE_UPDATED, &payload)?))
            }
        };

        match change {
            Some((matched, change)) => {
                tracing::debug!(
                    collection = Case::COLLECTION,
                    id,
                    matched,
                    fields = ?patch.fields(),
                    sequence = change.sequence,
                    "case updated"
                );
                self.notify(&change);
                Ok(UpdateOutcome::Updated(matched))
            }
            None => {
                tracing::trace!(collection = Case::COLLECTION, id, "update skipped, id not found");
                Ok(UpdateOutcome::NotFound)
            }
        }
    }

    /// Append a client to the end of the collection. See [`Store::add_case`].
    pub fn add_client(&self, client: Client) -> Result<(), StoreError> {
        let change = {
            let mut state = self.write("add_client")?;
            check_duplicate(&state.clients, &client, self.config.duplicate_ids)?;
            let change = state.journal(changes::CLIENT_ADDED, &client)?;
            state.clients.push(client);
            change
        };
        tracing::debug!(
            collection = Client::COLLECTION,
            sequence = change.sequence,
            "client added"
        );
        self.notify(&change);
        Ok(())
    }

    /// Apply `patch` to every client whose id is `id`. See [`Store::update_case`].
    pub fn update_client(
        &self,
        id: &str,
        patch: &ClientPatch,
    ) -> Result<UpdateOutcome, StoreError> {
        let change = {
            let mut state = self.write("update_client")?;
            let matched = patch_matching(&mut state.clients, id, |client| patch.apply(client));
            if matched == 0 {
                None
            } else {
                let payload = (id.to_string(), patch.clone());
                Some((matched, state.journal(changes::CLIENT_UPDATED, &payload)?))
            }
        };

        match change {
            Some((matched, change)) => {
                tracing::debug!(
                    collection = Client::COLLECTION,
                    id,
                    matched,
                    fields = ?patch.fields(),
                    sequence = change.sequence,
                    "client updated"
                );
                self.notify(&change);
                Ok(UpdateOutcome::Updated(matched))
            }
            None => {
                tracing::trace!(collection = Client::COLLECTION, id, "update skipped, id not found");
                Ok(UpdateOutcome::NotFound)
            }
        }
    }

    pub fn set_current_view(&self, view: View) -> Result<(), StoreError> {
        let change = {
            let mut state = self.write("set_current_view")?;
            let change = state.journal(changes::VIEW_CHANGED, &view)?;
            state.current_view = view;
            change
        };
        tracing::debug!(%view, sequence = change.sequence, "view changed");
        self.notify(&change);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Change notification
    // ------------------------------------------------------------------

    /// Register a listener for a change name (or [`changes::ANY`]).
    ///
    /// The listener receives the JSON of the [`ChangeRecord`] on a worker
    /// thread after the mutation is committed. Returns the listener id.
    #[cfg(feature = "emitter")]
    pub fn on<F>(&self, change: &str, listener: F) -> Result<String, StoreError>
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        let mut emitter = self
            .emitter
            .lock()
            .map_err(|_| StoreError::LockPoisoned("on"))?;
        Ok(emitter.on(change, listener))
    }

    /// Remove a listener by the id [`Store::on`] returned.
    #[cfg(feature = "emitter")]
    pub fn off(&self, listener_id: &str) -> Result<bool, StoreError> {
        let mut emitter = self
            .emitter
            .lock()
            .map_err(|_| StoreError::LockPoisoned("off"))?;
        Ok(emitter.remove_listener(listener_id).is_some())
    }

    #[cfg(feature = "emitter")]
    fn notify(&self, change: &ChangeRecord) {
        let json = match serde_json::to_string(change) {
            Ok(json) => json,
            Err(err) => {
                tracing::warn!(change = %change.name, error = %err, "change not emitted");
                return;
            }
        };
        match self.emitter.lock() {
            Ok(mut emitter) => {
                let _ = emitter.emit(&change.name, json.clone());
                let _ = emitter.emit(changes::ANY, json);
            }
            Err(_) => tracing::warn!(change = %change.name, "emitter lock poisoned"),
        }
    }

    #[cfg(not(feature = "emitter"))]
    fn notify(&self, _change: &ChangeRecord) {}
}

fn find<'a, R: Record>(records: &'a [R], id: &str) -> Option<&'a R> {
    records.iter().find(|record| record.id() == id)
}

fn check_duplicate<R: Record>(
    records: &[R],
    record: &R,
    policy: DuplicateIdPolicy,
) -> Result<(), StoreError> {
    if find(records, record.id()).is_none() {
        return Ok(());
    }
    match policy {
        DuplicateIdPolicy::Allow => {
            tracing::warn!(
                collection = R::COLLECTION,
                id = record.id(),
                "appending record with duplicate id"
            );
            Ok(())
        }
        DuplicateIdPolicy::Reject => Err(StoreError::DuplicateId {
            collection: R::COLLECTION,
            id: record.id().to_string(),
        }),
    }
}

fn patch_matching<R: Record, F: Fn(&mut R)>(records: &mut [R], id: &str, apply: F) -> usize {
    let mut matched = 0;
    for record in records.iter_mut().filter(|record| record.id() == id) {
        apply(record);
        matched += 1;
    }
    matched
}
