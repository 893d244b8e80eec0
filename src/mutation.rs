//! The mutation dispatcher: create, update, delete, and entity-specific
//! toggles as independent asynchronous operations.
//!
//! Every mutation runs as its own `Cmd`; several can be in flight at
//! once (toggling two different notifications, say). Each in-flight
//! write is tracked by item id so the view can disable only the
//! affected row's controls. The flag is a best-effort guard against
//! double submission, not a mutual-exclusion guarantee: a second
//! mutation for an id that is already busy is refused locally, but
//! nothing serializes concurrent writes to different items.
//!
//! Drafts are validated before dispatch; an invalid payload is returned
//! as a [`ValidationError`](crate::error::ValidationError) and never
//! leaves the client. Deletes are confirm-then-request-then-invalidate,
//! never optimistic: the item stays in place until the server confirms.
//!
//! Completion comes back as [`MutationDoneMsg`]; the controller clears
//! the pending-delete state, invalidates the accessor's cache on
//! success, and raises the success or failure toast.

use crate::entity::{DraftPayload, Language, ListItem};
use crate::error::{MutationError, ValidationError};
use crate::remote::CollectionClient;
use bubbletea_rs::{Cmd, Msg};
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tracing::{debug, warn};

static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// The kind of write a mutation performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    /// Create a new item.
    Create,
    /// Update an existing item.
    Update,
    /// Delete an item.
    Delete,
    /// Apply an entity-specific toggle.
    Toggle,
}

/// What a successful mutation produced.
#[derive(Debug, Clone)]
pub enum MutationOutcome<T: ListItem> {
    /// The created item, as persisted by the backend.
    Created(T),
    /// The updated item, as persisted by the backend.
    Updated(T),
    /// The id of the deleted item.
    Deleted(T::Id),
    /// The toggled item, as persisted by the backend.
    Toggled(T),
}

/// Message sent when a mutation completes, successfully or not.
pub struct MutationDoneMsg<T: ListItem> {
    /// The dispatcher instance this message belongs to.
    pub id: i64,
    /// The affected item id; `None` for creates.
    pub item_id: Option<T::Id>,
    /// What kind of write this was.
    pub kind: MutationKind,
    /// The outcome.
    pub result: Result<MutationOutcome<T>, MutationError>,
}

/// Issues writes for one entity collection and tracks per-item
/// in-flight state.
pub struct Dispatcher<T: ListItem, C: CollectionClient<T>> {
    id: i64,
    client: Arc<C>,
    language: Language,
    in_flight: HashMap<T::Id, MutationKind>,
}

impl<T: ListItem, C: CollectionClient<T>> Dispatcher<T, C> {
    /// Creates a dispatcher for a language.
    pub fn new(client: Arc<C>, language: Language) -> Self {
        Self {
            id: next_id(),
            client,
            language,
            in_flight: HashMap::new(),
        }
    }

    /// Whether a write for this item is in flight. The view uses this
    /// to disable only the affected row's controls.
    pub fn is_busy(&self, id: &T::Id) -> bool {
        self.in_flight.contains_key(id)
    }

    /// The number of writes currently in flight.
    pub fn busy_count(&self) -> usize {
        self.in_flight.len()
    }

    /// Dispatches a create. The draft is validated first; an invalid
    /// draft is rejected without any request.
    pub fn create(&mut self, draft: T::Draft) -> Result<Cmd, ValidationError> {
        draft.validate()?;
        let client = Arc::clone(&self.client);
        let language = self.language;
        let tag = self.id;
        Ok(Box::pin(async move {
            let result = client
                .create(language, draft)
                .await
                .map(MutationOutcome::Created);
            Some(Box::new(MutationDoneMsg::<T> {
                id: tag,
                item_id: None,
                kind: MutationKind::Create,
                result,
            }) as Msg)
        }))
    }

    /// Dispatches an update. Returns `Ok(None)` when the item already
    /// has a write in flight.
    pub fn update(&mut self, id: T::Id, draft: T::Draft) -> Result<Option<Cmd>, ValidationError> {
        draft.validate()?;
        if self.is_busy(&id) {
            return Ok(None);
        }
        self.in_flight.insert(id.clone(), MutationKind::Update);
        let client = Arc::clone(&self.client);
        let language = self.language;
        let tag = self.id;
        Ok(Some(Box::pin(async move {
            let result = client
                .update(language, id.clone(), draft)
                .await
                .map(MutationOutcome::Updated);
            Some(Box::new(MutationDoneMsg::<T> {
                id: tag,
                item_id: Some(id),
                kind: MutationKind::Update,
                result,
            }) as Msg)
        })))
    }

    /// Dispatches a delete. Returns `None` when the item already has a
    /// write in flight.
    pub fn delete(&mut self, id: T::Id) -> Option<Cmd> {
        if self.is_busy(&id) {
            return None;
        }
        self.in_flight.insert(id.clone(), MutationKind::Delete);
        let client = Arc::clone(&self.client);
        let language = self.language;
        let tag = self.id;
        Some(Box::pin(async move {
            let result = client
                .delete(language, id.clone())
                .await
                .map(|()| MutationOutcome::Deleted(id.clone()));
            Some(Box::new(MutationDoneMsg::<T> {
                id: tag,
                item_id: Some(id),
                kind: MutationKind::Delete,
                result,
            }) as Msg)
        }))
    }

    /// Dispatches an entity-specific toggle. Returns `None` when the
    /// item already has a write in flight.
    pub fn toggle(&mut self, id: T::Id, action: T::Toggle) -> Option<Cmd> {
        if self.is_busy(&id) {
            return None;
        }
        self.in_flight.insert(id.clone(), MutationKind::Toggle);
        let client = Arc::clone(&self.client);
        let language = self.language;
        let tag = self.id;
        Some(Box::pin(async move {
            let result = client
                .toggle(language, id.clone(), action)
                .await
                .map(MutationOutcome::Toggled);
            Some(Box::new(MutationDoneMsg::<T> {
                id: tag,
                item_id: Some(id),
                kind: MutationKind::Toggle,
                result,
            }) as Msg)
        }))
    }

    /// Routes completion messages to this dispatcher.
    ///
    /// Clears the per-item flag regardless of outcome and hands the
    /// message back to the caller for cache invalidation, toasts, and
    /// navigation. Returns `None` for messages that belong elsewhere.
    pub fn handle<'a>(&mut self, msg: &'a Msg) -> Option<&'a MutationDoneMsg<T>> {
        let done = msg.downcast_ref::<MutationDoneMsg<T>>()?;
        if done.id != self.id {
            return None;
        }
        if let Some(item_id) = &done.item_id {
            self.in_flight.remove(item_id);
        }
        match &done.result {
            Ok(_) => debug!(
                resource = T::RESOURCE,
                kind = ?done.kind,
                "mutation succeeded"
            ),
            Err(error) => warn!(
                resource = T::RESOURCE,
                kind = ?done.kind,
                %error,
                "mutation failed"
            ),
        }
        Some(done)
    }
}
