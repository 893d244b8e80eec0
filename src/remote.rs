//! The remote collection accessor: a read-through page cache over a
//! backend collection.
//!
//! An [`Accessor`] owns the only shared mutable resource of a list
//! view, its page cache, keyed by `(language, page, pageSize)`. A
//! change to any key component triggers a new fetch. While a fetch is
//! in flight and no cached page exists yet, callers observe an explicit
//! loading state; when a cached page exists, stale data stays visible
//! while the refetch runs in the background.
//!
//! Fetches are issued as `Cmd` futures and come back as
//! [`PageLoadedMsg`] / [`PageFetchFailedMsg`]. Each accessor instance
//! tags its messages with a unique id so several list views can coexist
//! in one program without cross-routing, and with an epoch so responses
//! that started before an invalidation are discarded instead of
//! resurrecting stale pages.
//!
//! Writes go through the mutation dispatcher, which calls
//! [`Accessor::invalidate`] on success; invalidation drops every cached
//! page for the entity and refetches the current key, so a write is
//! always followed by a read that reflects it.

use crate::entity::{Language, ListItem};
use crate::error::{FetchError, MutationError};
use async_trait::async_trait;
use bubbletea_rs::{Cmd, Msg};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tracing::{debug, warn};

static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// Pagination metadata returned alongside every page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// The 1-based page this response covers.
    pub current_page: usize,
    /// The page size the backend applied.
    pub page_size: usize,
    /// Total item count in the collection.
    pub total_count: usize,
}

/// One fetched page of a remote collection.
#[derive(Debug, Clone)]
pub struct Page<T> {
    /// The items on this page.
    pub items: Vec<T>,
    /// Pagination metadata.
    pub pagination: PageInfo,
}

impl<T> Page<T> {
    /// An empty page for a key; used when the backend reports no
    /// content (an empty result is zero items, not an error).
    pub fn empty(key: &PageKey) -> Self {
        Self {
            items: Vec::new(),
            pagination: PageInfo {
                current_page: key.page,
                page_size: key.per_page,
                total_count: 0,
            },
        }
    }
}

/// The cache key of one page: language, page number, page size.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PageKey {
    /// The operating language of the view.
    pub language: Language,
    /// 1-based page number.
    pub page: usize,
    /// Items per page.
    pub per_page: usize,
}

/// Backend operations for one entity collection.
///
/// Implemented over HTTP by [`crate::http::RestCollectionClient`] and
/// by in-memory fakes in tests. All methods are independent
/// asynchronous operations; the client holds no view state.
#[async_trait]
pub trait CollectionClient<T: ListItem>: Send + Sync + 'static {
    /// Fetches one page of the collection.
    async fn list(
        &self,
        language: Language,
        page: usize,
        per_page: usize,
    ) -> Result<Page<T>, FetchError>;

    /// Creates a new item from a validated draft.
    async fn create(&self, language: Language, draft: T::Draft) -> Result<T, MutationError>;

    /// Updates an existing item from a validated draft.
    async fn update(
        &self,
        language: Language,
        id: T::Id,
        draft: T::Draft,
    ) -> Result<T, MutationError>;

    /// Deletes an item.
    async fn delete(&self, language: Language, id: T::Id) -> Result<(), MutationError>;

    /// Applies an entity-specific toggle to an item.
    async fn toggle(
        &self,
        language: Language,
        id: T::Id,
        action: T::Toggle,
    ) -> Result<T, MutationError>;
}

/// Message sent when a page fetch completes successfully.
pub struct PageLoadedMsg<T: ListItem> {
    /// The accessor instance this message belongs to.
    pub id: i64,
    /// The invalidation epoch the fetch started under.
    pub epoch: u64,
    /// The key the page was fetched for.
    pub key: PageKey,
    /// The fetched page.
    pub page: Page<T>,
}

/// Message sent when a page fetch fails.
pub struct PageFetchFailedMsg {
    /// The accessor instance this message belongs to.
    pub id: i64,
    /// The invalidation epoch the fetch started under.
    pub epoch: u64,
    /// The key the fetch was issued for.
    pub key: PageKey,
    /// What went wrong.
    pub error: FetchError,
}

/// Fetch state of the current key, as observed by the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchStatus {
    /// Nothing in flight; the cached page (if any) is current.
    Idle,
    /// A fetch is in flight and no cached page exists for the key.
    Loading,
    /// A fetch is in flight behind an existing cached page.
    Refreshing,
    /// The last fetch for the current key failed.
    Failed(FetchError),
}

/// A read-through page cache over one entity collection.
pub struct Accessor<T: ListItem, C: CollectionClient<T>> {
    id: i64,
    epoch: u64,
    client: Arc<C>,
    key: PageKey,
    cache: HashMap<PageKey, Page<T>>,
    status: FetchStatus,
}

impl<T: ListItem, C: CollectionClient<T>> Accessor<T, C> {
    /// Creates an accessor for a language with the default first key.
    pub fn new(client: Arc<C>, language: Language, per_page: usize) -> Self {
        Self {
            id: next_id(),
            epoch: 0,
            client,
            key: PageKey {
                language,
                page: 1,
                per_page,
            },
            cache: HashMap::new(),
            status: FetchStatus::Idle,
        }
    }

    /// The current cache key.
    pub fn key(&self) -> &PageKey {
        &self.key
    }

    /// The view's operating language.
    pub fn language(&self) -> Language {
        self.key.language
    }

    /// The fetch state of the current key.
    pub fn status(&self) -> &FetchStatus {
        &self.status
    }

    /// The cached page for the current key, if any.
    pub fn page(&self) -> Option<&Page<T>> {
        self.cache.get(&self.key)
    }

    /// The items of the current page, or an empty slice while nothing
    /// is cached.
    pub fn items(&self) -> &[T] {
        self.page().map(|p| p.items.as_slice()).unwrap_or(&[])
    }

    /// The total collection count from the most recent page, if known.
    pub fn total_count(&self) -> Option<usize> {
        self.page().map(|p| p.pagination.total_count)
    }

    /// Whether the view should show an explicit loading state.
    pub fn is_loading(&self) -> bool {
        matches!(self.status, FetchStatus::Loading)
    }

    /// Whether stale data is being shown while a refetch runs.
    pub fn is_refreshing(&self) -> bool {
        matches!(self.status, FetchStatus::Refreshing)
    }

    /// The error of the last failed fetch for the current key.
    pub fn error(&self) -> Option<&FetchError> {
        match &self.status {
            FetchStatus::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Changes the page size and returns to page 1 without issuing a
    /// fetch. Used during view construction, before the first load.
    pub fn set_per_page(&mut self, per_page: usize) {
        self.key.page = 1;
        self.key.per_page = per_page;
    }

    /// Moves the key back to page 1 without issuing a fetch.
    ///
    /// Used when a search begins: the filter stage operates on loaded
    /// pages only, so returning to the first page must not hit the
    /// network. If page 1 was never fetched the view shows no items
    /// until the search is cleared.
    pub fn rewind(&mut self) {
        if self.key.page != 1 {
            self.key.page = 1;
            self.status = FetchStatus::Idle;
        }
    }

    /// Moves the key to a new page/page-size and fetches it.
    pub fn visit(&mut self, page: usize, per_page: usize) -> Cmd {
        self.key.page = page;
        self.key.per_page = per_page;
        self.fetch()
    }

    /// Issues a fetch for the current key.
    ///
    /// With a cached page present this is a background refresh; without
    /// one the view observes `Loading`.
    pub fn fetch(&mut self) -> Cmd {
        self.status = if self.cache.contains_key(&self.key) {
            FetchStatus::Refreshing
        } else {
            FetchStatus::Loading
        };
        self.fetch_cmd()
    }

    /// Drops every cached page for this entity and refetches the
    /// current key. Called after any successful write.
    pub fn invalidate(&mut self) -> Cmd {
        self.epoch += 1;
        self.cache.clear();
        debug!(resource = T::RESOURCE, epoch = self.epoch, "cache invalidated");
        self.fetch()
    }

    fn fetch_cmd(&self) -> Cmd {
        let client = Arc::clone(&self.client);
        let key = self.key.clone();
        let id = self.id;
        let epoch = self.epoch;
        Box::pin(async move {
            match client.list(key.language, key.page, key.per_page).await {
                Ok(page) => Some(Box::new(PageLoadedMsg {
                    id,
                    epoch,
                    key,
                    page,
                }) as Msg),
                Err(error) => Some(Box::new(PageFetchFailedMsg {
                    id,
                    epoch,
                    key,
                    error,
                }) as Msg),
            }
        })
    }

    /// Routes fetch completion messages to this accessor.
    ///
    /// Returns `true` when the message belonged to this instance and
    /// changed its state. Responses from before the latest invalidation
    /// are dropped; responses for keys other than the current one are
    /// cached but do not change the visible status.
    pub fn handle(&mut self, msg: &Msg) -> bool {
        if let Some(loaded) = msg.downcast_ref::<PageLoadedMsg<T>>() {
            if loaded.id != self.id {
                return false;
            }
            if loaded.epoch != self.epoch {
                debug!(
                    resource = T::RESOURCE,
                    "dropping page from a superseded epoch"
                );
                return false;
            }
            debug!(
                resource = T::RESOURCE,
                page = loaded.key.page,
                items = loaded.page.items.len(),
                total = loaded.page.pagination.total_count,
                "page loaded"
            );
            self.cache.insert(loaded.key.clone(), loaded.page.clone());
            if loaded.key == self.key {
                self.status = FetchStatus::Idle;
            }
            return true;
        }
        if let Some(failed) = msg.downcast_ref::<PageFetchFailedMsg>() {
            if failed.id != self.id || failed.epoch != self.epoch {
                return false;
            }
            if failed.key == self.key {
                warn!(
                    resource = T::RESOURCE,
                    page = failed.key.page,
                    error = %failed.error,
                    "page fetch failed"
                );
                self.status = FetchStatus::Failed(failed.error.clone());
            }
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brands::{Brand, BrandDraft, BrandToggle};

    struct StaticClient {
        items: Vec<Brand>,
    }

    #[async_trait]
    impl CollectionClient<Brand> for StaticClient {
        async fn list(
            &self,
            _language: Language,
            page: usize,
            per_page: usize,
        ) -> Result<Page<Brand>, FetchError> {
            let start = (page - 1) * per_page;
            let items: Vec<Brand> = self
                .items
                .iter()
                .skip(start)
                .take(per_page)
                .cloned()
                .collect();
            Ok(Page {
                items,
                pagination: PageInfo {
                    current_page: page,
                    page_size: per_page,
                    total_count: self.items.len(),
                },
            })
        }

        async fn create(
            &self,
            _language: Language,
            _draft: BrandDraft,
        ) -> Result<Brand, MutationError> {
            unimplemented!("read-only fixture")
        }

        async fn update(
            &self,
            _language: Language,
            _id: String,
            _draft: BrandDraft,
        ) -> Result<Brand, MutationError> {
            unimplemented!("read-only fixture")
        }

        async fn delete(&self, _language: Language, _id: String) -> Result<(), MutationError> {
            unimplemented!("read-only fixture")
        }

        async fn toggle(
            &self,
            _language: Language,
            _id: String,
            _action: BrandToggle,
        ) -> Result<Brand, MutationError> {
            unimplemented!("read-only fixture")
        }
    }

    fn accessor(count: usize) -> Accessor<Brand, StaticClient> {
        let items = (0..count)
            .map(|i| Brand::sample(&i.to_string(), "اسم", &format!("Brand {i}")))
            .collect();
        Accessor::new(Arc::new(StaticClient { items }), Language::En, 20)
    }

    #[tokio::test]
    async fn first_fetch_is_an_explicit_loading_state() {
        let mut acc = accessor(25);
        let cmd = acc.fetch();
        assert!(acc.is_loading());
        assert!(acc.page().is_none());
        let msg = cmd.await.expect("fetch produces a message");
        assert!(acc.handle(&msg));
        assert_eq!(acc.status(), &FetchStatus::Idle);
        assert_eq!(acc.items().len(), 20);
        assert_eq!(acc.total_count(), Some(25));
    }

    #[tokio::test]
    async fn refetch_keeps_stale_page_visible() {
        let mut acc = accessor(25);
        let msg = acc.fetch().await.expect("message");
        acc.handle(&msg);

        let cmd = acc.fetch();
        assert!(acc.is_refreshing());
        assert_eq!(acc.items().len(), 20); // stale-while-revalidate
        let msg = cmd.await.expect("message");
        acc.handle(&msg);
        assert_eq!(acc.status(), &FetchStatus::Idle);
    }

    #[tokio::test]
    async fn key_change_caches_pages_independently() {
        let mut acc = accessor(25);
        let msg = acc.fetch().await.expect("message");
        acc.handle(&msg);

        let cmd = acc.visit(2, 20);
        assert!(acc.is_loading()); // page 2 not cached yet
        let msg = cmd.await.expect("message");
        acc.handle(&msg);
        assert_eq!(acc.items().len(), 5);

        // Returning to page 1 serves the cache and refreshes behind it.
        let _cmd = acc.visit(1, 20);
        assert!(acc.is_refreshing());
        assert_eq!(acc.items().len(), 20);
    }

    #[tokio::test]
    async fn responses_from_a_superseded_epoch_are_dropped() {
        let mut acc = accessor(25);
        let stale_cmd = acc.fetch();
        let invalidate_cmd = acc.invalidate();

        let stale_msg = stale_cmd.await.expect("message");
        assert!(!acc.handle(&stale_msg));
        assert!(acc.page().is_none());

        let fresh_msg = invalidate_cmd.await.expect("message");
        assert!(acc.handle(&fresh_msg));
        assert_eq!(acc.items().len(), 20);
    }

    #[tokio::test]
    async fn messages_for_other_instances_are_ignored() {
        let mut a = accessor(5);
        let mut b = accessor(5);
        let msg = a.fetch().await.expect("message");
        assert!(!b.handle(&msg));
        assert!(a.handle(&msg));
    }
}
