//! The list-view model: composition of the accessor, the dispatcher,
//! the paginator, and the local filter/sort stage.

use super::keys::ListViewKeyMap;
use super::style::ListViewStyles;
use crate::dialog::Dialog;
use crate::entity::{Column, Language, ListItem};
use crate::error::ValidationError;
use crate::key;
use crate::mutation::Dispatcher;
use crate::paginator;
use crate::query::{self, SortState};
use crate::remote::{Accessor, CollectionClient};
use crate::toast::Toast;
use bubbletea_rs::Cmd;
use std::sync::Arc;

/// A navigation target emitted by a list view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route<Id> {
    /// The create form for the collection.
    Create,
    /// The edit form for one item.
    Edit(Id),
}

/// Message emitted when the user asks to leave the list for a form.
///
/// The list view does not own the form screens; the host application
/// routes on this message.
#[derive(Debug, Clone)]
pub struct NavigateMsg<Id> {
    /// The REST resource of the collection the request came from.
    pub resource: &'static str,
    /// Where to go.
    pub route: Route<Id>,
}

/// A list view over one remote collection.
///
/// Composes the remote accessor (paged fetch and cache), the local
/// filter/sort stage, the mutation dispatcher, pagination, selection
/// dialogs, and toasts into one Elm-style component. The host program
/// forwards every message to [`update`](Model::update) and renders
/// [`view`](Model::view).
pub struct Model<T: ListItem, C: CollectionClient<T>> {
    pub(super) accessor: Accessor<T, C>,
    pub(super) dispatcher: Dispatcher<T, C>,
    pub(super) paginator: paginator::Model,
    pub(super) columns: Vec<Column>,

    pub(super) title: String,
    pub(super) cursor: usize,
    pub(super) search: String,
    pub(super) searching: bool,
    pub(super) sort: SortState,
    pub(super) dialog: Dialog<T>,
    pub(super) toast: Option<Toast>,
    /// Expiry tick for the toast, held until an update cycle with no
    /// higher-priority command. A successful write returns the cache
    /// invalidation fetch first; that fetch always produces a follow-up
    /// message, which flushes this.
    pub(super) pending_expiry: Option<Cmd>,

    pub(super) keymap: ListViewKeyMap,
    pub(super) toggle_bindings: Vec<(key::Binding, T::Toggle)>,
    pub(super) styles: ListViewStyles,
    pub(super) width: usize,
    pub(super) height: usize,
}

impl<T: ListItem, C: CollectionClient<T>> Model<T, C> {
    /// Creates a list view over a collection client.
    ///
    /// Starts on page 1 with the default page size, no search term, and
    /// no sort selection. Call [`Model::init_fetch`] to load the first
    /// page.
    pub fn new(client: Arc<C>, language: Language) -> Self {
        let accessor = Accessor::new(
            Arc::clone(&client),
            language,
            paginator::DEFAULT_PAGE_SIZE,
        );
        let dispatcher = Dispatcher::new(client, language);
        Self {
            accessor,
            dispatcher,
            paginator: paginator::Model::new(),
            columns: T::columns(),
            title: T::RESOURCE.to_string(),
            cursor: 0,
            search: String::new(),
            searching: false,
            sort: SortState::default(),
            dialog: Dialog::Closed,
            toast: None,
            pending_expiry: None,
            keymap: ListViewKeyMap::default(),
            toggle_bindings: Vec::new(),
            styles: ListViewStyles::default(),
            width: 80,
            height: 24,
        }
    }

    /// Sets the title shown above the table (builder pattern).
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the initial page size (builder pattern). Only members of
    /// [`paginator::PAGE_SIZES`] are accepted.
    pub fn with_per_page(mut self, per_page: usize) -> Self {
        self.paginator.set_per_page(per_page);
        self.accessor.set_per_page(self.paginator.per_page);
        self
    }

    /// Registers an entity toggle under a key binding (builder
    /// pattern). Pressing the key dispatches the toggle for the
    /// selected row.
    pub fn with_toggle(mut self, binding: key::Binding, action: T::Toggle) -> Self {
        self.toggle_bindings.push((binding, action));
        self
    }

    /// Replaces the key map (builder pattern).
    pub fn with_keymap(mut self, keymap: ListViewKeyMap) -> Self {
        self.keymap = keymap;
        self
    }

    /// The command that loads the first page. Return it from the host
    /// program's `init`.
    pub fn init_fetch(&mut self) -> Cmd {
        self.accessor.fetch()
    }

    /// The view's operating language.
    pub fn language(&self) -> Language {
        self.accessor.language()
    }

    /// The current search term.
    pub fn search_term(&self) -> &str {
        &self.search
    }

    /// Whether the search input is focused.
    pub fn is_searching(&self) -> bool {
        self.searching
    }

    /// The active sort selection.
    pub fn sort_state(&self) -> &SortState {
        &self.sort
    }

    /// The dialog currently driving the view.
    pub fn dialog(&self) -> &Dialog<T> {
        &self.dialog
    }

    /// The rows after the local filter/sort stage, in display order.
    pub fn visible_items(&self) -> Vec<T> {
        query::apply(self.accessor.items(), &self.search, &self.sort)
    }

    /// The row under the cursor, after filtering and sorting.
    pub fn selected_item(&self) -> Option<T> {
        self.visible_items().into_iter().nth(self.cursor)
    }

    /// Whether the row with this id has a write in flight.
    pub fn is_row_busy(&self, id: &T::Id) -> bool {
        self.dispatcher.is_busy(id)
    }

    /// Submits a create through the view's dispatcher.
    ///
    /// Host form screens call this so the write shares the view's
    /// validation, cache invalidation, and toast pipeline. The draft is
    /// validated before anything is dispatched.
    pub fn create(&mut self, draft: T::Draft) -> Result<Cmd, ValidationError> {
        self.dispatcher.create(draft)
    }

    /// Submits an update through the view's dispatcher. Returns
    /// `Ok(None)` when the item already has a write in flight.
    pub fn update_item(
        &mut self,
        id: T::Id,
        draft: T::Draft,
    ) -> Result<Option<Cmd>, ValidationError> {
        self.dispatcher.update(id, draft)
    }

    pub(super) fn clamp_cursor(&mut self) {
        let len = self.visible_items().len();
        if len == 0 {
            self.cursor = 0;
        } else if self.cursor >= len {
            self.cursor = len - 1;
        }
    }

    /// Clears the search term and leaves search mode.
    pub(super) fn clear_search(&mut self) {
        self.search.clear();
        self.searching = false;
        self.cursor = 0;
    }

    /// Runs after every edit of the search term. Re-filtering is local;
    /// the only state change beyond the term itself is the return to
    /// page 1, which never hits the network.
    pub(super) fn on_search_edited(&mut self) {
        self.cursor = 0;
        if self.paginator.page != 1 {
            self.paginator.set_page(1);
            self.accessor.rewind();
        }
    }
}
