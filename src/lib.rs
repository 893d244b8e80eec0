#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/backoffice-widgets/")]

//! # backoffice-widgets
//!
//! Reusable terminal UI components for e-commerce back-office admin
//! panels, built on [bubbletea-rs](https://github.com/whit3rabbit/bubbletea-rs).
//! The centerpiece is a generic list view over a paginated remote
//! collection: brands, categories, colors, sizes, sliders, orders,
//! notifications, and similar entity tables all share one component.
//!
//! ## Overview
//!
//! Every collection screen in an admin panel repeats the same state
//! machine. This crate implements it once, generically:
//!
//! - **Remote access** ([`remote`]): paged fetches cached by
//!   `(language, page, pageSize)`, with stale-while-revalidate reads
//!   and whole-entity invalidation after writes
//! - **Local filter/sort** ([`query`]): case-insensitive substring
//!   search and stable single-column sorting over the loaded page,
//!   never over the network
//! - **Mutations** ([`mutation`]): create/update/delete/toggle with
//!   per-row busy flags, draft validation, and confirm-first deletes
//! - **Selection** ([`dialog`]): a details panel and a delete
//!   confirmation, at most one open at a time
//! - **Composition** ([`listview`]): the Elm-style controller tying
//!   the above to pagination, search input, sorting keys, toasts, and
//!   navigation
//!
//! Entities plug in through the [`entity::ListItem`] trait;
//! [`brands`] is the reference implementation. The HTTP backend lives
//! in [`http`]; tests substitute in-memory clients through
//! [`remote::CollectionClient`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use backoffice_widgets::brands::Brand;
//! use backoffice_widgets::entity::Language;
//! use backoffice_widgets::http::RestCollectionClient;
//! use backoffice_widgets::listview;
//! use std::sync::Arc;
//!
//! let client: Arc<RestCollectionClient<Brand>> =
//!     Arc::new(RestCollectionClient::new("https://api.example.com/admin"));
//! let mut view = listview::Model::new(client, Language::En).with_title("Brands");
//! let first_fetch = view.init_fetch();
//! ```

pub mod brands;
pub mod dialog;
pub mod entity;
pub mod error;
pub mod http;
pub mod key;
pub mod listview;
pub mod mutation;
pub mod paginator;
pub mod query;
pub mod remote;
pub mod toast;

/// Commonly used types, re-exported for convenient glob imports.
pub mod prelude {
    pub use crate::dialog::Dialog;
    pub use crate::entity::{Column, DraftPayload, Language, ListItem, SortValue, ToggleAction};
    pub use crate::error::{FetchError, MutationError, ValidationError};
    pub use crate::key::{Binding, KeyMap};
    pub use crate::listview::{ListViewKeyMap, ListViewStyles, NavigateMsg, Route};
    pub use crate::mutation::{Dispatcher, MutationDoneMsg, MutationKind, MutationOutcome};
    pub use crate::paginator::{DEFAULT_PAGE_SIZE, PAGE_SIZES};
    pub use crate::query::{SortDirection, SortState};
    pub use crate::remote::{
        Accessor, CollectionClient, FetchStatus, Page, PageFetchFailedMsg, PageInfo, PageKey,
        PageLoadedMsg,
    };
    pub use crate::toast::{Toast, ToastExpiredMsg, ToastLevel};

    /// The generic list view, aliased to avoid clashing with other
    /// component models.
    pub use crate::listview::Model as ListView;
}
