//! The list-view controller: one component per back-office collection.
//!
//! A list view composes four independent pieces into an Elm-style
//! model:
//! - the remote accessor ([`crate::remote`]): paged fetch, cache,
//!   stale-while-revalidate, invalidation
//! - the local filter/sort stage ([`crate::query`]): substring search
//!   and single-column sort over the loaded page
//! - the mutation dispatcher ([`crate::mutation`]): writes with
//!   per-row busy flags
//! - selection state ([`crate::dialog`]): details and delete
//!   confirmation
//!
//! ## Search and pagination reset each other
//!
//! Typing a search term returns the view to page 1 without touching the
//! network; the filter runs over the loaded page only. Changing the
//! page or the page size clears the search term and fetches the new
//! key. Changing the page size also resets to page 1.
//!
//! ## Writes
//!
//! Deletes go through an explicit confirmation and are never applied
//! optimistically: the row stays until the server confirms, then the
//! whole cache is invalidated and the current page refetched. Every
//! completed write raises a toast; failures leave the cache untouched.
//!
//! ## Navigation
//!
//! `a` and `e` do not open forms in place; they emit a [`NavigateMsg`]
//! the host application routes on, mirroring a page-based admin panel.

pub mod keys;
pub mod model;
pub mod rendering;
pub mod style;

pub use keys::ListViewKeyMap;
pub use model::{Model, NavigateMsg, Route};
pub use style::ListViewStyles;

use crate::entity::ListItem;
use crate::mutation::{MutationKind, MutationOutcome};
use crate::remote::CollectionClient;
use crate::toast::{Toast, ToastExpiredMsg};
use bubbletea_rs::{Cmd, KeyMsg, Msg, WindowSizeMsg};
use crossterm::event::{KeyCode, KeyModifiers};

impl<T: ListItem, C: CollectionClient<T>> Model<T, C> {
    /// Routes one message through the view.
    ///
    /// Call this from the host program's `update` with every message;
    /// messages that belong to other components are ignored.
    pub fn update(&mut self, msg: &Msg) -> Option<Cmd> {
        match self.route(msg) {
            Some(cmd) => Some(cmd),
            // No command of its own; flush a held toast expiry, if any.
            None => self.pending_expiry.take(),
        }
    }

    fn route(&mut self, msg: &Msg) -> Option<Cmd> {
        if let Some(size) = msg.downcast_ref::<WindowSizeMsg>() {
            self.width = size.width as usize;
            self.height = size.height as usize;
            return None;
        }

        if self.accessor.handle(msg) {
            return self.after_fetch();
        }

        if let Some(cmd) = self.handle_mutation_done(msg) {
            return Some(cmd);
        }

        if let Some(expired) = msg.downcast_ref::<ToastExpiredMsg>() {
            if self
                .toast
                .as_ref()
                .is_some_and(|t| t.expires_with(expired))
            {
                self.toast = None;
            }
            return None;
        }

        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            return self.on_key(key_msg, msg);
        }

        None
    }

    /// Syncs pagination after a fetch completed.
    ///
    /// Deleting the last item of the last page can leave the current
    /// key past the end of the collection; the paginator clamps and the
    /// view follows it to the new last page.
    fn after_fetch(&mut self) -> Option<Cmd> {
        if let Some(total) = self.accessor.total_count() {
            self.paginator.set_total_count(total);
            if self.paginator.page != self.accessor.key().page {
                return Some(
                    self.accessor
                        .visit(self.paginator.page, self.paginator.per_page),
                );
            }
        }
        self.clamp_cursor();
        None
    }

    fn handle_mutation_done(&mut self, msg: &Msg) -> Option<Cmd> {
        let done = self.dispatcher.handle(msg)?;
        match &done.result {
            Ok(outcome) => {
                let (toast, expiry) = Toast::success(success_message(outcome, self.language()));
                self.toast = Some(toast);
                self.pending_expiry = Some(expiry);
                // Every successful write invalidates the page cache so
                // the next read reflects it.
                Some(self.accessor.invalidate())
            }
            Err(error) => {
                let message = match self.language() {
                    crate::entity::Language::En => {
                        format!("{} failed: {}", kind_label(done.kind), error)
                    }
                    crate::entity::Language::Ar => format!("فشلت العملية: {error}"),
                };
                let (toast, expiry) = Toast::failure(message);
                self.toast = Some(toast);
                Some(expiry)
            }
        }
    }

    fn on_key(&mut self, key_msg: &KeyMsg, msg: &Msg) -> Option<Cmd> {
        if self.keymap.force_quit.matches(key_msg) {
            return Some(bubbletea_rs::quit());
        }

        if self.searching {
            return self.on_search_key(key_msg);
        }

        if self.dialog.is_open() {
            return self.on_dialog_key(key_msg);
        }

        if self.accessor.error().is_some() && self.keymap.retry.matches(key_msg) {
            return Some(self.accessor.fetch());
        }

        if self.keymap.quit.matches(key_msg) {
            return Some(bubbletea_rs::quit());
        }

        if self.keymap.search.matches(key_msg) {
            self.searching = true;
            return None;
        }

        if self.keymap.clear_search.matches(key_msg) && !self.search.is_empty() {
            self.clear_search();
            return None;
        }

        if self.keymap.cursor_up.matches(key_msg) {
            if self.cursor > 0 {
                self.cursor -= 1;
            }
            return None;
        }
        if self.keymap.cursor_down.matches(key_msg) {
            let len = self.visible_items().len();
            if len > 0 && self.cursor < len - 1 {
                self.cursor += 1;
            }
            return None;
        }

        if self.keymap.details.matches(key_msg) {
            if let Some(item) = self.selected_item() {
                self.dialog.show_details(item);
            }
            return None;
        }

        if self.keymap.delete.matches(key_msg) {
            if let Some(item) = self.selected_item() {
                if !self.dispatcher.is_busy(&item.id()) {
                    self.dialog.request_delete(item);
                }
            }
            return None;
        }

        if self.keymap.edit.matches(key_msg) {
            let item = self.selected_item()?;
            return Some(navigate::<T>(Route::Edit(item.id())));
        }

        if self.keymap.add.matches(key_msg) {
            return Some(navigate::<T>(Route::Create));
        }

        if self.keymap.cycle_page_size.matches(key_msg) {
            let next = self.paginator.next_page_size();
            self.paginator.set_per_page(next);
            self.clear_search();
            return Some(self.accessor.visit(1, next));
        }

        if let Some(cmd) = self.on_sort_key(key_msg) {
            return cmd;
        }

        for (binding, action) in &self.toggle_bindings {
            if binding.matches(key_msg) {
                let item = self.selected_item()?;
                let action = action.clone();
                return self.dispatcher.toggle(item.id(), action);
            }
        }

        // Page navigation last so row bindings take precedence.
        if self.paginator.update(msg) {
            self.clear_search();
            return Some(
                self.accessor
                    .visit(self.paginator.page, self.paginator.per_page),
            );
        }

        None
    }

    /// Digit keys sort by column position: `1` toggles the first
    /// column, `2` the second, and so on. Unsortable columns ignore the
    /// key.
    fn on_sort_key(&mut self, key_msg: &KeyMsg) -> Option<Option<Cmd>> {
        let KeyCode::Char(c) = key_msg.key else {
            return None;
        };
        if !key_msg.modifiers.is_empty() {
            return None;
        }
        let index = c.to_digit(10)?.checked_sub(1)? as usize;
        let column = self.columns.get(index)?;
        if !column.sortable {
            return None;
        }
        self.sort.toggle(column.key);
        self.cursor = 0;
        Some(None)
    }

    fn on_search_key(&mut self, key_msg: &KeyMsg) -> Option<Cmd> {
        match key_msg.key {
            KeyCode::Esc => {
                self.clear_search();
            }
            KeyCode::Enter => {
                self.searching = false;
            }
            KeyCode::Backspace => {
                self.search.pop();
                self.on_search_edited();
            }
            KeyCode::Char(c)
                if key_msg.modifiers.is_empty()
                    || key_msg.modifiers == KeyModifiers::SHIFT =>
            {
                self.search.push(c);
                self.on_search_edited();
            }
            _ => {}
        }
        None
    }

    fn on_dialog_key(&mut self, key_msg: &KeyMsg) -> Option<Cmd> {
        if self.dialog.pending_delete().is_some() {
            if self.keymap.confirm.matches(key_msg) {
                let item = self.dialog.confirm_delete()?;
                return self.dispatcher.delete(item.id());
            }
            if self.keymap.cancel.matches(key_msg) {
                self.dialog.cancel_delete();
            }
            return None;
        }

        // Details panel.
        if self.keymap.cancel.matches(key_msg)
            || self.keymap.details.matches(key_msg)
            || self.keymap.quit.matches(key_msg)
        {
            self.dialog.close();
            return None;
        }
        if self.keymap.edit.matches(key_msg) {
            if let Some(item) = self.dialog.selected().cloned() {
                self.dialog.close();
                return Some(navigate::<T>(Route::Edit(item.id())));
            }
        }
        if self.keymap.delete.matches(key_msg) {
            if let Some(item) = self.dialog.selected().cloned() {
                self.dialog.request_delete(item);
            }
        }
        None
    }
}

fn navigate<T: ListItem>(route: Route<T::Id>) -> Cmd {
    Box::pin(async move {
        Some(Box::new(NavigateMsg::<T::Id> {
            resource: T::RESOURCE,
            route,
        }) as Msg)
    })
}

fn kind_label(kind: MutationKind) -> &'static str {
    match kind {
        MutationKind::Create => "Create",
        MutationKind::Update => "Update",
        MutationKind::Delete => "Delete",
        MutationKind::Toggle => "Toggle",
    }
}

fn success_message<T: ListItem>(
    outcome: &MutationOutcome<T>,
    language: crate::entity::Language,
) -> &'static str {
    use crate::entity::Language;
    match (outcome, language) {
        (MutationOutcome::Created(_), Language::En) => "Created successfully",
        (MutationOutcome::Created(_), Language::Ar) => "تمت الإضافة بنجاح",
        (MutationOutcome::Updated(_), Language::En) => "Saved successfully",
        (MutationOutcome::Updated(_), Language::Ar) => "تم الحفظ بنجاح",
        (MutationOutcome::Deleted(_), Language::En) => "Deleted successfully",
        (MutationOutcome::Deleted(_), Language::Ar) => "تم الحذف بنجاح",
        (MutationOutcome::Toggled(_), Language::En) => "Updated successfully",
        (MutationOutcome::Toggled(_), Language::Ar) => "تم التحديث بنجاح",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brands::{Brand, BrandDraft, BrandToggle};
    use crate::entity::Language;
    use crate::error::{FetchError, MutationError};
    use crate::remote::{Page, PageInfo};
    use async_trait::async_trait;
    use std::sync::Arc;
    use std::sync::Mutex;

    /// An in-memory backend over a mutable brand list.
    struct MemoryClient {
        brands: Mutex<Vec<Brand>>,
        fail_list: Mutex<bool>,
    }

    impl MemoryClient {
        fn with_brands(brands: Vec<Brand>) -> Arc<Self> {
            Arc::new(Self {
                brands: Mutex::new(brands),
                fail_list: Mutex::new(false),
            })
        }

        fn set_fail(&self, fail: bool) {
            *self.fail_list.lock().unwrap() = fail;
        }
    }

    #[async_trait]
    impl CollectionClient<Brand> for MemoryClient {
        async fn list(
            &self,
            _language: Language,
            page: usize,
            per_page: usize,
        ) -> Result<Page<Brand>, FetchError> {
            if *self.fail_list.lock().unwrap() {
                return Err(FetchError::Network("connection refused".into()));
            }
            let brands = self.brands.lock().unwrap();
            let start = (page - 1) * per_page;
            Ok(Page {
                items: brands.iter().skip(start).take(per_page).cloned().collect(),
                pagination: PageInfo {
                    current_page: page,
                    page_size: per_page,
                    total_count: brands.len(),
                },
            })
        }

        async fn create(
            &self,
            _language: Language,
            draft: BrandDraft,
        ) -> Result<Brand, MutationError> {
            let mut brands = self.brands.lock().unwrap();
            let brand = Brand::sample(&format!("id-{}", brands.len() + 1), &draft.ar_name, &draft.en_name);
            brands.push(brand.clone());
            Ok(brand)
        }

        async fn update(
            &self,
            _language: Language,
            id: String,
            draft: BrandDraft,
        ) -> Result<Brand, MutationError> {
            let mut brands = self.brands.lock().unwrap();
            let brand = brands
                .iter_mut()
                .find(|b| b.id == id)
                .ok_or(MutationError::Http {
                    status: 404,
                    message: "not found".into(),
                })?;
            brand.ar_name = draft.ar_name;
            brand.en_name = draft.en_name;
            Ok(brand.clone())
        }

        async fn delete(&self, _language: Language, id: String) -> Result<(), MutationError> {
            let mut brands = self.brands.lock().unwrap();
            brands.retain(|b| b.id != id);
            Ok(())
        }

        async fn toggle(
            &self,
            _language: Language,
            id: String,
            _action: BrandToggle,
        ) -> Result<Brand, MutationError> {
            let mut brands = self.brands.lock().unwrap();
            let brand = brands
                .iter_mut()
                .find(|b| b.id == id)
                .ok_or(MutationError::Http {
                    status: 404,
                    message: "not found".into(),
                })?;
            brand.is_visible = !brand.is_visible;
            Ok(brand.clone())
        }
    }

    fn brands(count: usize) -> Vec<Brand> {
        (1..=count)
            .map(|i| Brand::sample(&format!("{i}"), "اسم", &format!("Brand {i:02}")))
            .collect()
    }

    fn key(code: KeyCode) -> Msg {
        Box::new(KeyMsg {
            key: code,
            modifiers: KeyModifiers::NONE,
        })
    }

    async fn load(view: &mut Model<Brand, MemoryClient>) {
        let cmd = view.init_fetch();
        let msg = cmd.await.expect("fetch message");
        assert!(view.update(&msg).is_none());
    }

    /// Drives a returned command to completion and feeds the resulting
    /// message back, like the runtime would.
    async fn pump(view: &mut Model<Brand, MemoryClient>, cmd: Cmd) -> Option<Cmd> {
        let msg = cmd.await?;
        view.update(&msg)
    }

    #[tokio::test]
    async fn typing_a_search_never_refetches() {
        let client = MemoryClient::with_brands(brands(5));
        let mut view = Model::new(client, Language::En);
        load(&mut view).await;

        view.update(&key(KeyCode::Char('/')));
        for c in "brand 03".chars() {
            let cmd = view.update(&key(KeyCode::Char(c)));
            assert!(cmd.is_none(), "search editing must stay local");
        }
        let visible = view.visible_items();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].en_name, "Brand 03");
    }

    #[tokio::test]
    async fn page_change_clears_the_search() {
        let client = MemoryClient::with_brands(brands(25));
        let mut view = Model::new(client, Language::En);
        load(&mut view).await;

        view.update(&key(KeyCode::Char('/')));
        view.update(&key(KeyCode::Char('b')));
        view.update(&key(KeyCode::Enter));
        assert_eq!(view.search_term(), "b");

        let cmd = view.update(&key(KeyCode::Right)).expect("page 2 fetch");
        assert_eq!(view.search_term(), "");
        assert!(pump(&mut view, cmd).await.is_none());
        assert_eq!(view.visible_items().len(), 5);
    }

    #[tokio::test]
    async fn page_size_cycle_resets_page_and_search() {
        let client = MemoryClient::with_brands(brands(60));
        let mut view = Model::new(client, Language::En);
        load(&mut view).await;

        let cmd = view.update(&key(KeyCode::Right)).expect("page 2 fetch");
        pump(&mut view, cmd).await;
        view.update(&key(KeyCode::Char('/')));
        view.update(&key(KeyCode::Char('x')));
        view.update(&key(KeyCode::Enter));

        let cmd = view.update(&key(KeyCode::Char('s'))).expect("refetch");
        assert_eq!(view.search_term(), "");
        pump(&mut view, cmd).await;
        assert_eq!(view.visible_items().len(), 50); // next size after 20
    }

    #[tokio::test]
    async fn starting_a_search_returns_to_page_one_locally() {
        let client = MemoryClient::with_brands(brands(25));
        let mut view = Model::new(client, Language::En);
        load(&mut view).await;

        let cmd = view.update(&key(KeyCode::Right)).expect("page 2 fetch");
        pump(&mut view, cmd).await;

        view.update(&key(KeyCode::Char('/')));
        let cmd = view.update(&key(KeyCode::Char('b')));
        assert!(cmd.is_none());
        // Page 1 was cached before, so rows are served from the cache.
        assert!(!view.visible_items().is_empty());
    }

    #[tokio::test]
    async fn delete_flow_confirms_then_invalidates() {
        let client = MemoryClient::with_brands(brands(3));
        let mut view = Model::new(Arc::clone(&client), Language::En);
        load(&mut view).await;

        view.update(&key(KeyCode::Char('d')));
        assert!(view.dialog().pending_delete().is_some());
        // The row is still there: deletes are never optimistic.
        assert_eq!(view.visible_items().len(), 3);

        let cmd = view.update(&key(KeyCode::Char('y'))).expect("delete cmd");
        let msg = cmd.await.expect("completion");
        let refetch = view.update(&msg).expect("invalidation refetch");
        assert!(view.toast.is_some());

        if let Some(msg) = refetch.await {
            view.update(&msg);
        }
        assert_eq!(view.visible_items().len(), 2);
        assert!(view.visible_items().iter().all(|b| b.id != "1"));
    }

    #[tokio::test]
    async fn create_validates_then_reloads_with_the_new_item() {
        let client = MemoryClient::with_brands(brands(2));
        let mut view = Model::new(Arc::clone(&client), Language::En);
        load(&mut view).await;

        let invalid = BrandDraft {
            ar_name: String::new(),
            en_name: String::new(),
            visibility_order: 0,
            is_visible: true,
        };
        assert!(view.create(invalid).is_err());
        assert_eq!(view.visible_items().len(), 2);

        let draft = BrandDraft {
            ar_name: "نايكي".into(),
            en_name: "Nike".into(),
            visibility_order: 3,
            is_visible: true,
        };
        let cmd = view.create(draft).expect("valid draft");
        let msg = cmd.await.expect("completion");
        let refetch = view.update(&msg).expect("invalidation refetch");
        if let Some(msg) = refetch.await {
            view.update(&msg);
        }
        assert_eq!(view.visible_items().len(), 3);
        assert!(view.visible_items().iter().any(|b| b.en_name == "Nike"));
    }

    #[tokio::test]
    async fn update_reflects_after_the_reload() {
        let client = MemoryClient::with_brands(brands(2));
        let mut view = Model::new(Arc::clone(&client), Language::En);
        load(&mut view).await;

        let draft = BrandDraft {
            ar_name: "جديد".into(),
            en_name: "Renamed".into(),
            visibility_order: 1,
            is_visible: true,
        };
        let cmd = view
            .update_item("1".to_string(), draft)
            .expect("valid draft")
            .expect("not busy");
        let msg = cmd.await.expect("completion");
        let refetch = view.update(&msg).expect("invalidation refetch");
        if let Some(msg) = refetch.await {
            view.update(&msg);
        }
        assert_eq!(view.visible_items()[0].en_name, "Renamed");
    }

    #[tokio::test]
    async fn cancelled_delete_touches_nothing() {
        let client = MemoryClient::with_brands(brands(3));
        let mut view = Model::new(client, Language::En);
        load(&mut view).await;

        view.update(&key(KeyCode::Char('d')));
        let cmd = view.update(&key(KeyCode::Char('n')));
        assert!(cmd.is_none());
        assert!(!view.dialog().is_open());
        assert_eq!(view.visible_items().len(), 3);
    }

    #[tokio::test]
    async fn failed_fetch_shows_error_and_retry_works() {
        let client = MemoryClient::with_brands(brands(3));
        client.set_fail(true);
        let mut view = Model::new(Arc::clone(&client), Language::En);

        let cmd = view.init_fetch();
        let msg = cmd.await.expect("failure message");
        view.update(&msg);
        assert!(view.accessor.error().is_some());

        client.set_fail(false);
        let cmd = view.update(&key(KeyCode::Char('r'))).expect("retry fetch");
        pump(&mut view, cmd).await;
        assert!(view.accessor.error().is_none());
        assert_eq!(view.visible_items().len(), 3);
    }

    #[tokio::test]
    async fn details_open_from_the_cursor_row() {
        let client = MemoryClient::with_brands(brands(3));
        let mut view = Model::new(client, Language::En);
        load(&mut view).await;

        view.update(&key(KeyCode::Down));
        view.update(&key(KeyCode::Enter));
        assert_eq!(
            view.dialog().selected().map(|b| b.id.as_str()),
            Some("2")
        );
        view.update(&key(KeyCode::Esc));
        assert!(!view.dialog().is_open());
    }

    #[tokio::test]
    async fn sort_key_toggles_by_column_position() {
        let client = MemoryClient::with_brands(vec![
            Brand::sample("1", "ب", "Zebra"),
            Brand::sample("2", "أ", "Alpha"),
        ]);
        let mut view = Model::new(client, Language::En);
        load(&mut view).await;

        view.update(&key(KeyCode::Char('1'))); // first column: enName
        let names: Vec<_> = view.visible_items().iter().map(|b| b.en_name.clone()).collect();
        assert_eq!(names, vec!["Alpha", "Zebra"]);

        view.update(&key(KeyCode::Char('1')));
        let names: Vec<_> = view.visible_items().iter().map(|b| b.en_name.clone()).collect();
        assert_eq!(names, vec!["Zebra", "Alpha"]);
    }

    #[tokio::test]
    async fn sorted_column_header_carries_the_direction_marker() {
        let client = MemoryClient::with_brands(brands(3));
        let mut view = Model::new(client, Language::En);
        load(&mut view).await;
        assert!(!view.view().contains('▲'));

        view.update(&key(KeyCode::Char('1')));
        let header = view.view();
        assert!(header.contains('▲'));

        view.update(&key(KeyCode::Char('1')));
        assert!(view.view().contains('▼'));
    }

    #[tokio::test]
    async fn table_window_follows_the_cursor_on_short_terminals() {
        let client = MemoryClient::with_brands(brands(20));
        let mut view = Model::new(client, Language::En);
        load(&mut view).await;
        let resize: Msg = Box::new(WindowSizeMsg {
            width: 80,
            height: 12,
        });
        view.update(&resize);

        for _ in 0..7 {
            view.update(&key(KeyCode::Down));
        }
        let rendered = view.view();
        assert!(rendered.contains("Brand 08"), "cursor row must stay visible");
        assert!(!rendered.contains("Brand 01"), "rows above the window are dropped");
    }

    #[tokio::test]
    async fn toggle_binding_dispatches_for_the_selected_row() {
        let client = MemoryClient::with_brands(brands(2));
        let mut view = Model::new(Arc::clone(&client), Language::En)
            .with_toggle(
                crate::key::Binding::new(vec![KeyCode::Char('v')]).with_help("v", "visibility"),
                BrandToggle::Visibility,
            );
        load(&mut view).await;

        let cmd = view.update(&key(KeyCode::Char('v'))).expect("toggle cmd");
        assert!(view.is_row_busy(&"1".to_string()));
        let msg = cmd.await.expect("completion");
        let refetch = view.update(&msg).expect("invalidate");
        assert!(!view.is_row_busy(&"1".to_string()));
        if let Some(msg) = refetch.await {
            view.update(&msg);
        }
        assert!(!view.visible_items()[0].is_visible);
    }

    #[tokio::test]
    async fn edit_and_add_emit_navigation() {
        let client = MemoryClient::with_brands(brands(2));
        let mut view = Model::new(client, Language::En);
        load(&mut view).await;

        let cmd = view.update(&key(KeyCode::Char('e'))).expect("navigate");
        let msg = cmd.await.expect("message");
        let nav = msg
            .downcast_ref::<NavigateMsg<String>>()
            .expect("navigate message");
        assert_eq!(nav.resource, "brands");
        assert_eq!(nav.route, Route::Edit("1".to_string()));

        let cmd = view.update(&key(KeyCode::Char('a'))).expect("navigate");
        let msg = cmd.await.expect("message");
        let nav = msg
            .downcast_ref::<NavigateMsg<String>>()
            .expect("navigate message");
        assert_eq!(nav.route, Route::Create);
    }

    #[tokio::test]
    async fn deleting_the_last_row_of_the_last_page_moves_back_a_page() {
        let client = MemoryClient::with_brands(brands(21));
        let mut view = Model::new(Arc::clone(&client), Language::En);
        load(&mut view).await;

        let cmd = view.update(&key(KeyCode::Right)).expect("page 2 fetch");
        pump(&mut view, cmd).await;
        assert_eq!(view.visible_items().len(), 1);

        view.update(&key(KeyCode::Char('d')));
        let cmd = view.update(&key(KeyCode::Char('y'))).expect("delete cmd");
        let msg = cmd.await.expect("completion");
        let refetch = view.update(&msg).expect("invalidate");
        if let Some(msg) = refetch.await {
            // The refetched page 2 is now empty; the paginator clamps
            // to page 1 and the view follows with one more fetch.
            if let Some(follow) = view.update(&msg) {
                pump(&mut view, follow).await;
            }
        }
        assert_eq!(view.paginator.page, 1);
        assert_eq!(view.visible_items().len(), 20);
    }
}
