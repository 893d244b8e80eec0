//! Interactive brands table against a running admin API.
//!
//! Point `ADMIN_API_URL` at the backend, then:
//!
//! ```sh
//! ADMIN_API_URL=http://localhost:3000/api/admin cargo run --example brands
//! ```
//!
//! Keys: `↑/↓` move, `←/→` page, `s` page size, `/` search, `1`-`4`
//! sort, `enter` details, `v` toggle visibility, `d` delete, `q` quit.

use backoffice_widgets::brands::{Brand, BrandToggle};
use backoffice_widgets::entity::Language;
use backoffice_widgets::http::RestCollectionClient;
use backoffice_widgets::key::Binding;
use backoffice_widgets::listview;
use bubbletea_rs::{Cmd, Model, Msg, Program};
use crossterm::event::KeyCode;
use std::sync::Arc;

struct App {
    view: listview::Model<Brand, RestCollectionClient<Brand>>,
}

impl Model for App {
    fn init() -> (Self, Option<Cmd>) {
        let base_url = std::env::var("ADMIN_API_URL")
            .unwrap_or_else(|_| "http://localhost:3000/api/admin".to_string());
        let client = Arc::new(RestCollectionClient::new(base_url));
        let mut view = listview::Model::new(client, Language::En)
            .with_title("Brands")
            .with_toggle(
                Binding::new(vec![KeyCode::Char('v')]).with_help("v", "toggle visibility"),
                BrandToggle::Visibility,
            );
        let cmd = view.init_fetch();
        (Self { view }, Some(cmd))
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.view.update(&msg)
    }

    fn view(&self) -> String {
        self.view.view()
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let program = Program::<App>::builder().build()?;
    program.run().await?;
    Ok(())
}
