use std::path::Path;

use crate::{
    core::{client::Client, error::AppResult},
    ui::display::AppUI,
};

pub struct App {
    pub ui: AppUI,
    pub client: Client,
}

impl App {
    pub fn new(repository_dir: Option<&Path>) -> AppResult<Self> {
        let client = Client::new(repository_dir)?;

        Ok(App {
            ui: AppUI::new(),
            client,
        })
    }
}
