pub mod model;
pub use model::Model;

pub mod repository;
pub use repository::Repository;

use std::sync::Arc;

use navicula::types::EnvironmentType;

use super::api::UkelonnApi;
use super::types::{self, ClientConfig};
use crate::store::Bus;

#[derive(Clone)]
pub struct Environment {
    pub model: Model,
    pub config: ClientConfig,
    /// Every action the store applies is published here for the sagas
    pub bus: Bus,
}

impl EnvironmentType for Environment {
    type AppEvent = types::AppEvent;
}

impl std::fmt::Debug for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Environment")
            .field("server_url", &self.config.server_url)
            .finish()
    }
}

impl Environment {
    pub fn new(repository: Repository) -> Result<Self, String> {
        let config = repository.config()?;
        let model = Model::new(&config.server_url)?;
        Ok(Self {
            model,
            config,
            bus: Bus::default(),
        })
    }

    pub fn api(&self) -> Arc<dyn UkelonnApi> {
        Arc::new(self.model.clone())
    }
}
