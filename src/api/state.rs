//! Shared handler state

use crate::adapters::database::LeadStore;
use crate::config::ServerConfig;
use crate::core::export::LeadExporter;
use crate::core::import::LeadImporter;
use crate::core::leads::LeadService;
use std::sync::Arc;

pub struct AppState {
    pub store: Arc<dyn LeadStore>,
    pub leads: LeadService,
    pub importer: LeadImporter,
    pub exporter: LeadExporter,
}

impl AppState {
    /// Wire the services around one store
    pub fn new(store: Arc<dyn LeadStore>, config: &ServerConfig) -> Arc<Self> {
        Arc::new(Self {
            leads: LeadService::from_config(store.clone(), config),
            importer: LeadImporter::new(store.clone()),
            exporter: LeadExporter::new(store.clone()),
            store,
        })
    }
}
