use std::sync::Arc;

use crate::core::{Config, Result};
use crate::reservations::{Catalog, ReservationEngine};
use crate::services::IntegrationService;

/// Server state - shared handles for every adapter
///
/// Cheap to clone; the REST routes, the SOAP route and the integration
/// pathway all see the same [`ReservationEngine`].
///
/// | Field | Purpose |
/// |-------|---------|
/// | config | Immutable configuration |
/// | engine | The one allocation engine |
/// | integration | Outbound SOAP client for the integration pathway |
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Config,
    pub engine: Arc<ReservationEngine>,
    pub integration: IntegrationService,
}

impl ServerState {
    pub fn new(config: Config, engine: Arc<ReservationEngine>, integration: IntegrationService) -> Self {
        Self {
            config,
            engine,
            integration,
        }
    }

    /// Load the catalog and build every service
    pub fn initialize(config: &Config) -> Result<Self> {
        let catalog = match &config.catalog_path {
            Some(path) => {
                let catalog = Catalog::load(path)?;
                tracing::info!(path = %path, tables = catalog.table_count(), "Catalog loaded");
                catalog
            }
            None => {
                tracing::info!("No CATALOG_PATH set, using built-in catalog");
                Catalog::builtin()
            }
        };

        let integration = IntegrationService::new(config)?;
        tracing::info!(endpoint = %integration.endpoint(), "Integration pathway configured");

        Ok(Self::new(
            config.clone(),
            Arc::new(ReservationEngine::new(catalog)),
            integration,
        ))
    }
}
