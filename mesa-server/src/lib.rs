//! Mesa Server - table reservation service
//!
//! One allocation engine behind two front-ends:
//!
//! - **REST** (`api`): JSON over HTTP
//! - **SOAP** (`soap`): document/literal envelopes at `/wsdl`
//! - **Integration** (`services::integration`): a REST route that places
//!   the reservation through the SOAP endpoint over a real HTTP call
//!
//! # Module layout
//!
//! ```text
//! mesa-server/src/
//! ├── core/          # config, state, bootstrap errors, listener
//! ├── reservations/  # catalog, store, allocation engine
//! ├── api/           # REST routes and handlers
//! ├── soap/          # SOAP route and operation dispatch
//! ├── services/      # router assembly, integration pathway
//! └── utils/         # error mapping, logging
//! ```

pub mod api;
pub mod core;
pub mod reservations;
pub mod services;
pub mod soap;
pub mod utils;

pub use core::{Config, Server, ServerState};
pub use reservations::{Catalog, ReservationEngine};
pub use utils::{ApiResponse, AppError, AppResult, ErrorCode};

pub use utils::logger::{init_logger, init_logger_with_file};
