// src/application/commands/catalog/mod.rs
mod create;
mod delete;
mod rename;
mod service;
mod toggle;

pub use create::{CreateCatalogEntityCommand, CreateCatalogEntityCommandBuilder};
pub use delete::DeleteCatalogEntitiesCommand;
pub use rename::RenameCatalogEntityCommand;
pub use service::CatalogCommandService;
pub use toggle::ToggleStatusCommand;
