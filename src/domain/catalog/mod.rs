pub mod entity;
pub mod filters;
pub mod repository;
pub mod value_objects;

pub use entity::{CatalogEntity, CatalogEntityUpdate, NewCatalogEntity};
pub use filters::{CatalogFilter, StatusFilter};
pub use repository::CatalogRepository;
pub use value_objects::{CatalogKind, EntityId, EntityName, EntitySlug, EntityStatus};
