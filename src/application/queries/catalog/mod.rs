mod list;
mod search;
mod service;

pub use search::SearchCatalogQuery;
pub use service::CatalogQueryService;
