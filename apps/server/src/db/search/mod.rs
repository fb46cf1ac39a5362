//! Collection search: request types, engine, SQL builder and result paging

pub mod engine;
pub(crate) mod escape;
pub mod mapper;
pub mod page;
pub mod query_builder;
pub mod request;

pub use engine::{resolve_sort, SearchEngine};
pub use mapper::{map_page, ResultMapper};
pub use page::PageResult;
pub use request::{PageWindow, SearchRequest, SortDirection, SortSpec};
