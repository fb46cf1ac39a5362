//! Result mapping: stored entities → response records → page

use super::page::PageResult;
use super::request::PageWindow;

/// Pure, stateless entity → response projection.
pub trait ResultMapper: Send + Sync {
    type Entity;
    type Response;

    fn map_entity(&self, entity: Self::Entity) -> Self::Response;

    /// Map a list of entities, preserving order.
    ///
    /// An absent list maps to an absent list, not an empty one.
    fn map_entities(&self, entities: Option<Vec<Self::Entity>>) -> Option<Vec<Self::Response>> {
        entities.map(|entities| {
            entities
                .into_iter()
                .map(|entity| self.map_entity(entity))
                .collect()
        })
    }
}

/// Map one page of rows from the pager into a [`PageResult`].
pub fn map_page<M: ResultMapper>(
    mapper: &M,
    rows: Vec<M::Entity>,
    total_elements: u64,
    window: PageWindow,
) -> PageResult<M::Response> {
    let content = mapper.map_entities(Some(rows)).unwrap_or_default();
    PageResult::new(content, total_elements, window)
}
