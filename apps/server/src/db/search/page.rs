use super::request::PageWindow;
use serde::{Deserialize, Serialize};

/// One page of mapped search results plus paging metadata.
///
/// `total_elements` counts the whole filtered set, before the page window is applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResult<T> {
    pub content: Vec<T>,
    pub total_elements: u64,
    pub page_number: u64,
    pub page_size: u64,
    pub total_pages: u64,
    pub number_of_elements: u64,
    pub first: bool,
    pub last: bool,
    pub has_next: bool,
    pub has_previous: bool,
}

impl<T> PageResult<T> {
    pub fn new(content: Vec<T>, total_elements: u64, window: PageWindow) -> Self {
        let PageWindow {
            page_number,
            page_size,
        } = window;
        let total_pages = total_elements.div_ceil(page_size);
        let has_next = page_number.saturating_add(1) < total_pages;
        Self {
            number_of_elements: content.len() as u64,
            content,
            total_elements,
            page_number,
            page_size,
            total_pages,
            first: page_number == 0,
            last: !has_next,
            has_next,
            has_previous: page_number > 0,
        }
    }

}
