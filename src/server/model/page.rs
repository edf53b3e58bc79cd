use crate::{
    model::api::PagedDto,
    server::util::pagination::{total_pages, LinkBuilder, PageRequest},
};

/// One page of domain models together with the selection that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub request: PageRequest,
    /// Total number of items across all pages.
    pub total: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, request: PageRequest, total: u64) -> Self {
        Self {
            items,
            request,
            total,
        }
    }

    /// Converts the page into its API envelope, rendering navigation links.
    ///
    /// # Arguments
    /// - `links` - Link builder for the endpoint that served the page
    /// - `convert` - Conversion applied to every item
    pub fn into_dto<D>(self, links: &LinkBuilder, convert: impl FnMut(T) -> D) -> PagedDto<D> {
        PagedDto {
            links: links.page_links(self.request, self.total),
            items: self.items.into_iter().map(convert).collect(),
            page: self.request.page,
            page_size: self.request.page_size,
            total_count: self.total,
            total_pages: total_pages(self.total, self.request.page_size),
        }
    }
}
