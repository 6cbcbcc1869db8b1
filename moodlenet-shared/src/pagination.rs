//! # Pagination
//!
//! Cursor-paginated listings with "load more" semantics. [`PagedList`] holds
//! the accumulated items and the status of the fetches. Pages come from an
//! injected [`CommunityFetcher`] through [`fetch_page`]; the results are fed
//! back with [`PagedList::initial_finished`] and
//! [`PagedList::load_more_finished`].

use std::collections::HashSet;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::errors::FetchResult;
use crate::models::{CommunitiesVariables, Community, CommunityPage, Cursor, Page, PageInfo};

/// Translation key of the message shown when a listing cannot be loaded.
pub const LIST_ERROR: &str = "communities.error";

/// Items with a stable identity, used to avoid showing an item twice.
pub trait Keyed {
    /// Identity of the item within a listing.
    fn key(&self) -> &str;
}

impl Keyed for Community {
    fn key(&self) -> &str {
        &self.id
    }
}

/// Progress of the initial load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListStatus {
    #[default]
    Loading,
    Failed,
    Ready,
}

/// Items fetched so far plus the cursors to continue from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagedList<T> {
    items: Vec<T>,
    page_info: PageInfo,
    status: ListStatus,
    has_more: bool,
    loading_more: bool,
    load_more_failed: bool,
}

impl<T> Default for PagedList<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            page_info: PageInfo::default(),
            status: ListStatus::Loading,
            has_more: false,
            loading_more: false,
            load_more_failed: false,
        }
    }
}

impl<T: Keyed> PagedList<T> {
    /// A list whose first page is being fetched.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Items in the order they were received.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn page_info(&self) -> &PageInfo {
        &self.page_info
    }

    pub fn status(&self) -> ListStatus {
        self.status
    }

    /// Whether a "load more" control should be offered.
    pub fn has_more(&self) -> bool {
        self.status == ListStatus::Ready && self.has_more
    }

    pub fn is_loading_more(&self) -> bool {
        self.loading_more
    }

    /// Whether the last "load more" request failed.
    pub fn load_more_failed(&self) -> bool {
        self.load_more_failed
    }

    /// Install the first page, replacing anything held before.
    pub fn initial_loaded(&mut self, page: Page<T>) {
        self.items.clear();
        self.status = ListStatus::Ready;
        self.loading_more = false;
        self.load_more_failed = false;
        self.accept(page);
    }

    /// The first page could not be fetched.
    pub fn initial_failed(&mut self) {
        self.status = ListStatus::Failed;
        self.loading_more = false;
    }

    /// Start a "load more" request.
    ///
    /// Returns the cursor to request from, or `None` when there is nothing
    /// to load or a request is already in flight.
    pub fn begin_load_more(&mut self) -> Option<Cursor> {
        if !self.has_more() || self.loading_more {
            return None;
        }
        let cursor = self.page_info.end_cursor.clone()?;
        self.loading_more = true;
        self.load_more_failed = false;
        Some(cursor)
    }

    /// Append the next page. Returns how many items were added.
    ///
    /// Items already present are skipped; order is otherwise preserved.
    pub fn append_page(&mut self, page: Page<T>) -> usize {
        self.loading_more = false;
        let before = self.items.len();
        self.accept(page);
        self.items.len() - before
    }

    /// The "load more" request failed. Items already shown stay.
    pub fn load_more_failed_with_error(&mut self) {
        self.loading_more = false;
        self.load_more_failed = true;
    }

    /// Apply the result of the first-page request.
    pub fn initial_finished(&mut self, result: FetchResult<Page<T>>) {
        match result {
            Ok(page) => {
                debug!(count = page.nodes.len(), "first page loaded");
                self.initial_loaded(page);
            }
            Err(err) => {
                warn!(error = %err, "failed to load first page");
                self.initial_failed();
            }
        }
    }

    /// Apply the result of a "load more" request. Returns how many items
    /// were added.
    ///
    /// A result arriving when no request is outstanding is ignored.
    pub fn load_more_finished(&mut self, result: FetchResult<Page<T>>) -> usize {
        if !self.loading_more {
            debug!("page ignored, no request outstanding");
            return 0;
        }
        match result {
            Ok(page) => {
                let added = self.append_page(page);
                debug!(added, total = self.items.len(), "next page loaded");
                added
            }
            Err(err) => {
                warn!(error = %err, "failed to load next page");
                self.load_more_failed_with_error();
                0
            }
        }
    }

    fn accept(&mut self, page: Page<T>) {
        let Page { nodes, page_info } = page;
        let mut seen: HashSet<String> = self.items.iter().map(|item| item.key().to_string()).collect();
        let received = nodes.len();
        self.items.extend(
            nodes
                .into_iter()
                .filter(|item| seen.insert(item.key().to_string())),
        );
        self.has_more = received > 0 && page_info.end_cursor.is_some();
        // An empty page carries no cursors worth keeping.
        if received > 0 {
            self.page_info = page_info;
        }
    }
}

/// Fetches pages of the communities listing.
#[async_trait(?Send)]
pub trait CommunityFetcher {
    /// Run the communities query.
    ///
    /// # Errors
    /// Returns an error on transport failure, GraphQL errors or missing data.
    async fn fetch_communities(&self, variables: CommunitiesVariables)
    -> FetchResult<CommunityPage>;
}

#[async_trait(?Send)]
impl<F: CommunityFetcher + ?Sized> CommunityFetcher for &F {
    async fn fetch_communities(
        &self,
        variables: CommunitiesVariables,
    ) -> FetchResult<CommunityPage> {
        (**self).fetch_communities(variables).await
    }
}

/// Variables of the page after `cursor`, or of the first page.
#[must_use]
pub fn page_variables(page_size: u32, cursor: Option<Cursor>) -> CommunitiesVariables {
    CommunitiesVariables {
        limit: page_size,
        cursor,
    }
}

/// Fetch `page_size` communities after `cursor`.
///
/// # Errors
/// Returns the fetcher's error unchanged.
pub async fn fetch_page<F>(
    fetcher: &F,
    page_size: u32,
    cursor: Option<Cursor>,
) -> FetchResult<CommunityPage>
where
    F: CommunityFetcher + ?Sized,
{
    fetcher
        .fetch_communities(page_variables(page_size, cursor))
        .await
}
