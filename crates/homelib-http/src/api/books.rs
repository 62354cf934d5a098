//! Book operations.

use tracing::instrument;

use homelib_core::model::{
    Book, BookRequest, BookShort, BookUpdateRequest, BookWithComments, Envelope, Page, PageQuery,
};
use homelib_core::Result;

use crate::endpoints;
use crate::gateway::Gateway;

impl Gateway {
    /// List a library's books, paginated, in the short shape.
    #[instrument(skip(self), fields(base = %self.base_url()))]
    pub async fn list_books(&self, library_id: &str, page: &PageQuery) -> Result<Page<BookShort>> {
        let response: Envelope<Page<BookShort>> =
            self.get_with(&endpoints::books(library_id), page).await?;
        Ok(response.data)
    }

    /// Fetch a single book with its comments.
    #[instrument(skip(self), fields(base = %self.base_url()))]
    pub async fn get_book(&self, library_id: &str, book_id: &str) -> Result<BookWithComments> {
        let response: Envelope<BookWithComments> =
            self.get(&endpoints::book(library_id, book_id)).await?;
        Ok(response.data)
    }

    /// Add a book to a library.
    #[instrument(skip(self, request), fields(base = %self.base_url(), title = %request.title))]
    pub async fn create_book(&self, library_id: &str, request: &BookRequest) -> Result<Book> {
        let response: Envelope<Book> =
            self.post(&endpoints::books(library_id), request).await?;
        Ok(response.data)
    }

    /// Update a book. Absent fields are left unchanged.
    #[instrument(skip(self, request), fields(base = %self.base_url()))]
    pub async fn update_book(
        &self,
        library_id: &str,
        book_id: &str,
        request: &BookUpdateRequest,
    ) -> Result<BookWithComments> {
        let response: Envelope<BookWithComments> = self
            .put(&endpoints::book(library_id, book_id), request)
            .await?;
        Ok(response.data)
    }

    /// Delete a book. Returns the deleted id.
    #[instrument(skip(self), fields(base = %self.base_url()))]
    pub async fn delete_book(&self, library_id: &str, book_id: &str) -> Result<String> {
        let response: Envelope<String> =
            self.delete(&endpoints::book(library_id, book_id)).await?;
        Ok(response.data)
    }
}
