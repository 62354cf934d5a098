//! Library operations.

use tracing::instrument;

use homelib_core::model::{Envelope, Library, LibraryRequest, Page, PageQuery};
use homelib_core::Result;

use crate::endpoints;
use crate::gateway::Gateway;

impl Gateway {
    /// List the caller's libraries, paginated.
    #[instrument(skip(self), fields(base = %self.base_url()))]
    pub async fn list_libraries(&self, page: &PageQuery) -> Result<Page<Library>> {
        let response: Envelope<Page<Library>> =
            self.get_with(endpoints::LIBRARIES, page).await?;
        Ok(response.data)
    }

    /// List every library visible to the caller, unpaginated.
    #[instrument(skip(self), fields(base = %self.base_url()))]
    pub async fn list_all_libraries(&self) -> Result<Vec<Library>> {
        let response: Envelope<Vec<Library>> = self.get(endpoints::ALL_LIBRARIES).await?;
        Ok(response.data)
    }

    /// Fetch a single library.
    #[instrument(skip(self), fields(base = %self.base_url()))]
    pub async fn get_library(&self, id: &str) -> Result<Library> {
        let response: Envelope<Library> = self.get(&endpoints::library(id)).await?;
        Ok(response.data)
    }

    /// Create a library.
    #[instrument(skip(self, request), fields(base = %self.base_url(), title = %request.title))]
    pub async fn create_library(&self, request: &LibraryRequest) -> Result<Library> {
        let response: Envelope<Library> = self.post(endpoints::LIBRARIES, request).await?;
        Ok(response.data)
    }

    /// Replace a library's fields.
    #[instrument(skip(self, request), fields(base = %self.base_url()))]
    pub async fn update_library(&self, id: &str, request: &LibraryRequest) -> Result<Library> {
        let response: Envelope<Library> =
            self.put(&endpoints::library(id), request).await?;
        Ok(response.data)
    }

    /// Delete a library. Returns the deleted id.
    #[instrument(skip(self), fields(base = %self.base_url()))]
    pub async fn delete_library(&self, id: &str) -> Result<String> {
        let response: Envelope<String> = self.delete(&endpoints::library(id)).await?;
        Ok(response.data)
    }
}
