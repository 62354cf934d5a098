//! Comment operations.

use tracing::instrument;

use homelib_core::model::{Comment, CommentRequest, Envelope};
use homelib_core::Result;

use crate::endpoints::{self, NewCommentBody};
use crate::gateway::Gateway;

impl Gateway {
    /// List a book's comments.
    #[instrument(skip(self), fields(base = %self.base_url()))]
    pub async fn list_comments(&self, library_id: &str, book_id: &str) -> Result<Vec<Comment>> {
        let response: Envelope<Vec<Comment>> = self
            .get(&endpoints::comments(library_id, book_id))
            .await?;
        Ok(response.data)
    }

    /// Fetch a single comment.
    #[instrument(skip(self), fields(base = %self.base_url()))]
    pub async fn get_comment(
        &self,
        library_id: &str,
        book_id: &str,
        comment_id: &str,
    ) -> Result<Comment> {
        let response: Envelope<Comment> = self
            .get(&endpoints::comment(library_id, book_id, comment_id))
            .await?;
        Ok(response.data)
    }

    /// Comment on a book.
    ///
    /// The service wants the book id in the body as well as the path; it
    /// is injected here so callers pass it once.
    #[instrument(skip(self, request), fields(base = %self.base_url()))]
    pub async fn create_comment(
        &self,
        library_id: &str,
        book_id: &str,
        request: &CommentRequest,
    ) -> Result<Comment> {
        let body = NewCommentBody {
            book_id,
            text: &request.text,
            rating: request.rating,
        };
        let response: Envelope<Comment> = self
            .post(&endpoints::comments(library_id, book_id), &body)
            .await?;
        Ok(response.data)
    }

    /// Update a comment.
    #[instrument(skip(self, request), fields(base = %self.base_url()))]
    pub async fn update_comment(
        &self,
        library_id: &str,
        book_id: &str,
        comment_id: &str,
        request: &CommentRequest,
    ) -> Result<Comment> {
        let response: Envelope<Comment> = self
            .put(&endpoints::comment(library_id, book_id, comment_id), request)
            .await?;
        Ok(response.data)
    }

    /// Delete a comment. Returns the deleted id.
    #[instrument(skip(self), fields(base = %self.base_url()))]
    pub async fn delete_comment(
        &self,
        library_id: &str,
        book_id: &str,
        comment_id: &str,
    ) -> Result<String> {
        let response: Envelope<String> = self
            .delete(&endpoints::comment(library_id, book_id, comment_id))
            .await?;
        Ok(response.data)
    }
}
