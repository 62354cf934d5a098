//! homelib-core - Core types for the homelib library service client.
//!
//! This crate holds the pieces shared by every client frontend: the wire
//! data model, the error taxonomy with its user-presentable messages,
//! token and credential newtypes, and the credential storage trait the
//! HTTP gateway persists sessions through.

pub mod credentials;
pub mod error;
pub mod model;
pub mod store;
pub mod tokens;
pub mod types;

// Re-export primary types at crate root for convenience
pub use credentials::Credentials;
pub use error::{ApiError, AuthError, Error, FieldError, InvalidInputError, TransportError};
pub use model::{
    Book, BookRequest, BookShort, BookUpdateRequest, BookWithComments, Comment, CommentRequest,
    Envelope, Library, LibraryRequest, Page, PageQuery, PrivacyStatus, RegistrationRequest, Role,
    User, UserShort,
};
pub use store::{CredentialStore, MemoryStore, StoredCredentials};
pub use tokens::{AccessToken, RefreshToken};
pub use types::BaseUrl;

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
