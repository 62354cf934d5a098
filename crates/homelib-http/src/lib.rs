//! homelib-http - Authenticated HTTP gateway for the homelib library service.
//!
//! The [`Gateway`] owns credential injection and expiry recovery: requests
//! that fail with 401 on protected endpoints queue behind a single token
//! refresh and are replayed exactly once. Typed operations for the
//! service's resources (auth, libraries, books, comments) are implemented
//! on top of it.
//!
//! # Example
//!
//! ```no_run
//! use homelib_core::{BaseUrl, Credentials};
//! use homelib_http::Gateway;
//!
//! # async fn example() -> homelib_core::Result<()> {
//! let base = BaseUrl::new("http://localhost:8080")?;
//! let gateway = Gateway::new(base);
//!
//! let user = gateway
//!     .login(&Credentials::new("alice@example.com", "password"))
//!     .await?;
//! println!("logged in as {}", user.username);
//!
//! let libraries = gateway.list_all_libraries().await?;
//! for library in libraries {
//!     println!("{}: {}", library.id, library.title);
//! }
//! # Ok(())
//! # }
//! ```

mod api;
pub mod endpoints;
mod gateway;
mod store;

pub use gateway::{DEFAULT_TIMEOUT, Gateway, GatewayBuilder, SessionEvent};
pub use store::{FileStore, default_session_path, open_default_store};
