//! Typed operations over the gateway, one module per service resource.
//!
//! These are inherent impls on [`Gateway`](crate::Gateway); the modules
//! only group them by resource.

mod auth;
mod books;
mod comments;
mod libraries;
