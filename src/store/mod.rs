// Linkvault remote store boundary
// The hosted backend is an external collaborator: authentication, durable
// storage, and change notification live behind the `RemoteStore` trait.

pub mod client;
pub mod http;
pub mod memory;

pub use client::{ChangeFeed, RemoteStore};
