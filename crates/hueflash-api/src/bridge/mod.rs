// Bridge v1 REST API
//
// `client` holds transport mechanics; endpoint groups are inherent
// methods on `BridgeClient` in their own files.

pub mod auth;
pub mod client;
pub mod lights;
pub mod models;

pub use client::BridgeClient;
