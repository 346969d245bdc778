// Posting and Listing of generated job descriptions.
// All table access goes through the JobStore trait in store.rs.

pub mod handlers;
pub mod service;
pub mod store;
