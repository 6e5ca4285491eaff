//! Request-scoped observability helpers.

pub mod request_id;
