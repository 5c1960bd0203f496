//! HTTP layer: the relay endpoint, debug endpoints and static front end.

pub mod error;
pub mod handlers;
pub mod router;

#[cfg(test)]
pub(crate) mod test_support;
