// Interface adapters: HTTP protocol, error responses and request handling.

pub mod dispatch;
pub mod errors;
pub mod handlers;
pub mod protocol;
pub mod routes;
pub mod state;
