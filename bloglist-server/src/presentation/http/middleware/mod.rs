pub(crate) mod auth;
pub(crate) mod cors;
pub(crate) mod limits;
pub(crate) mod request_logger;
pub(crate) mod trace;
