pub(crate) mod error;
pub(crate) mod list_helper;
pub(crate) mod post;
pub(crate) mod user;
