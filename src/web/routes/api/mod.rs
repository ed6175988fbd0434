pub mod subscribe;

pub use subscribe::{subscribe, subscriber_count};
