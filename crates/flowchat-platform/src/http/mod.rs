pub mod fetch;

pub use fetch::FetchHttp;
