pub mod request;
pub mod serve;
