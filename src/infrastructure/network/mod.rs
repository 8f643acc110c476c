pub mod client;
pub mod deeplx;
pub mod http;
