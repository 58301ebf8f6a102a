//! Adapter implementations for application ports

mod reqwest_client;

pub use reqwest_client::ReqwestHttpClient;
