pub mod config;
pub mod pages;
pub mod responder;
pub mod server;
pub mod web;

pub use config::Config;
pub use responder::{BufferedResponse, ResponseWriter, SendError};
pub use server::{router, run, AppState};
