pub mod records;
pub mod routes;

pub use records::*;
pub use routes::*;

/// Content type every page handler answers with
pub const TEXT_HTML: &str = "text/html";
