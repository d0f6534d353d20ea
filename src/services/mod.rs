pub mod apify_client;
pub mod excel_export;
pub mod session;

pub use apify_client::*;
pub use excel_export::*;
pub use session::*;
