pub mod article;
pub mod url_batch;

pub use article::*;
pub use url_batch::*;
