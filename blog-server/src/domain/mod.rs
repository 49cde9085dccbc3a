pub mod error;
pub mod post;

pub use error::DomainError;
pub use post::Post;
