//! Domain entities - the core business objects.

mod post;
mod user;

pub use post::{Comment, Post, Reply};
pub use user::User;
