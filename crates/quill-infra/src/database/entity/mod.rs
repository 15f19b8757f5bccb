//! SeaORM entities mapping the `users` and `posts` collections.

pub mod post;
pub mod user;
