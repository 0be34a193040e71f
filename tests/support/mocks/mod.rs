// tests/support/mocks/mod.rs
pub mod repos;
pub mod time;

pub use repos::FailingArticleRepo;
pub use time::{DummyClock, SteppingClock, fixed_now};
