//! Core math and utilities shared by every system

#[macro_use]
pub mod utils {
    #[macro_use]
    pub mod logging;
}

pub mod color;
pub mod vec2;

pub use vec2::Vec2;
