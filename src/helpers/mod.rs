//! Query helpers over loaded posts
//!
//! All of these are pure: they read a slice of posts (or a string) and
//! return fresh values without touching their input.

mod date;
mod list;
mod reading;

pub use date::*;
pub use list::*;
pub use reading::*;
