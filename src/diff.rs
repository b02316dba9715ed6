//! Positional side-by-side alignment of two line sequences and its
//! fixed-width text rendering.

mod align;
mod render;

pub use align::*;
pub use render::*;

#[cfg(test)]
mod tests;
