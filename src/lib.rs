//! Hex color inspection: validate a `#rgb`/`#rrggbb` code and derive its
//! RGB and HSL representations.
//!
//! The conversion pipeline lives in [`color`]; [`cli`] is the `show`
//! command dispatcher used by the `hexcolor` binary.

pub mod cli;
pub mod color;

pub use color::{Color, ColorError};
