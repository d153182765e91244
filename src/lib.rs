//! Render HTK grammar networks as SVG or PNG images.
//!
//! See [`htkviz_core`] for the library, and the `htkviz` binary for the command line.
#[doc(inline)]
pub use htkviz_core::*;
