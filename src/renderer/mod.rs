mod pt;
mod util;

pub use pt::*;
