//! Page renderers for the compass face and the debug view.

mod compass;
mod debug;

pub use compass::draw_compass_page;
pub use debug::draw_debug_page;
