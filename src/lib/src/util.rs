pub mod fs;
pub mod html;
