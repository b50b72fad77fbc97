pub mod prefix;
pub mod side_nav_toggle;

pub use prefix::use_prefix;
pub use prefix::Prefix;
pub use side_nav_toggle::use_side_nav_toggle;
