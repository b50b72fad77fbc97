pub mod icons;
pub mod side_nav_footer;

pub use side_nav_footer::SideNavFooter;
