pub mod accessibility_menu;
pub mod accordion;
pub mod cta;
pub mod drawer;
pub mod gallery;
pub mod hero_carousel;
pub mod lightbox;
pub mod nav_link;
pub mod portfolio_filters;
pub mod project_card;
pub mod site_footer;
pub mod site_header;
pub mod snap_carousel;
pub mod theme_toggle;
