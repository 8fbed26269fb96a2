mod robots;
mod sitemap;

pub use robots::build_robots_txt;
pub use sitemap::{build_sitemap, escape_xml, SITEMAP_NAMESPACE};
