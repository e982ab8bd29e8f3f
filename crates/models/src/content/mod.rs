//! Admin-authored page content. Every top-level content table implements
//! [`crate::publish::Publishable`]; child tables (images, stats, steps) are
//! read through their parent.

pub mod about_section1;
pub mod about_section2;
pub mod about_section3;
pub mod about_section3_image;
pub mod about_section_one;
pub mod auth_image;
pub mod auth_page_config;
pub mod contact_config;
pub mod faq;
pub mod hero_bike_image;
pub mod hero_section;
pub mod homepage_banner;
pub mod how_it_works;
pub mod info_section;
pub mod last_section;
pub mod last_section_image;
pub mod sell_bike_page;
pub mod stat_item;
pub mod support_feature;
pub mod testimonial;
pub mod testimonials_section;
pub mod trusted_section;
