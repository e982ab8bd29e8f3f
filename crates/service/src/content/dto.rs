//! Public JSON shapes for page content. Every stored image path is paired
//! with an absolute `*_url`.

use chrono::{DateTime, FixedOffset};
use models::content::{
    about_section1, about_section2, about_section3, about_section3_image, about_section_one, contact_config, faq,
    hero_bike_image, hero_section, homepage_banner, how_it_works, info_section, last_section, last_section_image,
    sell_bike_page, stat_item, support_feature, testimonial, testimonials_section, trusted_section,
};
use serde::{ser::SerializeMap, Serialize, Serializer};
use serde_json::Value;

use crate::media::MediaUrls;

type Timestamp = DateTime<FixedOffset>;

#[derive(Debug, Clone, Serialize)]
pub struct HeroBikeImage {
    pub id: i32,
    pub image: String,
    pub image_url: Option<String>,
    pub order: i32,
}

impl HeroBikeImage {
    pub fn new(m: hero_bike_image::Model, media: &MediaUrls) -> Self {
        Self { id: m.id, image_url: media.url_of(&m.image), image: m.image, order: m.order }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HeroSection {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub button_text: String,
    pub trapezoid_image: String,
    pub trapezoid_image_url: Option<String>,
    pub bike_images: Vec<HeroBikeImage>,
}

impl HeroSection {
    pub fn new(m: hero_section::Model, bike_images: Vec<HeroBikeImage>, media: &MediaUrls) -> Self {
        Self {
            id: m.id,
            title: m.title,
            description: m.description,
            button_text: m.button_text,
            trapezoid_image_url: media.url_of(&m.trapezoid_image),
            trapezoid_image: m.trapezoid_image,
            bike_images,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct InfoSection {
    pub id: i32,
    pub description: String,
    pub button_text: String,
    pub bike_image: String,
    pub bike_image_url: Option<String>,
    pub order: i32,
}

impl InfoSection {
    pub fn new(m: info_section::Model, media: &MediaUrls) -> Self {
        Self {
            id: m.id,
            description: m.description,
            button_text: m.button_text,
            bike_image_url: media.url_of(&m.bike_image),
            bike_image: m.bike_image,
            order: m.order,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SupportFeature {
    pub id: i32,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub image: String,
    pub image_url: Option<String>,
    pub arrow_image: Option<String>,
    pub arrow_image_url: Option<String>,
    pub arrow: String,
    pub order: i32,
}

impl SupportFeature {
    pub fn new(m: support_feature::Model, media: &MediaUrls) -> Self {
        Self {
            id: m.id,
            title: m.title,
            subtitle: m.subtitle,
            description: m.description,
            image_url: media.url_of(&m.image),
            image: m.image,
            arrow_image_url: media.url(m.arrow_image.as_deref()),
            arrow_image: m.arrow_image,
            arrow: m.arrow,
            order: m.order,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StatItem {
    pub id: i32,
    pub icon_url: Option<String>,
    pub value: String,
    pub caption: String,
    pub order: i32,
    pub is_visible: bool,
}

impl StatItem {
    pub fn new(m: stat_item::Model, media: &MediaUrls) -> Self {
        Self {
            id: m.id,
            icon_url: media.url(m.icon.as_deref()),
            value: m.value,
            caption: m.caption,
            order: m.order,
            is_visible: m.is_visible,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HomepageBanner {
    pub id: i32,
    pub title: String,
    pub logo_url: Option<String>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub stats: Vec<StatItem>,
}

impl HomepageBanner {
    pub fn new(m: homepage_banner::Model, stats: Vec<StatItem>, media: &MediaUrls) -> Self {
        Self {
            id: m.id,
            title: m.title,
            logo_url: media.url(m.logo.as_deref()),
            is_active: m.is_active,
            created_at: m.created_at,
            stats,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TestimonialsSection {
    pub id: i32,
    pub title: String,
    pub subtitle: Option<String>,
    pub is_active: bool,
}

impl From<testimonials_section::Model> for TestimonialsSection {
    fn from(m: testimonials_section::Model) -> Self {
        Self { id: m.id, title: m.title, subtitle: m.subtitle, is_active: m.is_active }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Testimonial {
    pub id: i32,
    pub name: String,
    pub role: Option<String>,
    pub quote: String,
    pub image_url: Option<String>,
    pub is_visible: bool,
    pub order: i32,
}

impl Testimonial {
    pub fn new(m: testimonial::Model, media: &MediaUrls) -> Self {
        Self {
            id: m.id,
            name: m.name,
            role: m.role,
            quote: m.quote,
            image_url: media.url(m.image.as_deref()),
            is_visible: m.is_visible,
            order: m.order,
        }
    }
}

/// The section header is optional; the list is always present.
#[derive(Debug, Clone, Serialize)]
pub struct Testimonials {
    pub section: Option<TestimonialsSection>,
    pub testimonials: Vec<Testimonial>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TrustedSection {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    pub is_active: bool,
    pub created_at: Timestamp,
}

impl TrustedSection {
    pub fn new(m: trusted_section::Model, media: &MediaUrls) -> Self {
        Self {
            id: m.id,
            title: m.title,
            description: m.description,
            image_url: media.url(m.image.as_deref()),
            is_active: m.is_active,
            created_at: m.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Faq {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub order: i32,
}

impl From<faq::Model> for Faq {
    fn from(m: faq::Model) -> Self {
        Self { id: m.id, question: m.question, answer: m.answer, order: m.order }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactConfig {
    pub id: i32,
    pub heading: String,
    pub subheading: Option<String>,
    pub address: Option<String>,
    pub map_embed_url: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub email: Option<String>,
    pub reason_choices: Value,
    pub found_us_choices: Value,
}

impl From<contact_config::Model> for ContactConfig {
    fn from(m: contact_config::Model) -> Self {
        Self {
            id: m.id,
            heading: m.heading,
            subheading: m.subheading,
            address: m.address,
            map_embed_url: m.map_embed_url,
            phone: m.phone,
            website: m.website,
            email: m.email,
            reason_choices: m.reason_choices.unwrap_or_else(|| Value::Array(Vec::new())),
            found_us_choices: m.found_us_choices.unwrap_or_else(|| Value::Array(Vec::new())),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AuthImage {
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AboutSectionOne {
    pub id: i32,
    pub heading: Option<String>,
    pub content: Option<String>,
    pub image: Option<String>,
    pub image_url: Option<String>,
    pub alt_text: Option<String>,
    pub is_active: bool,
    pub order: i32,
    pub created_at: Timestamp,
}

impl AboutSectionOne {
    pub fn new(m: about_section_one::Model, media: &MediaUrls) -> Self {
        Self {
            id: m.id,
            heading: m.heading,
            content: m.content,
            image_url: media.url(m.image.as_deref()),
            image: m.image,
            alt_text: m.alt_text,
            is_active: m.is_active,
            order: m.order,
            created_at: m.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AboutSection1 {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub image: String,
    pub image_url: Option<String>,
}

impl AboutSection1 {
    pub fn new(m: about_section1::Model, media: &MediaUrls) -> Self {
        Self { id: m.id, title: m.title, content: m.content, image_url: media.url_of(&m.image), image: m.image }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AboutSection2 {
    pub id: i32,
    pub background_image: String,
    pub background_image_url: Option<String>,
    pub overlay_title: String,
    pub overlay_text: String,
}

impl AboutSection2 {
    pub fn new(m: about_section2::Model, media: &MediaUrls) -> Self {
        Self {
            id: m.id,
            background_image_url: media.url_of(&m.background_image),
            background_image: m.background_image,
            overlay_title: m.overlay_title,
            overlay_text: m.overlay_text,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AboutSection3Image {
    pub id: i32,
    pub image: String,
    pub image_url: Option<String>,
    pub order: i32,
}

impl AboutSection3Image {
    pub fn new(m: about_section3_image::Model, media: &MediaUrls) -> Self {
        Self { id: m.id, image_url: media.url_of(&m.image), image: m.image, order: m.order }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AboutSection3 {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub images: Vec<AboutSection3Image>,
}

impl AboutSection3 {
    pub fn new(m: about_section3::Model, images: Vec<AboutSection3Image>) -> Self {
        Self { id: m.id, title: m.title, content: m.content, images }
    }
}

/// Missing sections serialize as `{}`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AboutPage {
    #[serde(serialize_with = "object_or_empty")]
    pub section1: Option<AboutSection1>,
    #[serde(serialize_with = "object_or_empty")]
    pub section2: Option<AboutSection2>,
    #[serde(serialize_with = "object_or_empty")]
    pub section3: Option<AboutSection3>,
}

fn object_or_empty<T: Serialize, S: Serializer>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error> {
    match value {
        Some(v) => v.serialize(serializer),
        None => serializer.serialize_map(Some(0))?.end(),
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LastSectionImage {
    pub id: i32,
    pub title: Option<String>,
    pub image: String,
    pub image_url: Option<String>,
    pub alt_text: Option<String>,
    pub order_no: i32,
}

impl LastSectionImage {
    pub fn new(m: last_section_image::Model, media: &MediaUrls) -> Self {
        Self {
            id: m.id,
            title: m.title,
            image_url: media.url_of(&m.image),
            image: m.image,
            alt_text: m.alt_text,
            order_no: m.order_no,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LastSection {
    pub id: i32,
    pub heading: Option<String>,
    pub subtitle: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub images: Vec<LastSectionImage>,
}

impl LastSection {
    pub fn new(m: last_section::Model, images: Vec<LastSectionImage>) -> Self {
        Self {
            id: m.id,
            heading: m.heading,
            subtitle: m.subtitle,
            created_at: m.created_at,
            updated_at: m.updated_at,
            images,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HowItWorks {
    pub id: i32,
    pub title: String,
    pub image: String,
    pub image_url: Option<String>,
}

impl HowItWorks {
    pub fn new(m: how_it_works::Model, media: &MediaUrls) -> Self {
        Self { id: m.id, title: m.title, image_url: media.url_of(&m.image), image: m.image }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SellBikePage {
    pub id: i32,
    pub top_banner_image: String,
    pub top_banner_image_url: Option<String>,
    pub top_banner_text: String,
    pub second_banner_image: String,
    pub second_banner_image_url: Option<String>,
    pub second_banner_top_text: Option<String>,
    pub second_banner_bottom_text: Option<String>,
    pub brand_options: Option<String>,
    pub model_options: Option<String>,
    pub variant_options: Option<String>,
    pub year_options: Option<String>,
    pub kms_options: Option<String>,
    pub owner_options: Option<String>,
    pub third_title: Option<String>,
    pub how_it_works: Vec<HowItWorks>,
}

impl SellBikePage {
    pub fn new(m: sell_bike_page::Model, how_it_works: Vec<HowItWorks>, media: &MediaUrls) -> Self {
        Self {
            id: m.id,
            top_banner_image_url: media.url_of(&m.top_banner_image),
            top_banner_image: m.top_banner_image,
            top_banner_text: m.top_banner_text,
            second_banner_image_url: media.url_of(&m.second_banner_image),
            second_banner_image: m.second_banner_image,
            second_banner_top_text: m.second_banner_top_text,
            second_banner_bottom_text: m.second_banner_bottom_text,
            brand_options: m.brand_options,
            model_options: m.model_options,
            variant_options: m.variant_options,
            year_options: m.year_options,
            kms_options: m.kms_options,
            owner_options: m.owner_options,
            third_title: m.third_title,
            how_it_works,
        }
    }
}
