//! Read side of the admin-authored page content.
//!
//! Every lookup goes through [`models::published`], so "the active record"
//! always means the first row of the publishing order and list endpoints
//! return that same order in full.

pub mod dto;

use std::collections::HashMap;
use std::sync::Arc;

use models::content::{
    about_section1, about_section2, about_section3, about_section3_image, about_section_one, auth_image, auth_page_config,
    contact_config, faq, hero_bike_image, hero_section, homepage_banner, how_it_works, info_section, last_section,
    last_section_image, sell_bike_page, stat_item, support_feature, testimonial, testimonials_section, trusted_section,
};
use models::{published, Publishable};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use tracing::{instrument, warn};

use crate::errors::ServiceError;
use crate::media::MediaUrls;

use self::dto::*;

#[derive(Clone)]
pub struct ContentService {
    db: Arc<DatabaseConnection>,
    media: MediaUrls,
}

impl ContentService {
    pub fn new(db: impl Into<Arc<DatabaseConnection>>, media: MediaUrls) -> Self {
        Self { db: db.into(), media }
    }

    /// First row of the publishing order, `NotFound(missing)` when there is none.
    pub async fn get_active<E: Publishable>(&self, missing: &str) -> Result<E::Model, ServiceError> {
        published::<E>()
            .one(self.db.as_ref())
            .await?
            .ok_or_else(|| ServiceError::NotFound(missing.to_string()))
    }

    /// Like [`Self::get_active`] but absence is not an error.
    pub async fn first_published<E: Publishable>(&self) -> Result<Option<E::Model>, ServiceError> {
        Ok(published::<E>().one(self.db.as_ref()).await?)
    }

    pub async fn list_published<E: Publishable>(&self) -> Result<Vec<E::Model>, ServiceError> {
        Ok(published::<E>().all(self.db.as_ref()).await?)
    }

    #[instrument(skip(self))]
    pub async fn hero_sections(&self) -> Result<Vec<HeroSection>, ServiceError> {
        let sections = self.list_published::<hero_section::Entity>().await?;
        if sections.is_empty() {
            return Ok(Vec::new());
        }
        let ids: Vec<i32> = sections.iter().map(|s| s.id).collect();
        let images = hero_bike_image::Entity::find()
            .filter(hero_bike_image::Column::HeroSectionId.is_in(ids))
            .order_by_asc(hero_bike_image::Column::Order)
            .order_by_asc(hero_bike_image::Column::Id)
            .all(self.db.as_ref())
            .await?;
        let mut by_section: HashMap<i32, Vec<HeroBikeImage>> = HashMap::new();
        for img in images {
            by_section.entry(img.hero_section_id).or_default().push(HeroBikeImage::new(img, &self.media));
        }
        Ok(sections
            .into_iter()
            .map(|s| {
                let imgs = by_section.remove(&s.id).unwrap_or_default();
                HeroSection::new(s, imgs, &self.media)
            })
            .collect())
    }

    pub async fn info_sections(&self) -> Result<Vec<InfoSection>, ServiceError> {
        let rows = self.list_published::<info_section::Entity>().await?;
        Ok(rows.into_iter().map(|m| InfoSection::new(m, &self.media)).collect())
    }

    pub async fn support_features(&self) -> Result<Vec<SupportFeature>, ServiceError> {
        let rows = self.list_published::<support_feature::Entity>().await?;
        Ok(rows.into_iter().map(|m| SupportFeature::new(m, &self.media)).collect())
    }

    #[instrument(skip(self))]
    pub async fn homepage_banner(&self) -> Result<HomepageBanner, ServiceError> {
        let banner = self.get_active::<homepage_banner::Entity>("No banner configured.").await?;
        let stats = stat_item::Entity::find()
            .filter(stat_item::Column::BannerId.eq(banner.id))
            .filter(stat_item::Column::IsVisible.eq(true))
            .order_by_asc(stat_item::Column::Order)
            .order_by_asc(stat_item::Column::Id)
            .all(self.db.as_ref())
            .await?;
        let stats = stats.into_iter().map(|s| StatItem::new(s, &self.media)).collect();
        Ok(HomepageBanner::new(banner, stats, &self.media))
    }

    pub async fn testimonials(&self) -> Result<Testimonials, ServiceError> {
        let section = self.first_published::<testimonials_section::Entity>().await?;
        let rows = self.list_published::<testimonial::Entity>().await?;
        Ok(Testimonials {
            section: section.map(Into::into),
            testimonials: rows.into_iter().map(|t| Testimonial::new(t, &self.media)).collect(),
        })
    }

    pub async fn trusted_section(&self) -> Result<TrustedSection, ServiceError> {
        let m = self.get_active::<trusted_section::Entity>("Not configured").await?;
        Ok(TrustedSection::new(m, &self.media))
    }

    pub async fn faqs(&self) -> Result<Vec<Faq>, ServiceError> {
        let rows = self.list_published::<faq::Entity>().await?;
        Ok(rows.into_iter().map(Faq::from).collect())
    }

    pub async fn contact_config(&self) -> Result<ContactConfig, ServiceError> {
        let m = self.get_active::<contact_config::Entity>("Not configured.").await?;
        Ok(m.into())
    }

    /// Never fails: lookup errors are logged and reported as no image.
    pub async fn auth_image(&self) -> AuthImage {
        let found = published::<auth_image::Entity>()
            .filter(auth_image::Column::Image.ne(""))
            .one(self.db.as_ref())
            .await;
        match found {
            Ok(row) => AuthImage { image_url: row.and_then(|m| self.media.url_of(&m.image)) },
            Err(e) => {
                warn!(error = %e, "auth image lookup failed");
                AuthImage::default()
            }
        }
    }

    pub async fn auth_page_config(&self) -> Result<Option<auth_page_config::Model>, ServiceError> {
        self.first_published::<auth_page_config::Entity>().await
    }

    pub async fn about_section_one(&self) -> Result<AboutSectionOne, ServiceError> {
        let m = self.get_active::<about_section_one::Entity>("Not configured").await?;
        Ok(AboutSectionOne::new(m, &self.media))
    }

    #[instrument(skip(self))]
    pub async fn about_page(&self) -> Result<AboutPage, ServiceError> {
        let section1 = self.first_published::<about_section1::Entity>().await?;
        let section2 = self.first_published::<about_section2::Entity>().await?;
        let section3 = match self.first_published::<about_section3::Entity>().await? {
            Some(s) => {
                let images = about_section3_image::Entity::find()
                    .filter(about_section3_image::Column::SectionId.eq(s.id))
                    .order_by_asc(about_section3_image::Column::Order)
                    .order_by_asc(about_section3_image::Column::Id)
                    .all(self.db.as_ref())
                    .await?;
                let images = images.into_iter().map(|i| AboutSection3Image::new(i, &self.media)).collect();
                Some(AboutSection3::new(s, images))
            }
            None => None,
        };
        Ok(AboutPage {
            section1: section1.map(|s| AboutSection1::new(s, &self.media)),
            section2: section2.map(|s| AboutSection2::new(s, &self.media)),
            section3,
        })
    }

    pub async fn last_section(&self) -> Result<LastSection, ServiceError> {
        let section = self.get_active::<last_section::Entity>("No sections found.").await?;
        let images = last_section_image::Entity::find()
            .filter(last_section_image::Column::SectionId.eq(section.id))
            .order_by_asc(last_section_image::Column::OrderNo)
            .order_by_asc(last_section_image::Column::Id)
            .all(self.db.as_ref())
            .await?;
        let images = images.into_iter().map(|i| LastSectionImage::new(i, &self.media)).collect();
        Ok(LastSection::new(section, images))
    }

    pub async fn sell_bike_page(&self) -> Result<SellBikePage, ServiceError> {
        let page = self.get_active::<sell_bike_page::Entity>("Not found.").await?;
        let steps = how_it_works::Entity::find()
            .filter(how_it_works::Column::PageId.eq(page.id))
            .order_by_asc(how_it_works::Column::Id)
            .all(self.db.as_ref())
            .await?;
        let steps = steps.into_iter().map(|s| HowItWorks::new(s, &self.media)).collect();
        Ok(SellBikePage::new(page, steps, &self.media))
    }
}
