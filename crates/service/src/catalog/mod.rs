//! Bike listing and detail.

pub mod filters;

use std::collections::HashMap;
use std::sync::Arc;

use models::{buybike, location};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, JoinType, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
    RelationTrait,
};
use serde::Serialize;
use tracing::{debug, instrument};

use crate::errors::ServiceError;
use crate::media::MediaUrls;
use crate::pagination::{page_exists, Page};

pub use filters::{BikeFilters, RawBikeQuery};

#[derive(Debug, Clone, Serialize)]
pub struct LocationSummary {
    pub id: i32,
    pub name: String,
    pub image: Option<String>,
    pub image_url: Option<String>,
}

impl LocationSummary {
    fn new(m: location::Model, media: &MediaUrls) -> Self {
        Self { id: m.id, name: m.name, image_url: media.url(m.image.as_deref()), image: m.image }
    }
}

/// Every stored column plus the nested location and absolute image URLs.
#[derive(Debug, Clone, Serialize)]
pub struct BuyBike {
    #[serde(flatten)]
    pub bike: buybike::Model,
    pub location_obj: Option<LocationSummary>,
    pub featured_image_url: Option<String>,
    pub card_bg_image_url: Option<String>,
    pub variant_image1_url: Option<String>,
    pub variant_image2_url: Option<String>,
    pub variant_image3_url: Option<String>,
    pub variant_image4_url: Option<String>,
    pub variant_image5_url: Option<String>,
}

impl BuyBike {
    pub fn new(bike: buybike::Model, location: Option<LocationSummary>, media: &MediaUrls) -> Self {
        Self {
            featured_image_url: media.url(bike.featured_image.as_deref()),
            card_bg_image_url: media.url(bike.card_bg_image.as_deref()),
            variant_image1_url: media.url(bike.variant_image1.as_deref()),
            variant_image2_url: media.url(bike.variant_image2.as_deref()),
            variant_image3_url: media.url(bike.variant_image3.as_deref()),
            variant_image4_url: media.url(bike.variant_image4.as_deref()),
            variant_image5_url: media.url(bike.variant_image5.as_deref()),
            location_obj: location,
            bike,
        }
    }
}

fn invalid_page() -> ServiceError {
    ServiceError::NotFound("Invalid page.".into())
}

#[derive(Clone)]
pub struct CatalogService {
    db: Arc<DatabaseConnection>,
    media: MediaUrls,
}

impl CatalogService {
    pub fn new(db: impl Into<Arc<DatabaseConnection>>, media: MediaUrls) -> Self {
        Self { db: db.into(), media }
    }

    #[instrument(skip(self, raw))]
    pub async fn list_bikes(&self, raw: &RawBikeQuery) -> Result<Page<BuyBike>, ServiceError> {
        let filters = BikeFilters::parse(raw)?;
        let (page, page_size) = filters::parse_pagination(raw).ok_or_else(invalid_page)?.normalize();

        let mut query = buybike::Entity::find();
        if filters.needs_location() {
            query = query.join(JoinType::LeftJoin, buybike::Relation::Location.def());
        }
        query = query.filter(filters.condition());
        for (col, order) in filters.order_by() {
            query = query.order_by(col, order);
        }

        let paginator = query.paginate(self.db.as_ref(), page_size);
        let count = paginator.num_items().await?;
        if !page_exists(count, page, page_size) {
            return Err(invalid_page());
        }
        let bikes = paginator.fetch_page(page - 1).await?;
        debug!(count, page, returned = bikes.len(), "bike listing");

        let locations = self.locations_for(&bikes).await?;
        let results = bikes
            .into_iter()
            .map(|b| {
                let loc = b.location_id.and_then(|id| locations.get(&id).cloned());
                BuyBike::new(b, loc, &self.media)
            })
            .collect();
        Ok(Page { count, page, page_size, results })
    }

    #[instrument(skip(self))]
    pub async fn get_bike(&self, id: i32) -> Result<BuyBike, ServiceError> {
        let bike = buybike::Entity::find_by_id(id).one(self.db.as_ref()).await?.ok_or_else(ServiceError::not_found)?;
        let loc = match bike.location_id {
            Some(loc_id) => location::Entity::find_by_id(loc_id).one(self.db.as_ref()).await?,
            None => None,
        };
        let loc = loc.map(|l| LocationSummary::new(l, &self.media));
        Ok(BuyBike::new(bike, loc, &self.media))
    }

    async fn locations_for(&self, bikes: &[buybike::Model]) -> Result<HashMap<i32, LocationSummary>, ServiceError> {
        let mut ids: Vec<i32> = bikes.iter().filter_map(|b| b.location_id).collect();
        ids.sort_unstable();
        ids.dedup();
        if ids.is_empty() {
            return Ok(HashMap::new());
        }
        let rows = location::Entity::find().filter(location::Column::Id.is_in(ids)).all(self.db.as_ref()).await?;
        Ok(rows.into_iter().map(|l| (l.id, LocationSummary::new(l, &self.media))).collect())
    }
}
