//! Query-string parsing for the bike listing.
//!
//! Everything arrives as text; numeric bounds accept decimals and are
//! rounded inward (minimums up, maximums down) before being compared with
//! the integer columns.

use std::str::FromStr;

use models::{buybike, location};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use sea_orm::sea_query::{Expr, Func, IntoColumnRef, SimpleExpr};
use sea_orm::{ColumnTrait, Condition, Order};
use serde::Deserialize;

use crate::errors::FieldErrors;
use crate::pagination::Pagination;

const NOT_A_NUMBER: &str = "Enter a number.";

/// Raw listing query as received.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawBikeQuery {
    pub brand: Option<String>,
    pub category: Option<String>,
    pub fuel_type: Option<String>,
    pub color: Option<String>,
    pub price_min: Option<String>,
    pub price_max: Option<String>,
    pub year_min: Option<String>,
    pub year_max: Option<String>,
    pub km_max: Option<String>,
    pub engine_cc_min: Option<String>,
    pub engine_cc_max: Option<String>,
    pub search: Option<String>,
    pub ordering: Option<String>,
    pub page: Option<String>,
    pub page_size: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderField {
    CreatedAt,
    Price,
    Kilometers,
    Year,
}

impl OrderField {
    fn parse(name: &str) -> Option<Self> {
        match name {
            "created_at" => Some(Self::CreatedAt),
            "price" => Some(Self::Price),
            "kilometers" => Some(Self::Kilometers),
            "year" => Some(Self::Year),
            _ => None,
        }
    }

    fn column(self) -> buybike::Column {
        match self {
            Self::CreatedAt => buybike::Column::CreatedAt,
            Self::Price => buybike::Column::Price,
            Self::Kilometers => buybike::Column::Kilometers,
            Self::Year => buybike::Column::Year,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BikeFilters {
    pub price_min: Option<i64>,
    pub price_max: Option<i64>,
    pub year_min: Option<i64>,
    pub year_max: Option<i64>,
    pub km_max: Option<i64>,
    pub engine_cc_min: Option<i64>,
    pub engine_cc_max: Option<i64>,
    pub brand: Option<String>,
    pub category: Option<String>,
    pub fuel_type: Option<String>,
    pub color: Option<String>,
    pub search: Option<String>,
    pub ordering: Vec<(OrderField, Order)>,
}

#[derive(Clone, Copy)]
enum Bound {
    Lower,
    Upper,
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty()).map(str::to_string)
}

fn parse_bound(field: &'static str, raw: &Option<String>, bound: Bound, errors: &mut FieldErrors) -> Option<i64> {
    let text = non_blank(raw)?;
    let value = match Decimal::from_str(&text) {
        Ok(v) => v,
        Err(_) => {
            errors.add(field, NOT_A_NUMBER);
            return None;
        }
    };
    let rounded = match bound {
        Bound::Lower => value.ceil(),
        Bound::Upper => value.floor(),
    };
    match rounded.to_i64() {
        Some(v) => Some(v),
        None => {
            errors.add(field, NOT_A_NUMBER);
            None
        }
    }
}

/// Comma separated, `-` prefix for descending, unknown names dropped.
pub fn parse_ordering(raw: &str) -> Vec<(OrderField, Order)> {
    raw.split(',')
        .map(str::trim)
        .filter_map(|term| {
            let (name, order) = match term.strip_prefix('-') {
                Some(name) => (name, Order::Desc),
                None => (term, Order::Asc),
            };
            OrderField::parse(name).map(|f| (f, order))
        })
        .collect()
}

/// Escapes `\`, `%` and `_` for use inside a LIKE pattern.
pub fn escape_like(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '\\' | '%' | '_') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

fn icontains<C: IntoColumnRef>(column: C, needle: &str) -> SimpleExpr {
    let pattern = format!("%{}%", escape_like(&needle.to_lowercase()));
    Expr::expr(Func::lower(Expr::col(column))).like(pattern)
}

impl BikeFilters {
    pub fn parse(raw: &RawBikeQuery) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::new();
        let filters = Self {
            price_min: parse_bound("price_min", &raw.price_min, Bound::Lower, &mut errors),
            price_max: parse_bound("price_max", &raw.price_max, Bound::Upper, &mut errors),
            year_min: parse_bound("year_min", &raw.year_min, Bound::Lower, &mut errors),
            year_max: parse_bound("year_max", &raw.year_max, Bound::Upper, &mut errors),
            km_max: parse_bound("km_max", &raw.km_max, Bound::Upper, &mut errors),
            engine_cc_min: parse_bound("engine_cc_min", &raw.engine_cc_min, Bound::Lower, &mut errors),
            engine_cc_max: parse_bound("engine_cc_max", &raw.engine_cc_max, Bound::Upper, &mut errors),
            brand: non_blank(&raw.brand),
            category: non_blank(&raw.category),
            fuel_type: non_blank(&raw.fuel_type),
            color: non_blank(&raw.color),
            search: non_blank(&raw.search),
            ordering: raw.ordering.as_deref().map(parse_ordering).unwrap_or_default(),
        };
        errors.into_result().map(|_| filters)
    }

    /// Whether the query needs the location join.
    pub fn needs_location(&self) -> bool {
        self.search.is_some()
    }

    pub fn condition(&self) -> Condition {
        let mut cond = Condition::all();
        let ranges = [
            (buybike::Column::Price, self.price_min, self.price_max),
            (buybike::Column::Year, self.year_min, self.year_max),
            (buybike::Column::Kilometers, None, self.km_max),
            (buybike::Column::EngineCc, self.engine_cc_min, self.engine_cc_max),
        ];
        for (col, min, max) in ranges {
            if let Some(v) = min {
                cond = cond.add(col.gte(v));
            }
            if let Some(v) = max {
                cond = cond.add(col.lte(v));
            }
        }

        let texts = [
            (buybike::Column::Brand, &self.brand),
            (buybike::Column::Category, &self.category),
            (buybike::Column::FuelType, &self.fuel_type),
            (buybike::Column::Color, &self.color),
        ];
        for (col, value) in texts {
            if let Some(v) = value {
                cond = cond.add(icontains((buybike::Entity, col), v));
            }
        }

        if let Some(term) = &self.search {
            cond = cond.add(
                Condition::any()
                    .add(icontains((buybike::Entity, buybike::Column::Title), term))
                    .add(icontains((buybike::Entity, buybike::Column::Description), term))
                    .add(icontains((buybike::Entity, buybike::Column::Brand), term))
                    .add(icontains((location::Entity, location::Column::Name), term)),
            );
        }
        cond
    }

    /// Requested ordering, or newest first. `id` descending always breaks ties.
    pub fn order_by(&self) -> Vec<(buybike::Column, Order)> {
        let mut out: Vec<(buybike::Column, Order)> = if self.ordering.is_empty() {
            vec![(buybike::Column::CreatedAt, Order::Desc)]
        } else {
            self.ordering.iter().map(|(f, o)| (f.column(), o.clone())).collect()
        };
        out.push((buybike::Column::Id, Order::Desc));
        out
    }
}

/// `None` when `page` is not a positive integer.
pub fn parse_pagination(raw: &RawBikeQuery) -> Option<Pagination> {
    let page = match non_blank(&raw.page) {
        None => None,
        Some(p) => Some(p.parse::<u64>().ok().filter(|p| *p > 0)?),
    };
    let page_size = non_blank(&raw.page_size).and_then(|s| s.parse::<u64>().ok()).filter(|s| *s > 0);
    Some(Pagination::from_query(page, page_size))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DbBackend, EntityTrait, JoinType, QueryFilter, QuerySelect, QueryTrait, RelationTrait};

    fn raw() -> RawBikeQuery {
        RawBikeQuery::default()
    }

    #[test]
    fn numeric_bounds_round_inward() {
        let q = RawBikeQuery { price_min: Some("999.2".into()), price_max: Some("50000.9".into()), ..raw() };
        let f = BikeFilters::parse(&q).unwrap();
        assert_eq!(f.price_min, Some(1000));
        assert_eq!(f.price_max, Some(50000));
    }

    #[test]
    fn blank_values_are_ignored() {
        let q = RawBikeQuery { brand: Some("  ".into()), km_max: Some(String::new()), ..raw() };
        assert_eq!(BikeFilters::parse(&q).unwrap(), BikeFilters::default());
    }

    #[test]
    fn bad_numbers_are_field_errors() {
        let q = RawBikeQuery { year_min: Some("soon".into()), engine_cc_max: Some("1e".into()), ..raw() };
        let errs = BikeFilters::parse(&q).unwrap_err();
        assert_eq!(errs.get("year_min"), Some(&["Enter a number.".to_string()][..]));
        assert!(errs.get("engine_cc_max").is_some());
    }

    #[test]
    fn ordering_allow_list() {
        let parsed = parse_ordering("-price, year,color,-id");
        assert_eq!(parsed, vec![(OrderField::Price, Order::Desc), (OrderField::Year, Order::Asc)]);
        assert!(parse_ordering("bogus").is_empty());
    }

    #[test]
    fn default_order_is_newest_then_id() {
        let f = BikeFilters::default();
        let cols: Vec<String> = f.order_by().into_iter().map(|(c, _)| format!("{c:?}")).collect();
        assert_eq!(cols, ["CreatedAt", "Id"]);
    }

    #[test]
    fn like_wildcards_are_escaped() {
        assert_eq!(escape_like(r"50%_off\"), r"50\%\_off\\");
    }

    #[test]
    fn text_filters_are_case_insensitive_contains() {
        let f = BikeFilters::parse(&RawBikeQuery { brand: Some("Royal".into()), ..raw() }).unwrap();
        let sql = buybike::Entity::find().filter(f.condition()).build(DbBackend::Postgres).to_string();
        assert!(sql.contains(r#"LOWER("buybike"."brand") LIKE '%royal%'"#), "{sql}");
    }

    #[test]
    fn search_spans_location_name() {
        let f = BikeFilters::parse(&RawBikeQuery { search: Some("pune".into()), ..raw() }).unwrap();
        assert!(f.needs_location());
        let sql = buybike::Entity::find()
            .join(JoinType::LeftJoin, buybike::Relation::Location.def())
            .filter(f.condition())
            .build(DbBackend::Postgres)
            .to_string();
        assert!(sql.contains(r#"LEFT JOIN "location""#), "{sql}");
        assert!(sql.contains(r#"LOWER("location"."name") LIKE '%pune%'"#), "{sql}");
        assert!(sql.contains(" OR "), "{sql}");
    }

    #[test]
    fn range_filters_render_inclusive() {
        let q = RawBikeQuery { year_min: Some("2019".into()), km_max: Some("20000".into()), ..raw() };
        let f = BikeFilters::parse(&q).unwrap();
        let sql = buybike::Entity::find().filter(f.condition()).build(DbBackend::Postgres).to_string();
        assert!(sql.contains(r#""buybike"."year" >= 2019"#), "{sql}");
        assert!(sql.contains(r#""buybike"."kilometers" <= 20000"#), "{sql}");
    }

    #[test]
    fn pagination_parsing() {
        let p = parse_pagination(&RawBikeQuery { page: Some("2".into()), page_size: Some("5".into()), ..raw() }).unwrap();
        assert_eq!((p.page, p.page_size), (2, 5));
        assert!(parse_pagination(&RawBikeQuery { page: Some("zero".into()), ..raw() }).is_none());
        assert!(parse_pagination(&RawBikeQuery { page: Some("0".into()), ..raw() }).is_none());
        let p = parse_pagination(&RawBikeQuery { page_size: Some("abc".into()), ..raw() }).unwrap();
        assert_eq!(p.page_size, 20);
    }
}
