//! The publishing rule shared by every admin-authored content table.
//!
//! A content type exposes which column flags a row as live, which column
//! carries the manual sort position and which column holds the creation
//! time. [`published`] turns that description into one query: live rows
//! only, `order` ascending, newest first, highest id first. Single-record
//! endpoints take the first row, list endpoints take all of them.

use sea_orm::{ColumnTrait, EntityTrait, Iterable, PrimaryKeyToColumn, QueryFilter, QueryOrder, Select};

pub trait Publishable: EntityTrait {
    /// Boolean column that must be `true` for a row to be public. `None`
    /// when every row is public.
    fn active_column() -> Option<Self::Column> {
        None
    }

    /// Manual sort position, ascending. `None` when the type has none.
    fn order_column() -> Option<Self::Column> {
        None
    }

    fn created_column() -> Self::Column;
}

pub fn published<E: Publishable>() -> Select<E> {
    let mut query = E::find();
    if let Some(flag) = E::active_column() {
        query = query.filter(flag.eq(true));
    }
    if let Some(order) = E::order_column() {
        query = query.order_by_asc(order);
    }
    query = query.order_by_desc(E::created_column());
    for key in E::PrimaryKey::iter() {
        query = query.order_by_desc(key.into_column());
    }
    query
}
