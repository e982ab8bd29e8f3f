use chrono::{FixedOffset, TimeZone};
use sea_orm::{DatabaseBackend, DbBackend, MockDatabase, QueryTrait};

use crate::content::{about_section1, faq, homepage_banner, last_section, testimonial};
use crate::published;

fn sql_of<E: crate::Publishable>() -> String {
    published::<E>().build(DbBackend::Postgres).to_string()
}

#[test]
fn flagged_ordered_type_filters_and_sorts() {
    let sql = sql_of::<faq::Entity>();
    assert!(sql.contains(r#"WHERE "faq"."is_active" = "#), "{sql}");
    assert!(
        sql.ends_with(r#"ORDER BY "faq"."order" ASC, "faq"."created_at" DESC, "faq"."id" DESC"#),
        "{sql}"
    );
}

#[test]
fn flag_without_order_column() {
    let sql = sql_of::<homepage_banner::Entity>();
    assert!(sql.contains(r#""homepage_banner"."is_active" = "#), "{sql}");
    assert!(
        sql.ends_with(r#"ORDER BY "homepage_banner"."created_at" DESC, "homepage_banner"."id" DESC"#),
        "{sql}"
    );
}

#[test]
fn visibility_flag_is_used_for_testimonials() {
    let sql = sql_of::<testimonial::Entity>();
    assert!(sql.contains(r#""testimonial"."is_visible" = "#), "{sql}");
    assert!(sql.contains(r#""testimonial"."order" ASC"#), "{sql}");
}

#[test]
fn unflagged_types_publish_every_row() {
    for sql in [sql_of::<last_section::Entity>(), sql_of::<about_section1::Entity>()] {
        assert!(!sql.contains("WHERE"), "{sql}");
        assert!(sql.contains("\"created_at\" DESC"), "{sql}");
    }
}

#[tokio::test]
async fn first_published_row_is_returned() -> anyhow::Result<()> {
    let ts = FixedOffset::east_opt(0).unwrap().with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
    let row = faq::Model {
        id: 7,
        question: "Do you deliver?".into(),
        answer: "Within city limits.".into(),
        order: 0,
        is_active: true,
        created_at: ts,
    };
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![row.clone()], vec![]])
        .into_connection();

    let first = published::<faq::Entity>().one(&db).await?;
    assert_eq!(first, Some(row));

    let none = published::<faq::Entity>().one(&db).await?;
    assert!(none.is_none());
    Ok(())
}
