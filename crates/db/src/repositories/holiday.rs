use crate::models::DbHoliday;
use chrono::{NaiveDate, Utc};
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_holiday(
    pool: &Pool<Postgres>,
    date: NaiveDate,
    title: Option<&str>,
) -> Result<DbHoliday> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let holiday = sqlx::query_as::<_, DbHoliday>(
        r#"
        INSERT INTO holidays (id, date, title, created_at)
        VALUES ($1, $2, $3, $4)
        ON CONFLICT (date)
        DO UPDATE SET title = COALESCE($3, holidays.title)
        RETURNING id, date, title, created_at
        "#,
    )
    .bind(id)
    .bind(date)
    .bind(title)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(holiday)
}

pub async fn list_holidays_in_range(
    pool: &Pool<Postgres>,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<DbHoliday>> {
    let holidays = sqlx::query_as::<_, DbHoliday>(
        r#"
        SELECT id, date, title, created_at
        FROM holidays
        WHERE date BETWEEN $1 AND $2
        ORDER BY date ASC
        "#,
    )
    .bind(start)
    .bind(end)
    .fetch_all(pool)
    .await?;

    Ok(holidays)
}

pub async fn get_holiday_dates_in_range(
    pool: &Pool<Postgres>,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<NaiveDate>> {
    let dates = sqlx::query_scalar::<_, NaiveDate>(
        r#"
        SELECT date
        FROM holidays
        WHERE date BETWEEN $1 AND $2
        "#,
    )
    .bind(start)
    .bind(end)
    .fetch_all(pool)
    .await?;

    Ok(dates)
}

/// Returns `false` when no holiday had the given id.
pub async fn delete_holiday(pool: &Pool<Postgres>, id: Uuid) -> Result<bool> {
    let result = sqlx::query(
        r#"
        DELETE FROM holidays
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
