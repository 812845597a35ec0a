use shared::data::{Car, NewCar};
use sqlx::{Pool, Postgres};

use crate::error::Error;

use self::convert::CarRow;

pub mod convert;
pub mod fairing;

/// Persistence for car records.
///
/// The web layer only ever talks to a `Box<dyn CarStore>` held in Rocket's
/// managed state, so any implementation can be swapped in when building the
/// app.
#[rocket::async_trait]
pub trait CarStore: Send + Sync {
    /// Stores a new car and returns it with its assigned id.
    async fn insert(&self, car: NewCar) -> Result<Car, Error>;

    async fn list(&self) -> Result<Vec<Car>, Error>;

    async fn get(&self, id: i32) -> Result<Option<Car>, Error>;

    /// Overwrites the stored car with the same id.
    ///
    /// Returns [`Error::CarNotFound`] if the row no longer exists.
    async fn update(&self, car: &Car) -> Result<Car, Error>;

    /// Returns `false` if there was nothing to delete.
    async fn delete(&self, id: i32) -> Result<bool, Error>;
}

pub struct PgCarStore {
    pool: Pool<Postgres>,
}

impl PgCarStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[rocket::async_trait]
impl CarStore for PgCarStore {
    async fn insert(&self, car: NewCar) -> Result<Car, Error> {
        let row: CarRow = sqlx::query_as(
            "INSERT INTO cars (brand, model, year) VALUES ($1, $2, $3) \
             RETURNING id, brand, model, year",
        )
        .bind(car.brand)
        .bind(car.model)
        .bind(car.year)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn list(&self) -> Result<Vec<Car>, Error> {
        let rows: Vec<CarRow> =
            sqlx::query_as("SELECT id, brand, model, year FROM cars ORDER BY id")
                .fetch_all(&self.pool)
                .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn get(&self, id: i32) -> Result<Option<Car>, Error> {
        let row: Option<CarRow> =
            sqlx::query_as("SELECT id, brand, model, year FROM cars WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(row.map(Into::into))
    }

    async fn update(&self, car: &Car) -> Result<Car, Error> {
        let row: Option<CarRow> = sqlx::query_as(
            "UPDATE cars SET brand = $1, model = $2, year = $3 WHERE id = $4 \
             RETURNING id, brand, model, year",
        )
        .bind(&car.brand)
        .bind(&car.model)
        .bind(car.year)
        .bind(car.id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Into::into).ok_or(Error::CarNotFound(car.id))
    }

    async fn delete(&self, id: i32) -> Result<bool, Error> {
        let result = sqlx::query("DELETE FROM cars WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
