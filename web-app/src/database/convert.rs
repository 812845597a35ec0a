use shared::data::Car;

#[derive(Debug, sqlx::FromRow)]
pub struct CarRow {
    pub id: i32,
    pub brand: String,
    pub model: String,
    pub year: i32,
}

impl From<CarRow> for Car {
    fn from(value: CarRow) -> Self {
        Self {
            id: value.id,
            brand: value.brand,
            model: value.model,
            year: value.year,
        }
    }
}
