use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The year the first production automobile was built.
pub const EARLIEST_YEAR: i32 = 1886;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Car {
    pub id: i32,
    pub brand: String,
    pub model: String,
    pub year: i32,
}

/// A car as submitted for creation. The id is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCar {
    pub brand: String,
    pub model: String,
    pub year: i32,
}

/// Fields to change on an existing car. Missing fields are left untouched,
/// so both full and partial records are accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarUpdate {
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("The field '{0}' must not be empty.")]
    EmptyField(&'static str),
    #[error("The year {year} is outside of {min}..={max}.")]
    YearOutOfRange { year: i32, min: i32, max: i32 },
}

impl Car {
    #[must_use]
    pub fn apply(mut self, update: CarUpdate) -> Self {
        if let Some(brand) = update.brand {
            self.brand = brand;
        }
        if let Some(model) = update.model {
            self.model = model;
        }
        if let Some(year) = update.year {
            self.year = year;
        }
        self
    }

    pub fn validate(&self) -> Result<(), Error> {
        validate_fields(&self.brand, &self.model, self.year)
    }
}

impl NewCar {
    pub fn validate(&self) -> Result<(), Error> {
        validate_fields(&self.brand, &self.model, self.year)
    }

    #[must_use]
    pub fn with_id(self, id: i32) -> Car {
        Car {
            id,
            brand: self.brand,
            model: self.model,
            year: self.year,
        }
    }
}

/// Upper bound for the model year. Manufacturers sell next year's models
/// ahead of time.
#[must_use]
pub fn latest_year() -> i32 {
    Utc::now().year() + 1
}

fn validate_fields(brand: &str, model: &str, year: i32) -> Result<(), Error> {
    if brand.trim().is_empty() {
        return Err(Error::EmptyField("brand"));
    }
    if model.trim().is_empty() {
        return Err(Error::EmptyField("model"));
    }
    let max = latest_year();
    if !(EARLIEST_YEAR..=max).contains(&year) {
        return Err(Error::YearOutOfRange {
            year,
            min: EARLIEST_YEAR,
            max,
        });
    }
    Ok(())
}
