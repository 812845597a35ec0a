use log::warn;
use rocket::{
    http::Status,
    request::{FromRequest, Outcome},
    serde::json::Json,
    Request, Route,
};
use shared::data::{Car, CarUpdate, NewCar};

use crate::{
    database::CarStore,
    error::{CarResult, Error},
    notification::Notifier,
};

/// The car registry operations, backed by whatever store and notifier the
/// running instance manages.
pub struct CarService<'r> {
    store: &'r dyn CarStore,
    notifier: &'r dyn Notifier,
}

impl<'r> CarService<'r> {
    pub fn new(store: &'r dyn CarStore, notifier: &'r dyn Notifier) -> Self {
        Self { store, notifier }
    }

    /// A failed notification is logged but does not undo or fail the create.
    pub async fn create(&self, new_car: NewCar) -> Result<Car, Error> {
        new_car.validate()?;
        let car = self.store.insert(new_car).await?;

        if let Err(e) = self.notifier.car_created(&car).await {
            warn!("Could not send the notification for car {}: {e}", car.id);
        }

        Ok(car)
    }

    pub async fn list(&self) -> Result<Vec<Car>, Error> {
        self.store.list().await
    }

    pub async fn read(&self, id: i32) -> Result<Car, Error> {
        self.store.get(id).await?.ok_or(Error::CarNotFound(id))
    }

    pub async fn update(&self, id: i32, update: CarUpdate) -> Result<Car, Error> {
        let car = self.read(id).await?.apply(update);
        car.validate()?;
        self.store.update(&car).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), Error> {
        self.read(id).await?;
        if self.store.delete(id).await? {
            Ok(())
        } else {
            Err(Error::CarNotFound(id))
        }
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for CarService<'r> {
    type Error = Error;

    async fn from_request(req: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let Some(store) = req.rocket().state::<Box<dyn CarStore>>() else {
            return Outcome::Error((Status::InternalServerError, Error::DatabaseNotFound));
        };
        let Some(notifier) = req.rocket().state::<Box<dyn Notifier>>() else {
            return Outcome::Error((Status::InternalServerError, Error::NotifierNotFound));
        };

        Outcome::Success(CarService::new(store.as_ref(), notifier.as_ref()))
    }
}

#[post("/cars", format = "json", data = "<car>")]
async fn create_car(car: Json<NewCar>, cars: CarService<'_>) -> Result<Json<Car>, Error> {
    cars.create(car.into_inner()).await.map(Json)
}

#[get("/cars")]
async fn list_cars(cars: CarService<'_>) -> Result<Json<Vec<Car>>, Error> {
    cars.list().await.map(Json)
}

#[get("/cars/<id>")]
async fn get_car(id: i32, cars: CarService<'_>) -> Result<Json<Car>, Error> {
    cars.read(id).await.map(Json)
}

#[put("/cars/<id>", format = "json", data = "<update>")]
async fn update_car(
    id: i32,
    update: Json<CarUpdate>,
    cars: CarService<'_>,
) -> Result<Json<Car>, Error> {
    cars.update(id, update.into_inner()).await.map(Json)
}

#[delete("/cars/<id>")]
async fn delete_car(id: i32, cars: CarService<'_>) -> Result<CarResult, Error> {
    cars.delete(id).await?;
    Ok(CarResult::NoContent)
}

pub fn routes() -> Vec<Route> {
    routes![create_car, list_cars, get_car, update_car, delete_car]
}
