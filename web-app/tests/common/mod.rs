#![allow(dead_code)]

use mockall::mock;
use rocket::{
    async_trait,
    http::{ContentType, Status},
    local::asynchronous::{Client, LocalResponse},
};
use serde_json::Value;
use shared::data::{Car, NewCar};
use web_app::{
    database::CarStore,
    error::Error,
    notification::{NotificationError, Notifier},
};

mock! {
    pub Store {}

    #[async_trait]
    impl CarStore for Store {
        async fn insert(&self, car: NewCar) -> Result<Car, Error>;
        async fn list(&self) -> Result<Vec<Car>, Error>;
        async fn get(&self, id: i32) -> Result<Option<Car>, Error>;
        async fn update(&self, car: &Car) -> Result<Car, Error>;
        async fn delete(&self, id: i32) -> Result<bool, Error>;
    }
}

mock! {
    pub Mailer {}

    #[async_trait]
    impl Notifier for Mailer {
        async fn car_created(&self, car: &Car) -> Result<(), NotificationError>;
    }
}

pub fn toyota() -> Car {
    Car {
        id: 1,
        brand: "Toyota".into(),
        model: "Corolla".into(),
        year: 2022,
    }
}

pub fn honda() -> Car {
    Car {
        id: 2,
        brand: "Honda".into(),
        model: "Civic".into(),
        year: 2020,
    }
}

/// A store whose `get` finds `car` under its own id and nothing else.
pub fn store_with(car: Car) -> MockStore {
    let mut store = MockStore::new();
    store
        .expect_get()
        .returning(move |id| Ok((id == car.id).then(|| car.clone())));
    store
}

/// A notifier that accepts any number of notifications.
pub fn quiet_mailer() -> MockMailer {
    let mut mailer = MockMailer::new();
    mailer.expect_car_created().returning(|_| Ok(()));
    mailer
}

pub struct TestResponse {
    pub status: Status,
    pub body: String,
}

impl TestResponse {
    async fn read(response: LocalResponse<'_>) -> Self {
        let status = response.status();
        let body = response.into_string().await.unwrap_or_default();
        Self { status, body }
    }

    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body)
            .unwrap_or_else(|e| panic!("body is not json ({e}): {}", self.body))
    }
}

/// An in-process instance of the app with mocked collaborators.
///
/// Mock expectations are checked when the harness is dropped, which tears
/// down the app and with it the mocks.
pub struct Harness {
    client: Client,
}

impl Harness {
    pub async fn new(store: MockStore, mailer: MockMailer) -> Self {
        let client = Client::tracked(web_app::app(store, mailer))
            .await
            .expect("valid rocket instance");
        Self { client }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        TestResponse::read(self.client.get(uri.to_string()).dispatch().await).await
    }

    pub async fn post_json(&self, uri: &str, body: &Value) -> TestResponse {
        TestResponse::read(self.client.post(uri.to_string()).json(body).dispatch().await).await
    }

    pub async fn post_raw(&self, uri: &str, body: &'static str) -> TestResponse {
        let request = self
            .client
            .post(uri.to_string())
            .header(ContentType::JSON)
            .body(body);
        TestResponse::read(request.dispatch().await).await
    }

    pub async fn post_plain(&self, uri: &str, body: &'static str) -> TestResponse {
        let request = self
            .client
            .post(uri.to_string())
            .header(ContentType::Plain)
            .body(body);
        TestResponse::read(request.dispatch().await).await
    }

    pub async fn put_json(&self, uri: &str, body: &Value) -> TestResponse {
        TestResponse::read(self.client.put(uri.to_string()).json(body).dispatch().await).await
    }

    pub async fn delete(&self, uri: &str) -> TestResponse {
        TestResponse::read(self.client.delete(uri.to_string()).dispatch().await).await
    }
}
