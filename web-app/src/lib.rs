#![allow(clippy::no_effect_underscore_binding)]
use rocket::{Build, Rocket};

use database::{fairing::DatabaseFairing, CarStore};
use notification::{fairing::NotificationFairing, Notifier};

pub mod cars;
pub mod config;
pub mod database;
pub mod error;
pub mod notification;

#[macro_use]
extern crate rocket;

/// Builds the app around the given store and notifier.
pub fn app<S, N>(store: S, notifier: N) -> Rocket<Build>
where
    S: CarStore + 'static,
    N: Notifier + 'static,
{
    let store: Box<dyn CarStore> = Box::new(store);
    let notifier: Box<dyn Notifier> = Box::new(notifier);

    rocket::build()
        .manage(store)
        .manage(notifier)
        .mount("/", cars::routes())
}

/// Builds the app with the PostgreSQL store and the configured notifier.
pub fn server() -> Rocket<Build> {
    rocket::build()
        .attach(DatabaseFairing::fairing())
        .attach(NotificationFairing::fairing())
        .mount("/", cars::routes())
}
