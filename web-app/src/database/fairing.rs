use log::{error, info};
use rocket::{
    fairing::{self, Fairing, Info, Kind},
    Build, Rocket,
};
use sqlx::postgres::PgPoolOptions;

use crate::config::Config;

use super::{CarStore, PgCarStore};

/// Connects to PostgreSQL, applies pending migrations and manages the
/// resulting [`PgCarStore`] as a `Box<dyn CarStore>`.
pub struct DatabaseFairing {}

impl DatabaseFairing {
    pub fn fairing() -> Self {
        Self {}
    }
}

#[rocket::async_trait]
impl Fairing for DatabaseFairing {
    fn info(&self) -> Info {
        Info {
            name: "Database",
            kind: Kind::Ignite | Kind::Singleton,
        }
    }

    async fn on_ignite(&self, rocket: Rocket<Build>) -> fairing::Result {
        let config = match rocket.figment().extract::<Config>() {
            Ok(config) => config,
            Err(e) => {
                error!("Failed to read the configuration: {e}");
                return Err(rocket);
            }
        };

        let pool = match PgPoolOptions::new().connect(&config.database_url).await {
            Ok(pool) => pool,
            Err(e) => {
                error!("Failed to connect to database: {e}");
                return Err(rocket);
            }
        };

        if let Err(e) = sqlx::migrate!().run(&pool).await {
            error!("Failed to apply pending migrations: {e}");
            return Err(rocket);
        }
        info!("Database migrations succesfully applied!");

        let store: Box<dyn CarStore> = Box::new(PgCarStore::new(pool));
        Ok(rocket.manage(store))
    }
}
