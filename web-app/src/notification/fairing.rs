use log::{error, info};
use rocket::{
    fairing::{self, Fairing, Info, Kind},
    Build, Rocket,
};

use crate::config::Config;

use super::{EmailNotifier, LogNotifier, Notifier};

/// Manages a `Box<dyn Notifier>`: an [`EmailNotifier`] when notifications are
/// enabled, a [`LogNotifier`] otherwise.
pub struct NotificationFairing {}

impl NotificationFairing {
    pub fn fairing() -> Self {
        Self {}
    }
}

#[rocket::async_trait]
impl Fairing for NotificationFairing {
    fn info(&self) -> Info {
        Info {
            name: "Notifications",
            kind: Kind::Ignite | Kind::Singleton,
        }
    }

    async fn on_ignite(&self, rocket: Rocket<Build>) -> fairing::Result {
        let config = match rocket.figment().extract::<Config>() {
            Ok(config) => config.notifications,
            Err(e) => {
                error!("Failed to read the configuration: {e}");
                return Err(rocket);
            }
        };

        let notifier: Box<dyn Notifier> = if config.enabled {
            match EmailNotifier::new(&config) {
                Ok(notifier) => Box::new(notifier),
                Err(e) => {
                    error!("Failed to set up email notifications: {e}");
                    return Err(rocket);
                }
            }
        } else {
            info!("Email notifications are disabled.");
            Box::new(LogNotifier {})
        };

        Ok(rocket.manage(notifier))
    }
}
