use mongodb::{Client, Database, bson::doc};

use crate::config::SessionStoreConfig;

/// Document store holding session data. Connected at start-up, not used by registration.
#[derive(Clone)]
pub struct SessionStore {
    database: Database,
}

impl SessionStore {
    pub async fn connect(config: &SessionStoreConfig) -> Result<Self, mongodb::error::Error> {
        let client = Client::with_uri_str(&config.url).await?;
        let database = client.database(&config.database);

        // the driver connects lazily; ping so a bad URL fails here
        database.run_command(doc! { "ping": 1 }, None).await?;

        Ok(Self { database })
    }

    pub fn database_name(&self) -> &str {
        self.database.name()
    }
}
