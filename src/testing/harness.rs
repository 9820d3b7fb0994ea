use std::net::{SocketAddr, TcpListener};
use std::sync::Arc;

use actix_web::dev::ServerHandle;
use anyhow::Context as _;
use awc::{Client, ClientRequest};
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel,
    TransactionTrait,
};
use uuid::Uuid;

use crate::config::{AppConfig, DatabaseConfig};
use crate::entities::v1::users::Role;
use crate::metrics::AppMetrics;
use crate::middlewares::v1::auth::{AllowAllPolicy, FixedIdentityProvider, Identity};
use crate::server::{self, Context};
use crate::{database, telemetry};

/// Where the instance keeps its data
#[derive(Clone, Debug, Default)]
pub enum StoreKind {
    /// Uniquely named in-memory SQLite database, gone when the harness drops
    #[default]
    Memory,
    /// Any database URL sea-orm can connect to, migrated on startup
    Url(String),
}

#[derive(Clone, Debug)]
pub struct HarnessConfig {
    pub store: StoreKind,
    /// Replace token lookup and ownership checks with a fixed identity that
    /// may do anything
    pub fake_auth: bool,
    /// Caller identity when `fake_auth` is on
    pub identity: Identity,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            store: StoreKind::Memory,
            fake_auth: true,
            identity: Identity::new(1, "Test Admin", Role::Admin),
        }
    }
}

#[derive(Debug, Default)]
pub struct TestAppBuilder {
    config: HarnessConfig,
}

impl TestAppBuilder {
    pub fn config(mut self, config: HarnessConfig) -> Self {
        self.config = config;
        self
    }

    pub fn store(mut self, store: StoreKind) -> Self {
        self.config.store = store;
        self
    }

    pub fn fake_auth(mut self, fake_auth: bool) -> Self {
        self.config.fake_auth = fake_auth;
        self
    }

    pub fn identity(mut self, identity: Identity) -> Self {
        self.config.identity = identity;
        self
    }

    /// Provision the store, apply migrations and start the server
    ///
    /// Must be called inside an actix system (`#[actix_web::test]`).
    pub async fn build(self) -> anyhow::Result<TestApp> {
        telemetry::init_for_tests();

        let (db, store_name) = match self.config.store {
            StoreKind::Memory => {
                let name = format!("restaurant_{}", Uuid::new_v4().simple());
                let db = database::memory(&name)
                    .await
                    .with_context(|| format!("Failed to open in-memory store {}", name))?;
                (db, name)
            }
            StoreKind::Url(url) => {
                let config = DatabaseConfig {
                    url: url.clone(),
                    ..DatabaseConfig::default()
                };
                let db = database::connect(&config)
                    .await
                    .with_context(|| format!("Failed to connect to {}", url))?;
                (db, url)
            }
        };

        database::migrate(&db)
            .await
            .context("Failed to migrate test store")?;

        let metrics = AppMetrics::new();
        let mut context = Context::new(db.clone(), metrics);
        if self.config.fake_auth {
            context = context
                .with_identity(Arc::new(FixedIdentityProvider::new(self.config.identity)))
                .with_policy(Arc::new(AllowAllPolicy));
        }

        let mut app_config = AppConfig::default();
        app_config.server.workers = 1;
        app_config.app.shutdown_timeout = 1;

        let listener =
            TcpListener::bind("127.0.0.1:0").context("Failed to bind an ephemeral port")?;
        let address = listener.local_addr()?;

        let server = server::serve(context, listener, &app_config, false)
            .context("Failed to start test server")?;
        let handle = server.handle();
        actix_web::rt::spawn(server);

        ::tracing::debug!(%address, store = %store_name, "Test app started");

        Ok(TestApp {
            address,
            client: Client::default(),
            db,
            store_name,
            handle,
        })
    }
}

/// A running application instance with its own store
///
/// The server stops when the value is dropped.
pub struct TestApp {
    address: SocketAddr,
    client: Client,
    db: DatabaseConnection,
    store_name: String,
    handle: ServerHandle,
}

impl TestApp {
    pub fn builder() -> TestAppBuilder {
        TestAppBuilder::default()
    }

    /// In-memory store, fake auth as admin user 1
    pub async fn spawn() -> anyhow::Result<Self> {
        Self::builder().build().await
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.address, path)
    }

    pub fn get(&self, path: &str) -> ClientRequest {
        self.client.get(self.url(path))
    }

    pub fn post(&self, path: &str) -> ClientRequest {
        self.client.post(self.url(path))
    }

    pub fn put(&self, path: &str) -> ClientRequest {
        self.client.put(self.url(path))
    }

    pub fn delete(&self, path: &str) -> ClientRequest {
        self.client.delete(self.url(path))
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    pub fn store_name(&self) -> &str {
        &self.store_name
    }

    /// Insert a row directly, bypassing the API
    ///
    /// The insert runs in its own transaction which is committed before this
    /// returns. On failure the transaction is rolled back.
    pub async fn seed<A>(&self, model: A) -> anyhow::Result<<A::Entity as EntityTrait>::Model>
    where
        A: ActiveModelTrait + ActiveModelBehavior + Send,
        <A::Entity as EntityTrait>::Model: IntoActiveModel<A>,
    {
        let txn = self.db.begin().await.context("Failed to begin seed")?;
        let model = model.insert(&txn).await.context("Failed to seed row")?;
        txn.commit().await.context("Failed to commit seed")?;

        Ok(model)
    }

    pub async fn shutdown(self) {
        self.handle.stop(true).await;
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        // The stop command is sent eagerly, the returned future only waits.
        drop(self.handle.stop(false));
    }
}
