//! In-process application instances for integration tests
//!
//! ```no_run
//! use restaurant_api::testing::{TestApp, factory};
//! use rust_decimal_macros::dec;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let app = TestApp::spawn().await?;
//! let restaurant = app.seed(factory::restaurant("Pizzeria")).await?;
//! app.seed(factory::dish(restaurant.id, "Margherita", dec!(9.9))).await?;
//!
//! let response = app
//!     .get(&format!("/api/restaurant/{}/dish", restaurant.id))
//!     .send()
//!     .await;
//! # Ok(())
//! # }
//! ```

pub mod factory;
pub mod harness;

pub use harness::{HarnessConfig, StoreKind, TestApp, TestAppBuilder};
