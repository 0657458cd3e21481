//! Sandbox harness for the Raidar NFT contract.
//!
//! Each test provisions its own sandbox through [`Harness::setup`]: the contract
//! owner `raidar` plus two users `bob` and `sam`, with the contract deployed
//! under `raidar` and initialized by `new_default_meta`.

pub mod config;
pub mod error;
pub mod harness;
pub mod models;

pub use config::HarnessConfig;
pub use error::{HarnessError, HarnessResult};
pub use harness::Harness;
pub use models::{CampaignToken, ContractMetadata, NearNft, NearNftMetadata, SongData};

use std::sync::Once;

static TRACING: Once = Once::new();

/// Install the tracing subscriber once per test binary.
///
/// Filter comes from RUST_LOG, defaulting to `raidar_integration_tests=info`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "raidar_integration_tests=info".into()),
            )
            .with_test_writer()
            .try_init();
    });
}
