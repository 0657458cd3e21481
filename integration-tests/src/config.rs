use anyhow::{Context, Result};
use near_workspaces::types::NearToken;
use std::env;
use std::path::{Path, PathBuf};

/// Prebuilt contract location, relative to the workspace root
pub const DEFAULT_WASM_PATH: &str = "out/main.wasm";

/// Harness configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct HarnessConfig {
    /// Prebuilt contract wasm. `None` compiles the contract crate instead.
    pub wasm_path: Option<PathBuf>,
    pub contract_dir: PathBuf,

    // Initial balances of the provisioned accounts
    pub owner_balance: NearToken,
    pub bob_balance: NearToken,
    pub sam_balance: NearToken,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        let root = workspace_root();
        let prebuilt = root.join(DEFAULT_WASM_PATH);

        Self {
            wasm_path: prebuilt.exists().then_some(prebuilt),
            contract_dir: root.join("contract"),
            owner_balance: NearToken::from_near(200),
            bob_balance: NearToken::from_near(3),
            sam_balance: NearToken::from_near(7),
        }
    }
}

impl HarnessConfig {
    /// Load configuration from environment variables
    ///
    /// Optional environment variables (with defaults):
    /// - RAIDAR_WASM_PATH: prebuilt contract wasm (default: out/main.wasm if present,
    ///   otherwise the contract crate is compiled)
    /// - RAIDAR_OWNER_BALANCE_NEAR: contract owner balance (default: 200)
    /// - RAIDAR_BOB_BALANCE_NEAR: first user balance (default: 3)
    /// - RAIDAR_SAM_BALANCE_NEAR: second user balance (default: 7)
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenv::dotenv().ok();

        let defaults = Self::default();

        let wasm_path = match env::var("RAIDAR_WASM_PATH") {
            Ok(path) => {
                let path = PathBuf::from(path);
                anyhow::ensure!(
                    path.exists(),
                    "RAIDAR_WASM_PATH points to a missing file: {}",
                    path.display()
                );
                Some(path)
            }
            Err(_) => defaults.wasm_path,
        };

        Ok(Self {
            wasm_path,
            contract_dir: defaults.contract_dir,
            owner_balance: near_from_env("RAIDAR_OWNER_BALANCE_NEAR", defaults.owner_balance)?,
            bob_balance: near_from_env("RAIDAR_BOB_BALANCE_NEAR", defaults.bob_balance)?,
            sam_balance: near_from_env("RAIDAR_SAM_BALANCE_NEAR", defaults.sam_balance)?,
        })
    }
}

fn near_from_env(name: &str, default: NearToken) -> Result<NearToken> {
    match env::var(name) {
        Ok(value) => {
            let near = value
                .parse::<u128>()
                .with_context(|| format!("{} must be a whole number of NEAR", name))?;
            Ok(NearToken::from_near(near))
        }
        Err(_) => Ok(default),
    }
}

fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}
