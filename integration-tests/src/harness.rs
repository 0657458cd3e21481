use crate::config::HarnessConfig;
use crate::error::{HarnessError, HarnessResult};
use crate::models::{CampaignToken, ContractMetadata, NearNft, SongData};
use anyhow::{Context, Result};
use near_workspaces::network::Sandbox;
use near_workspaces::result::ExecutionSuccess;
use near_workspaces::types::NearToken;
use near_workspaces::{Account, Contract, Worker};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;
use tracing::{debug, info, warn};

/// Yocto cost of one byte of account storage on the sandbox
const STORAGE_PRICE_PER_BYTE: u128 = 10_000_000_000_000_000_000;

/// A freshly provisioned sandbox with the contract deployed under `raidar`.
///
/// Every test builds its own harness. The sandbox lives as long as the owned
/// `Worker`, so it is released when the harness goes out of scope.
pub struct Harness {
    worker: Worker<Sandbox>,
    pub root: Account,
    pub raidar: Account,
    pub bob: Account,
    pub sam: Account,
    pub contract: Contract,
}

impl Harness {
    /// Provision accounts, deploy and initialize using configuration from the environment
    pub async fn setup() -> Result<Self> {
        crate::init_tracing();
        let config = HarnessConfig::from_env()?;
        Self::setup_with(&config).await
    }

    pub async fn setup_with(config: &HarnessConfig) -> Result<Self> {
        let wasm = load_wasm(config).await?;

        let worker = near_workspaces::sandbox()
            .await
            .context("Failed to start sandbox")?;
        let root = worker.root_account()?;

        let raidar = create_account(&root, "raidar", config.owner_balance).await?;
        let bob = create_account(&root, "bob", config.bob_balance).await?;
        let sam = create_account(&root, "sam", config.sam_balance).await?;

        let contract = raidar
            .deploy(&wasm)
            .await?
            .into_result()
            .context("Failed to deploy contract")?;
        info!("Deployed contract to {}", contract.id());

        let harness = Self {
            worker,
            root,
            raidar,
            bob,
            sam,
            contract,
        };

        harness
            .call(&harness.raidar, "new_default_meta", json!({}), NearToken::from_yoctonear(0))
            .await
            .context("Failed to initialize contract")?;

        Ok(harness)
    }

    pub fn worker(&self) -> &Worker<Sandbox> {
        &self.worker
    }

    /// Call `method` on the contract as `caller`.
    ///
    /// A contract panic comes back as [`HarnessError::Rejected`] with the failure logged.
    pub async fn call(
        &self,
        caller: &Account,
        method: &str,
        args: impl Serialize,
        deposit: NearToken,
    ) -> HarnessResult<ExecutionSuccess> {
        let outcome = caller
            .call(self.contract.id(), method)
            .args_json(args)
            .deposit(deposit)
            .max_gas()
            .transact()
            .await?;

        for line in outcome.logs() {
            debug!(method, "contract log: {}", line);
        }

        outcome.into_result().map_err(|failure| {
            // Debug keeps the nested panic message of the failed receipt
            let message = format!("{:?}", failure);
            warn!(method, caller = %caller.id(), "call rejected: {}", message);
            HarnessError::Rejected {
                method: method.to_string(),
                message,
            }
        })
    }

    pub async fn view<T: DeserializeOwned>(&self, method: &str, args: impl Serialize) -> Result<T> {
        let result = self
            .raidar
            .view(self.contract.id(), method)
            .args_json(args)
            .await?;
        result
            .json::<T>()
            .with_context(|| format!("Failed to decode `{}` view result", method))
    }

    /// Mint songs `1..=count` as the owner with no deposit
    pub async fn create_songs(&self, count: u32) -> Result<()> {
        for i in 1..=count {
            self.mint_nft(&self.raidar, SongData::numbered(i), NearToken::from_yoctonear(0))
                .await?;
        }
        Ok(())
    }

    pub async fn mint_nft(
        &self,
        caller: &Account,
        data: SongData,
        deposit: NearToken,
    ) -> HarnessResult<CampaignToken> {
        let success = self
            .call(caller, "mint_nft", json!({ "data": data }), deposit)
            .await?;
        Ok(success.json::<CampaignToken>()?)
    }

    /// Owner drops a new edition of `token_id` to `account`
    pub async fn drop_nft(&self, account: &Account, token_id: &str) -> HarnessResult<NearNft> {
        self.drop_nft_as(&self.raidar, account, token_id).await
    }

    pub async fn drop_nft_as(
        &self,
        caller: &Account,
        account: &Account,
        token_id: &str,
    ) -> HarnessResult<NearNft> {
        let success = self
            .call(
                caller,
                "drop_nft",
                json!({ "account_id": account.id(), "token_id": token_id }),
                NearToken::from_yoctonear(0),
            )
            .await?;
        Ok(success.json::<NearNft>()?)
    }

    /// Owner burns every edition of `token_id` held by `account`
    pub async fn burn_nft(&self, account: &Account, token_id: &str) -> HarnessResult<()> {
        self.burn_nft_as(&self.raidar, account, token_id).await
    }

    pub async fn burn_nft_as(
        &self,
        caller: &Account,
        account: &Account,
        token_id: &str,
    ) -> HarnessResult<()> {
        self.call(
            caller,
            "burn_nft",
            json!({ "account_id": account.id(), "token_id": token_id }),
            NearToken::from_yoctonear(0),
        )
        .await?;
        Ok(())
    }

    pub async fn tokens_for_owner(&self, account: &Account) -> Result<Vec<NearNft>> {
        self.view("nft_tokens_for_owner", json!({ "account_id": account.id() }))
            .await
    }

    pub async fn nft_metadata(&self) -> Result<ContractMetadata> {
        self.view("nft_metadata", json!({})).await
    }

    /// Balance not locked for storage, like the wallet's "available" figure
    pub async fn available_balance(&self, account: &Account) -> Result<NearToken> {
        let details = account.view_account().await?;
        let storage_cost = details.storage_usage as u128 * STORAGE_PRICE_PER_BYTE;
        Ok(NearToken::from_yoctonear(
            details.balance.as_yoctonear().saturating_sub(storage_cost),
        ))
    }

    /// Log how much `account` spent between two balance snapshots
    pub fn log_spent(&self, account: &Account, start: NearToken, end: NearToken) {
        info!("{} start balance: {}", account.id(), start);
        info!("{} end balance: {}", account.id(), end);
        info!(
            "{} spent balance: {}",
            account.id(),
            start.saturating_sub(end)
        );
    }
}

async fn create_account(root: &Account, name: &str, balance: NearToken) -> Result<Account> {
    let account = root
        .create_subaccount(name)
        .initial_balance(balance)
        .transact()
        .await?
        .into_result()
        .with_context(|| format!("Failed to create account {}", name))?;
    debug!("Created {} with {}", account.id(), balance);
    Ok(account)
}

async fn load_wasm(config: &HarnessConfig) -> Result<Vec<u8>> {
    match &config.wasm_path {
        Some(path) => {
            info!("Loading contract from {}", path.display());
            std::fs::read(path)
                .with_context(|| format!("Failed to read contract wasm {}", path.display()))
        }
        None => {
            let dir = config.contract_dir.to_string_lossy().into_owned();
            info!("Compiling contract in {}", dir);
            near_workspaces::compile_project(&dir)
                .await
                .with_context(|| format!("Failed to compile contract in {}", dir))
        }
    }
}
