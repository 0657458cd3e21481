use near_contract_standards::non_fungible_token::metadata::{
    NFTContractMetadata, TokenMetadata, NFT_METADATA_SPEC,
};
use near_contract_standards::non_fungible_token::{Token, TokenId};
use near_sdk::borsh::{BorshDeserialize, BorshSerialize};
use near_sdk::collections::{LazyOption, LookupMap, UnorderedMap, UnorderedSet};
use near_sdk::json_types::U128;
use near_sdk::{
    env, log, near_bindgen, require, AccountId, BorshStorageKey, NearToken, PanicOnDefault,
    Promise,
};
use std::collections::HashMap;

mod admin;
mod events;
mod tokens;
mod types;
mod views;

pub use types::{CampaignId, CampaignToken, Edition, EditionId, MintData};

pub type Balance = u128;

/// Default page size for enumeration views
pub const DEFAULT_PAGE_LIMIT: u64 = 50;

pub const DEFAULT_BASE_URI: &str = "https://raidar.us/api/v1";

const DATA_ICON_SVG: &str = "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAGcAAABnCAMAAAAqn6zLAAABmFBMVEXuJDzuJDz////92t/uKD/6wsnuJDzuK0PwQFX1iZXuJDzuJT3uJj7uJz7uJz/uKUHuKkHvK0LvLEPvLUTvLkXvMUfvMkjvM0nvM0rvNEvvN03wOU7wOU/wOlDwO1HwPVLwPlPwP1TwQ1jxRVrxRlvxSV3xSl7xS17xTF/xTGDxTmHxT2LxUGPyUmXyVWjyV2nyW23zXnDzX3HzYXLzYnPzZHXzZXbzaHjzanv0cH/0dIP1fIr1fIv1foz1f431gI71g5H2hpP2iJX2ipf2jpr2jpv2kJz2kZ33kp73laD3laH3mqX3m6b3nKf3naj4oKr4oaz4p7H5rLX5rrf5r7j5sLn5sbn5s7v5tb35tr75uMD6u8P6v8b6wsn6w8n6xMr6xcv7x837yc/7y9H70NX70db809j81tr819v819z82d382t7829/83eD83uL93+P94OP94eT94uX95Of95+r96Or96ev96uz+7O7+7e/+7/D+8fP+8/T+9PX+9fb+9vf+9/j/+fr/+vr//Pz//P3//f3//v7///+AcWUyAAAACnRSTlPH3d3f4eHl5evvxwPreAAAAAFiS0dEh/vZC8sAAAHhSURBVGje7dpVU8NAFAXg4nBL0eJOseLBCe4UK1DcHYq7O4T92zxQIClJyszuFpl7Xvfcfg/7kLszNfgo4h9ClAn2YRKDAZRpdHPigUkC0UEHHXTQQQcddNBBB53f4aQ2jK+vLXbmcHXM4vzzW0UaS+LlhJYM3chKR1lcnLz+U7fWcRxzJ6XVSb5mjNZJUJxGi3PPRC1SOqWT/XlkKhu5JVppp3Rs7we5fSdEJxOUzkM5AEByywbRzwqlQ6SpplaNS5Fni9b5ZtBB588718Ol5lXejrQgmgFggK+z1eb6ePJ0Tu0FH0Vuzv1kVZisyMeRluvMyiIPZ7sr48skc+fMXqI2ydhZqjCpTzJ28rUmGTvZ6PxNZ9g7TtiBd5xu4g0nc5Twd2LFhRfC2zEJjjse+4HSKbSfc9pDZE5a2y6/fefdiVG7FNaO1qUwdKwARYMX/PfE2Z4d3K/R+Wlnv9PJ37lyCEZYonPqPSGP0zURAEDrVHt6/iS6ipSOVQc5slk+i5SO8VDrTeoQjPIipQMdasjTTG2UW4/WidzUfpOydMB6qfiBk171lYfaAcvex/StQwjVmKR3ILx5nxBC7ufEaO1JBg4AZAiVxeG6k2wcz0EHHXTQ+a9OgK8ifkH6/7d8BeLgry/RqHfGAAAAAElFTkSuQmCC";

#[derive(BorshSerialize, BorshStorageKey)]
#[borsh(crate = "near_sdk::borsh")]
enum StorageKey {
    Metadata,
    Tokens,
    Campaigns,
    Editions,
    EditionsPerOwner,
    WhitelistedCreators,
}

#[derive(BorshDeserialize, BorshSerialize, PanicOnDefault)]
#[borsh(crate = "near_sdk::borsh")]
#[near_bindgen]
pub struct Contract {
    owner_id: AccountId,
    metadata: LazyOption<NFTContractMetadata>,

    // Minted campaign tokens, keyed by their label
    tokens: LookupMap<TokenId, CampaignToken>,
    campaigns: LookupMap<CampaignId, Vec<TokenId>>,

    // Owned copies handed out by drops and purchases
    editions: LookupMap<EditionId, Edition>,
    editions_per_owner: UnorderedMap<AccountId, Vec<EditionId>>,
    next_edition_id: EditionId,
    total_editions: u64,

    whitelisted_creators: UnorderedSet<AccountId>,
}

#[near_bindgen]
impl Contract {
    /// Initialize with the Raidar collection metadata. The caller becomes the owner.
    #[init]
    pub fn new_default_meta() -> Self {
        Self::new(NFTContractMetadata {
            spec: NFT_METADATA_SPEC.to_string(),
            name: "Raidar".to_string(),
            symbol: "RAIDR".to_string(),
            icon: Some(DATA_ICON_SVG.to_string()),
            base_uri: Some(DEFAULT_BASE_URI.to_string()),
            reference: None,
            reference_hash: None,
        })
    }

    #[init]
    pub fn new(metadata: NFTContractMetadata) -> Self {
        require!(!env::state_exists(), "Already initialized");
        metadata.assert_valid();

        let owner_id = env::predecessor_account_id();
        log!("Initializing {} owned by {}", metadata.name, owner_id);

        Self {
            owner_id,
            metadata: LazyOption::new(StorageKey::Metadata, Some(&metadata)),
            tokens: LookupMap::new(StorageKey::Tokens),
            campaigns: LookupMap::new(StorageKey::Campaigns),
            editions: LookupMap::new(StorageKey::Editions),
            editions_per_owner: UnorderedMap::new(StorageKey::EditionsPerOwner),
            next_edition_id: 0,
            total_editions: 0,
            whitelisted_creators: UnorderedSet::new(StorageKey::WhitelistedCreators),
        }
    }
}

impl Contract {
    /// Metadata shown for every edition of a campaign token
    fn token_metadata(&self, token: &CampaignToken, issued_at: Option<u64>) -> TokenMetadata {
        TokenMetadata {
            title: Some(token.name.clone()),
            description: Some(token.description.clone()),
            media: Some(format!("song/{}/media", token.token_id)),
            media_hash: None,
            copies: None,
            issued_at: issued_at.map(|ts| ts.to_string()),
            expires_at: None,
            starts_at: None,
            updated_at: None,
            extra: token.extra.clone(),
            reference: None,
            reference_hash: None,
        }
    }

    fn edition_token(&self, edition_id: EditionId, edition: &Edition) -> Option<Token> {
        let token = self.tokens.get(&edition.token_id)?;
        Some(Token {
            token_id: types::edition_token_id(&edition.token_id, edition_id),
            owner_id: edition.owner_id.clone(),
            metadata: Some(self.token_metadata(&token, Some(edition.issued_at))),
            approved_account_ids: Some(HashMap::new()),
        })
    }

    fn owner_editions(&self, account_id: &AccountId) -> Vec<EditionId> {
        self.editions_per_owner.get(account_id).unwrap_or_default()
    }

    /// Charge `storage_used` bytes against the attached deposit (minus `extra_spend`)
    /// and send the rest back to the caller.
    fn refund_deposit(&self, storage_used: u64, extra_spend: Balance) {
        let required_cost = env::storage_byte_cost().as_yoctonear() * Balance::from(storage_used);
        let attached_deposit = env::attached_deposit().as_yoctonear() - extra_spend;

        assert!(
            required_cost <= attached_deposit,
            "Must attach {} yoctoNEAR to cover storage",
            required_cost,
        );

        let refund = attached_deposit - required_cost;
        if refund > 1 {
            let caller = env::predecessor_account_id();
            log!("Refunding {} yoctoNEAR to {}", refund, caller);
            Promise::new(caller).transfer(NearToken::from_yoctonear(refund));
        }
    }
}

#[cfg(test)]
mod tests;
