use crate::*;
use near_contract_standards::non_fungible_token::core::{
    NonFungibleTokenCore, NonFungibleTokenResolver,
};
use near_contract_standards::non_fungible_token::enumeration::NonFungibleTokenEnumeration;
use near_contract_standards::non_fungible_token::metadata::NonFungibleTokenMetadataProvider;
use near_sdk::PromiseOrValue;

#[near_bindgen]
impl Contract {
    pub fn get_owner(&self) -> AccountId {
        self.owner_id.clone()
    }

    pub fn get_whitelist(&self) -> Vec<AccountId> {
        self.whitelisted_creators.to_vec()
    }

    /// Get a minted campaign token by its label
    pub fn get_campaign_token(&self, token_id: TokenId) -> Option<CampaignToken> {
        self.tokens.get(&token_id)
    }

    /// All tokens minted under a campaign, in mint order
    pub fn get_campaign_tokens(&self, campaign_id: CampaignId) -> Vec<CampaignToken> {
        self.campaigns
            .get(&campaign_id)
            .unwrap_or_default()
            .iter()
            .filter_map(|token_id| self.tokens.get(token_id))
            .collect()
    }

    /// Metadata for either a campaign label (`"3"`) or an edition id (`"3:7"`)
    pub fn nft_token_metadata(&self, token_id: TokenId) -> TokenMetadata {
        if let Some(token) = self.tokens.get(&token_id) {
            return self.token_metadata(&token, None);
        }

        let (edition_id, edition) = self
            .lookup_edition(&token_id)
            .unwrap_or_else(|| env::panic_str("Token not found"));
        let token = self
            .tokens
            .get(&edition.token_id)
            .unwrap_or_else(|| env::panic_str("Token not found"));

        log!("Resolved {} to edition {}", token_id, edition_id);
        self.token_metadata(&token, Some(edition.issued_at))
    }
}

impl Contract {
    fn lookup_edition(&self, token_id: &str) -> Option<(EditionId, Edition)> {
        let (label, edition_id) = types::parse_edition_token_id(token_id)?;
        let edition = self.editions.get(&edition_id)?;
        (edition.token_id == label).then_some((edition_id, edition))
    }

    fn paginate_editions<'a>(
        &'a self,
        editions: impl Iterator<Item = EditionId> + 'a,
        from_index: Option<U128>,
        limit: Option<u64>,
    ) -> Vec<Token> {
        let start = u128::from(from_index.unwrap_or(U128(0)));
        let limit = limit.unwrap_or(DEFAULT_PAGE_LIMIT);

        editions
            .skip(usize::try_from(start).unwrap_or(usize::MAX))
            .take(usize::try_from(limit).unwrap_or(usize::MAX))
            .filter_map(|edition_id| {
                let edition = self.editions.get(&edition_id)?;
                self.edition_token(edition_id, &edition)
            })
            .collect()
    }
}

#[near_bindgen]
impl NonFungibleTokenMetadataProvider for Contract {
    fn nft_metadata(&self) -> NFTContractMetadata {
        self.metadata
            .get()
            .unwrap_or_else(|| env::panic_str("Metadata is not initialized"))
    }
}

#[near_bindgen]
impl NonFungibleTokenCore for Contract {
    fn nft_token(&self, token_id: TokenId) -> Option<Token> {
        let (edition_id, edition) = self.lookup_edition(&token_id)?;
        self.edition_token(edition_id, &edition)
    }

    #[payable]
    #[allow(unused_variables)]
    fn nft_transfer(
        &mut self,
        receiver_id: AccountId,
        token_id: TokenId,
        approval_id: Option<u64>,
        memo: Option<String>,
    ) {
        env::panic_str("NFT transfer is not supported for soulbound NFTs");
    }

    #[payable]
    #[allow(unused_variables)]
    fn nft_transfer_call(
        &mut self,
        receiver_id: AccountId,
        token_id: TokenId,
        approval_id: Option<u64>,
        memo: Option<String>,
        msg: String,
    ) -> PromiseOrValue<bool> {
        env::panic_str("NFT transfer is not supported for soulbound NFTs");
    }
}

#[near_bindgen]
impl NonFungibleTokenResolver for Contract {
    #[private]
    #[allow(unused_variables)]
    fn nft_resolve_transfer(
        &mut self,
        previous_owner_id: AccountId,
        receiver_id: AccountId,
        token_id: TokenId,
        approved_account_ids: Option<HashMap<AccountId, u64>>,
    ) -> bool {
        env::panic_str("NFT transfer is not supported for soulbound NFTs");
    }
}

#[near_bindgen]
impl NonFungibleTokenEnumeration for Contract {
    fn nft_total_supply(&self) -> U128 {
        U128(self.total_editions as u128)
    }

    fn nft_tokens(&self, from_index: Option<U128>, limit: Option<u64>) -> Vec<Token> {
        let all_editions = self
            .editions_per_owner
            .values()
            .flat_map(|owned| owned.into_iter());
        self.paginate_editions(all_editions, from_index, limit)
    }

    fn nft_supply_for_owner(&self, account_id: AccountId) -> U128 {
        U128(self.owner_editions(&account_id).len() as u128)
    }

    fn nft_tokens_for_owner(
        &self,
        account_id: AccountId,
        from_index: Option<U128>,
        limit: Option<u64>,
    ) -> Vec<Token> {
        let owned = self.owner_editions(&account_id);
        self.paginate_editions(owned.into_iter(), from_index, limit)
    }
}
