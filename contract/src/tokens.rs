use crate::*;

#[near_bindgen]
impl Contract {
    /// Register a campaign token. Owned copies are created later by `drop_nft` or `buy_nft`.
    ///
    /// The owner mints for free and any attached deposit is returned. Whitelisted
    /// creators must attach enough deposit to cover the storage they add.
    #[payable]
    pub fn mint_nft(&mut self, data: MintData) -> CampaignToken {
        let initial_storage_usage = env::storage_usage();
        let creator = env::predecessor_account_id();
        let is_owner = creator == self.owner_id;

        assert!(
            is_owner || self.whitelisted_creators.contains(&creator),
            "The account is not whitelisted"
        );
        assert!(!data.token_id.is_empty(), "Token ID cannot be empty");
        assert!(!data.campaign_id.is_empty(), "Campaign ID cannot be empty");
        assert!(
            self.tokens.get(&data.token_id).is_none(),
            "Token already exists"
        );

        let token = CampaignToken {
            campaign_id: data.campaign_id,
            token_id: data.token_id,
            name: data.name,
            description: data.description,
            extra: data.extra,
            price: data.price,
            creator,
        };

        self.tokens.insert(&token.token_id, &token);

        let mut campaign_tokens = self.campaigns.get(&token.campaign_id).unwrap_or_default();
        campaign_tokens.push(token.token_id.clone());
        self.campaigns.insert(&token.campaign_id, &campaign_tokens);

        log!(
            "Minted token {} for campaign {} by {}",
            token.token_id,
            token.campaign_id,
            token.creator
        );

        if is_owner {
            // Storage is paid by the contract, so the owner gets the whole deposit back
            let deposit = env::attached_deposit();
            if deposit.as_yoctonear() > 0 {
                log!("Refunding {} yoctoNEAR to {}", deposit.as_yoctonear(), token.creator);
                Promise::new(token.creator.clone()).transfer(deposit);
            }
        } else {
            self.refund_deposit(env::storage_usage() - initial_storage_usage, 0);
        }

        token
    }

    /// Hand a new edition of `token_id` to `account_id` (only owner can call)
    #[payable]
    pub fn drop_nft(&mut self, account_id: AccountId, token_id: TokenId) -> Token {
        self.assert_owner();

        let (edition_id, edition) = self.internal_issue_edition(&account_id, &token_id);
        let edition_token_id = types::edition_token_id(&token_id, edition_id);

        events::emit::nft_mint(&account_id, &[edition_token_id], None);

        self.edition_token(edition_id, &edition)
            .unwrap_or_else(|| env::panic_str("Token not found"))
    }

    /// Buy an edition of `token_id` for the caller.
    ///
    /// The attached deposit must cover the token price plus the storage of the new
    /// edition. The price goes to the token creator, the remainder is refunded.
    #[payable]
    pub fn buy_nft(&mut self, token_id: TokenId) -> Token {
        let initial_storage_usage = env::storage_usage();
        let attached_deposit = env::attached_deposit().as_yoctonear();
        let buyer = env::predecessor_account_id();

        let token = self
            .tokens
            .get(&token_id)
            .unwrap_or_else(|| env::panic_str("Token not found"));
        let price = token
            .price
            .unwrap_or_else(|| env::panic_str("Token is not for sale"))
            .0;

        assert!(
            attached_deposit >= price,
            "Marketplace: attached deposit is less than price : {}",
            price
        );

        let (edition_id, edition) = self.internal_issue_edition(&buyer, &token_id);
        let edition_token_id = types::edition_token_id(&token_id, edition_id);

        self.refund_deposit(env::storage_usage() - initial_storage_usage, price);

        if price > 0 {
            Promise::new(token.creator.clone()).transfer(NearToken::from_yoctonear(price));
        }

        log!(
            "{} bought {} for {} yoctoNEAR paid to {}",
            buyer,
            edition_token_id,
            price,
            token.creator
        );
        events::emit::nft_mint(&buyer, &[edition_token_id], None);

        self.edition_token(edition_id, &edition)
            .unwrap_or_else(|| env::panic_str("Token not found"))
    }

    /// Burn every edition of `token_id` held by `account_id` (only owner can call)
    #[payable]
    pub fn burn_nft(&mut self, account_id: AccountId, token_id: TokenId) {
        self.assert_owner();

        let owned = self
            .editions_per_owner
            .get(&account_id)
            .unwrap_or_else(|| env::panic_str("The account doesn't have any tokens"));

        let (burned, kept): (Vec<EditionId>, Vec<EditionId>) =
            owned.into_iter().partition(|edition_id| {
                self.editions
                    .get(edition_id)
                    .map_or(false, |edition| edition.token_id == token_id)
            });

        assert!(!burned.is_empty(), "Token should be owned by the account");

        for edition_id in &burned {
            self.editions.remove(edition_id);
        }
        self.total_editions -= burned.len() as u64;

        if kept.is_empty() {
            self.editions_per_owner.remove(&account_id);
        } else {
            self.editions_per_owner.insert(&account_id, &kept);
        }

        let burned_ids: Vec<TokenId> = burned
            .iter()
            .map(|edition_id| types::edition_token_id(&token_id, *edition_id))
            .collect();

        log!(
            "Burned {} edition(s) of {} from {}",
            burned_ids.len(),
            token_id,
            account_id
        );
        events::emit::nft_burn(&account_id, &burned_ids, &env::predecessor_account_id());
    }
}

impl Contract {
    fn internal_issue_edition(
        &mut self,
        account_id: &AccountId,
        token_id: &TokenId,
    ) -> (EditionId, Edition) {
        assert!(self.tokens.get(token_id).is_some(), "Token not found");

        let edition_id = self.next_edition_id;
        self.next_edition_id += 1;

        let edition = Edition {
            token_id: token_id.clone(),
            owner_id: account_id.clone(),
            issued_at: env::block_timestamp(),
        };
        self.editions.insert(&edition_id, &edition);

        let mut owned = self.owner_editions(account_id);
        owned.push(edition_id);
        self.editions_per_owner.insert(account_id, &owned);
        self.total_editions += 1;

        (edition_id, edition)
    }
}
