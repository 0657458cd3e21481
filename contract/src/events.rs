use crate::*;
use near_contract_standards::non_fungible_token::events::{NftBurn, NftMint};
use near_sdk::AccountIdRef;

pub mod emit {
    use super::*;

    /// Emit when an edition is handed to `owner_id` (drop or purchase)
    pub fn nft_mint(owner_id: &AccountId, token_ids: &[String], memo: Option<&str>) {
        let owner_id: &AccountIdRef = owner_id;
        let token_ids: Vec<&str> = token_ids.iter().map(String::as_str).collect();

        NftMint {
            owner_id,
            token_ids: &token_ids,
            memo,
        }
        .emit();
    }

    pub fn nft_burn(owner_id: &AccountId, token_ids: &[String], authorized_id: &AccountId) {
        let owner_id: &AccountIdRef = owner_id;
        let authorized_id: &AccountIdRef = authorized_id;
        let token_ids: Vec<&str> = token_ids.iter().map(String::as_str).collect();

        NftBurn {
            owner_id,
            token_ids: &token_ids,
            authorized_id: Some(authorized_id),
            memo: None,
        }
        .emit();
    }
}
