use near_contract_standards::non_fungible_token::TokenId;
use near_sdk::json_types::U128;
use near_sdk::{near, AccountId};

pub type CampaignId = String;
pub type EditionId = u64;

/// Arguments of `mint_nft`
#[derive(Clone, Debug)]
#[near(serializers=[json])]
pub struct MintData {
    pub campaign_id: CampaignId,
    pub token_id: TokenId,
    pub name: String,
    pub description: String,
    pub extra: Option<String>,
    /// Price in yoctoNEAR for `buy_nft`. Unset means the token is only handed out by drops.
    pub price: Option<U128>,
}

/// A minted campaign token. Owned copies are [`Edition`]s of it.
#[derive(Clone, Debug, PartialEq)]
#[near(serializers=[borsh, json])]
pub struct CampaignToken {
    pub campaign_id: CampaignId,
    pub token_id: TokenId,
    pub name: String,
    pub description: String,
    pub extra: Option<String>,
    pub price: Option<U128>,
    pub creator: AccountId,
}

/// One owned copy of a campaign token
#[derive(Clone, Debug, PartialEq)]
#[near(serializers=[borsh])]
pub struct Edition {
    pub token_id: TokenId,
    pub owner_id: AccountId,
    pub issued_at: u64,
}

/// NEP-171 id of an edition: `<label>:<edition_id>`
pub fn edition_token_id(token_id: &str, edition_id: EditionId) -> TokenId {
    format!("{}:{}", token_id, edition_id)
}

/// Split an edition id back into label and edition number.
/// Labels may contain `:` themselves, so only the last separator counts.
pub fn parse_edition_token_id(token_id: &str) -> Option<(&str, EditionId)> {
    let (label, edition) = token_id.rsplit_once(':')?;
    if label.is_empty() {
        return None;
    }
    edition.parse().ok().map(|edition_id| (label, edition_id))
}
