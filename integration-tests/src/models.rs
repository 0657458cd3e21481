use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// NFT record as returned by the NEP-171 views
#[derive(Debug, Clone, Deserialize)]
pub struct NearNft {
    pub token_id: String,
    pub owner_id: String,
    pub metadata: Option<NearNftMetadata>,
    pub approved_account_ids: Option<HashMap<String, u64>>,
}

impl NearNft {
    /// Campaign token label of an edition id (`"3:7"` -> `"3"`)
    pub fn label(&self) -> &str {
        self.token_id
            .rsplit_once(':')
            .map_or(self.token_id.as_str(), |(label, _)| label)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NearNftMetadata {
    pub title: Option<String>,
    pub description: Option<String>,
    pub media: Option<String>,
    pub media_hash: Option<String>,
    pub copies: Option<u64>,
    pub issued_at: Option<String>,
    pub expires_at: Option<String>,
    pub starts_at: Option<String>,
    pub updated_at: Option<String>,
    pub extra: Option<String>,
    pub reference: Option<String>,
    pub reference_hash: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContractMetadata {
    pub spec: String,
    pub name: String,
    pub symbol: String,
    pub icon: Option<String>,
    pub base_uri: Option<String>,
}

/// `data` argument of `mint_nft`
#[derive(Debug, Clone, Serialize)]
pub struct SongData {
    pub campaign_id: String,
    pub token_id: String,
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra: Option<String>,
    /// yoctoNEAR, as a decimal string
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
}

impl SongData {
    /// The synthetic song used by the scenarios: campaign `i`, token `i`
    pub fn numbered(i: u32) -> Self {
        Self {
            campaign_id: i.to_string(),
            token_id: i.to_string(),
            name: format!("Test Song {}", i),
            description: format!("Test Song {} description", i),
            extra: None,
            price: None,
        }
    }

    pub fn with_price(mut self, yocto: u128) -> Self {
        self.price = Some(yocto.to_string());
        self
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CampaignToken {
    pub campaign_id: String,
    pub token_id: String,
    pub name: String,
    pub description: String,
    pub creator: String,
}
