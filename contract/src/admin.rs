use crate::*;
use near_sdk::assert_one_yocto;

impl Contract {
    pub(crate) fn assert_owner(&self) {
        assert_eq!(
            env::predecessor_account_id(),
            self.owner_id,
            "Only owner can call this method"
        );
    }

    fn update_metadata(&mut self, update: impl FnOnce(&mut NFTContractMetadata)) -> NFTContractMetadata {
        let mut metadata = self
            .metadata
            .get()
            .unwrap_or_else(|| env::panic_str("Metadata is not initialized"));
        update(&mut metadata);
        metadata.assert_valid();
        self.metadata.set(&metadata);
        metadata
    }
}

#[near_bindgen]
impl Contract {
    /// Set new owner (only current owner can call)
    pub fn set_owner(&mut self, new_owner_id: AccountId) {
        self.assert_owner();
        let old_owner = self.owner_id.clone();
        self.owner_id = new_owner_id.clone();

        log!("Owner changed from {} to {}", old_owner, new_owner_id);
    }

    #[payable]
    pub fn add_whitelisted_creator(&mut self, creator: AccountId) {
        assert_one_yocto();
        self.assert_owner();
        self.whitelisted_creators.insert(&creator);

        log!("Whitelisted creator {}", creator);
    }

    #[payable]
    pub fn remove_whitelisted_creator(&mut self, creator: AccountId) {
        assert_one_yocto();
        self.assert_owner();
        self.whitelisted_creators.remove(&creator);

        log!("Removed creator {} from whitelist", creator);
    }

    /// Point token media at a new API host (only owner can call)
    #[payable]
    pub fn update_base_url(&mut self, url: String) -> NFTContractMetadata {
        self.assert_owner();
        log!("Base URL updated to {}", url);
        self.update_metadata(|metadata| metadata.base_uri = Some(url))
    }

    #[payable]
    pub fn update_icon(&mut self, svg_data: String) -> NFTContractMetadata {
        self.assert_owner();
        self.update_metadata(|metadata| metadata.icon = Some(svg_data))
    }
}
