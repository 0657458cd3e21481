

#[cfg(test)]
use crate::*;
#[cfg(test)]
use near_sdk::test_utils::{accounts, VMContextBuilder};
#[cfg(test)]
use near_sdk::{testing_env, NearToken};

#[cfg(test)]
pub fn get_context(predecessor: AccountId, deposit: NearToken) -> VMContextBuilder {
    let mut builder = VMContextBuilder::new();
    builder
        .current_account_id(accounts(0))
        .predecessor_account_id(predecessor)
        .attached_deposit(deposit);
    builder
}

/// Contract initialized by `accounts(0)`, which becomes the owner
#[cfg(test)]
pub fn setup_contract() -> Contract {
    let context = get_context(accounts(0), NearToken::from_near(0));
    testing_env!(context.build());

    Contract::new_default_meta()
}

#[cfg(test)]
pub fn mint_data(i: u32) -> MintData {
    MintData {
        campaign_id: i.to_string(),
        token_id: i.to_string(),
        name: format!("Test Song {}", i),
        description: format!("Test Song {} description", i),
        extra: None,
        price: None,
    }
}

/// Mint songs `1..=count` as the owner
#[cfg(test)]
pub fn create_songs(contract: &mut Contract, count: u32) {
    testing_env!(get_context(accounts(0), NearToken::from_near(0)).build());
    for i in 1..=count {
        contract.mint_nft(mint_data(i));
    }
}

#[cfg(test)]
pub fn as_owner() {
    testing_env!(get_context(accounts(0), NearToken::from_near(0)).build());
}

#[cfg(test)]
mod basic_tests {
    use super::*;
    use near_contract_standards::non_fungible_token::metadata::NonFungibleTokenMetadataProvider;

    #[test]
    fn test_initialization() {
        let contract = setup_contract();

        assert_eq!(contract.owner_id, accounts(0));
        assert_eq!(contract.next_edition_id, 0);
        assert_eq!(contract.total_editions, 0);
        assert!(contract.get_whitelist().is_empty());
    }

    #[test]
    fn test_default_metadata() {
        let contract = setup_contract();
        let metadata = contract.nft_metadata();

        assert_eq!(metadata.spec, NFT_METADATA_SPEC);
        assert_eq!(metadata.name, "Raidar");
        assert_eq!(metadata.symbol, "RAIDR");
        assert_eq!(metadata.base_uri.as_deref(), Some(DEFAULT_BASE_URI));
        assert!(metadata
            .icon
            .as_deref()
            .is_some_and(|icon| icon.starts_with("data:image/png;base64,")));
    }

    #[test]
    fn test_get_owner() {
        let contract = setup_contract();
        assert_eq!(contract.get_owner(), accounts(0));
    }
}

#[cfg(test)]
mod admin_tests {
    use super::*;
    use near_contract_standards::non_fungible_token::metadata::NonFungibleTokenMetadataProvider;

    #[test]
    fn test_set_owner() {
        let mut contract = setup_contract();
        let new_owner = accounts(2);

        as_owner();
        contract.set_owner(new_owner.clone());

        assert_eq!(contract.get_owner(), new_owner);
    }

    #[test]
    #[should_panic(expected = "Only owner can call this method")]
    fn test_set_owner_unauthorized() {
        let mut contract = setup_contract();

        testing_env!(get_context(accounts(2), NearToken::from_near(0)).build());
        contract.set_owner(accounts(2));
    }

    #[test]
    fn test_update_base_url() {
        let mut contract = setup_contract();

        as_owner();
        let updated = contract.update_base_url("https://test.com".to_string());

        assert_eq!(updated.base_uri.as_deref(), Some("https://test.com"));
        assert_eq!(
            contract.nft_metadata().base_uri.as_deref(),
            Some("https://test.com")
        );
        assert_eq!(updated.name, "Raidar");
    }

    #[test]
    #[should_panic(expected = "Only owner can call this method")]
    fn test_update_base_url_unauthorized() {
        let mut contract = setup_contract();

        testing_env!(get_context(accounts(1), NearToken::from_near(0)).build());
        contract.update_base_url("https://evil.com".to_string());
    }

    #[test]
    fn test_update_icon_keeps_base_url() {
        let mut contract = setup_contract();

        as_owner();
        let updated = contract.update_icon("data:image/svg+xml,<svg/>".to_string());

        assert_eq!(updated.icon.as_deref(), Some("data:image/svg+xml,<svg/>"));
        assert_eq!(updated.base_uri.as_deref(), Some(DEFAULT_BASE_URI));
    }

    #[test]
    fn test_whitelist_add_remove() {
        let mut contract = setup_contract();

        testing_env!(get_context(accounts(0), NearToken::from_yoctonear(1)).build());
        contract.add_whitelisted_creator(accounts(3));
        assert_eq!(contract.get_whitelist(), vec![accounts(3)]);

        contract.remove_whitelisted_creator(accounts(3));
        assert!(contract.get_whitelist().is_empty());
    }

    #[test]
    #[should_panic(expected = "Requires attached deposit of exactly 1 yoctoNEAR")]
    fn test_whitelist_requires_one_yocto() {
        let mut contract = setup_contract();

        as_owner();
        contract.add_whitelisted_creator(accounts(3));
    }

    #[test]
    #[should_panic(expected = "Only owner can call this method")]
    fn test_whitelist_unauthorized() {
        let mut contract = setup_contract();

        testing_env!(get_context(accounts(3), NearToken::from_yoctonear(1)).build());
        contract.add_whitelisted_creator(accounts(3));
    }
}
