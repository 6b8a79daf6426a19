use anchor_lang::solana_program::pubkey::Pubkey;

use crate::constants::{MAX_MEMBERS, MAX_NAME_LEN};
use crate::error::MemberAirdropError;
use crate::state::{AirdropEntry, Registry};

fn registry() -> Registry {
    Registry {
        bump: 255,
        authority: Pubkey::new_unique(),
        members: Vec::new(),
    }
}

mod create {
    use super::*;

    #[test]
    fn reflects_supplied_values() {
        let mut reg = registry();
        let addr = Pubkey::new_unique();

        reg.register(addr, 1_483_574_400, "Ema".to_string(), 20)
            .unwrap();

        let record = reg.record(&addr).unwrap();
        assert_eq!(record.address, addr);
        assert_eq!(record.name, "Ema");
        assert_eq!(record.entry_time, 1_483_574_400);
        assert_eq!(record.rate, 20);

        let addresses = reg.registered_addresses();
        assert_eq!(addresses, vec![addr]);
    }

    #[test]
    fn rejects_default_address() {
        let mut reg = registry();
        let res = reg.register(Pubkey::default(), 0, "Ema".to_string(), 20);
        assert_eq!(res, Err(MemberAirdropError::InvalidAddress.into()));
        assert!(reg.registered_addresses().is_empty());
    }

    #[test]
    fn rejects_duplicate_and_keeps_first_record() {
        let mut reg = registry();
        let addr = Pubkey::new_unique();

        reg.register(addr, 100, "Ema".to_string(), 20).unwrap();
        let res = reg.register(addr, 200, "Ema2".to_string(), 200);
        assert_eq!(res, Err(MemberAirdropError::AlreadyRegistered.into()));

        // First record is untouched and the address appears exactly once
        let record = reg.record(&addr).unwrap();
        assert_eq!(record.name, "Ema");
        assert_eq!(record.rate, 20);
        assert_eq!(reg.registered_addresses().len(), 1);
    }

    #[test]
    fn rejects_oversized_name() {
        let mut reg = registry();
        let res = reg.register(
            Pubkey::new_unique(),
            0,
            "x".repeat(MAX_NAME_LEN + 1),
            20,
        );
        assert_eq!(res, Err(MemberAirdropError::NameTooLong.into()));
    }

    #[test]
    fn rejects_past_capacity() {
        let mut reg = registry();
        for i in 0..MAX_MEMBERS {
            reg.register(Pubkey::new_unique(), 0, format!("m{i}"), 1)
                .unwrap();
        }
        let res = reg.register(Pubkey::new_unique(), 0, "overflow".to_string(), 1);
        assert_eq!(res, Err(MemberAirdropError::MemberLimitReached.into()));
        assert_eq!(reg.registered_addresses().len(), MAX_MEMBERS);
    }
}

mod update_rate {
    use super::*;

    #[test]
    fn replaces_only_the_rate() {
        let mut reg = registry();
        let addr = Pubkey::new_unique();
        reg.register(addr, 100, "Ema".to_string(), 20).unwrap();

        reg.update_rate(addr, 25).unwrap();

        let record = reg.record(&addr).unwrap();
        assert_eq!(record.rate, 25);
        assert_eq!(record.name, "Ema");
        assert_eq!(record.entry_time, 100);
    }

    #[test]
    fn rejects_default_address() {
        let mut reg = registry();
        let res = reg.update_rate(Pubkey::default(), 65);
        assert_eq!(res, Err(MemberAirdropError::InvalidAddress.into()));
    }

    #[test]
    fn rejects_unregistered_address() {
        let mut reg = registry();
        let res = reg.update_rate(Pubkey::new_unique(), 55);
        assert_eq!(res, Err(MemberAirdropError::NotRegistered.into()));
    }
}

mod remove {
    use super::*;

    #[test]
    fn removes_sole_member() {
        let mut reg = registry();
        let addr = Pubkey::new_unique();
        reg.register(addr, 100, "Ema".to_string(), 20).unwrap();

        reg.deregister(addr).unwrap();

        assert!(reg.registered_addresses().is_empty());
        assert_eq!(
            reg.record(&addr),
            Err(MemberAirdropError::NotRegistered.into())
        );
    }

    #[test]
    fn swaps_last_member_into_vacated_slot() {
        let mut reg = registry();
        let addrs: Vec<Pubkey> = (0..4).map(|_| Pubkey::new_unique()).collect();
        for (i, addr) in addrs.iter().enumerate() {
            reg.register(*addr, i as i64, format!("m{i}"), 10).unwrap();
        }

        reg.deregister(addrs[1]).unwrap();

        let after = reg.registered_addresses();
        assert_eq!(after.len(), 3);
        assert!(!after.contains(&addrs[1]));
        // Former last element now occupies the removed slot
        assert_eq!(after, vec![addrs[0], addrs[3], addrs[2]]);
    }

    #[test]
    fn rejects_default_address() {
        let mut reg = registry();
        let res = reg.deregister(Pubkey::default());
        assert_eq!(res, Err(MemberAirdropError::InvalidAddress.into()));
    }

    #[test]
    fn rejects_unregistered_address() {
        let mut reg = registry();
        let res = reg.deregister(Pubkey::new_unique());
        assert_eq!(res, Err(MemberAirdropError::NotRegistered.into()));
    }

    #[test]
    fn authority_is_protected_even_when_not_registered() {
        let mut reg = registry();
        let authority = reg.authority;

        // Not registered: still ProtectedAddress, never NotRegistered
        assert_eq!(
            reg.deregister(authority),
            Err(MemberAirdropError::ProtectedAddress.into())
        );

        // Registered as a member: still ProtectedAddress
        reg.register(authority, 0, "admin".to_string(), 50).unwrap();
        assert_eq!(
            reg.deregister(authority),
            Err(MemberAirdropError::ProtectedAddress.into())
        );
        assert_eq!(reg.registered_addresses(), vec![authority]);
    }
}

mod reads {
    use super::*;

    #[test]
    fn record_rejects_default_then_unregistered() {
        let reg = registry();
        assert_eq!(
            reg.record(&Pubkey::default()),
            Err(MemberAirdropError::InvalidAddress.into())
        );
        assert_eq!(
            reg.record(&Pubkey::new_unique()),
            Err(MemberAirdropError::NotRegistered.into())
        );
    }

    #[test]
    fn record_for_returns_the_callers_own_record() {
        let mut reg = registry();
        let caller = Pubkey::new_unique();
        reg.register(Pubkey::new_unique(), 0, "other".to_string(), 5)
            .unwrap();
        reg.register(caller, 100, "Ema".to_string(), 20).unwrap();

        let record = reg.record_for(&caller).unwrap();
        assert_eq!(record.address, caller);
        assert_eq!(record.name, "Ema");

        assert_eq!(
            reg.record_for(&Pubkey::new_unique()),
            Err(MemberAirdropError::NotRegistered.into())
        );
    }
}

mod airdrop_amounts {
    use super::*;

    #[test]
    fn empty_registry_yields_empty_list() {
        assert!(registry().airdrop_amounts().is_empty());
    }

    #[test]
    fn sole_member_receives_full_rate() {
        let mut reg = registry();
        let addr = Pubkey::new_unique();
        reg.register(addr, 0, "m0".to_string(), 20).unwrap();

        assert_eq!(
            reg.airdrop_amounts(),
            vec![AirdropEntry {
                address: addr,
                amount: 20
            }]
        );
    }

    #[test]
    fn position_dilutes_the_rate() {
        let mut reg = registry();
        let addrs: Vec<Pubkey> = (0..3).map(|_| Pubkey::new_unique()).collect();
        reg.register(addrs[0], 0, "m0".to_string(), 20).unwrap();
        reg.register(addrs[1], 0, "m1".to_string(), 30).unwrap();
        reg.register(addrs[2], 0, "m2".to_string(), 30).unwrap();

        let amounts = reg.airdrop_amounts();
        assert_eq!(amounts.len(), 3);
        assert_eq!(amounts[0].amount, 20);
        assert_eq!(amounts[1].address, addrs[1]);
        assert_eq!(amounts[1].amount, 15);
        assert_eq!(amounts[2].amount, 10);
    }

    #[test]
    fn integer_division_discards_the_remainder() {
        let mut reg = registry();
        reg.register(Pubkey::new_unique(), 0, "m0".to_string(), 7)
            .unwrap();
        reg.register(Pubkey::new_unique(), 0, "m1".to_string(), 7)
            .unwrap();
        reg.register(Pubkey::new_unique(), 0, "m2".to_string(), 7)
            .unwrap();

        let amounts: Vec<u64> = reg.airdrop_amounts().iter().map(|e| e.amount).collect();
        assert_eq!(amounts, vec![7, 3, 2]);
    }

    #[test]
    fn recomputed_after_mutations() {
        let mut reg = registry();
        let addrs: Vec<Pubkey> = (0..3).map(|_| Pubkey::new_unique()).collect();
        reg.register(addrs[0], 0, "m0".to_string(), 20).unwrap();
        reg.register(addrs[1], 0, "m1".to_string(), 30).unwrap();
        reg.register(addrs[2], 0, "m2".to_string(), 60).unwrap();

        // Removal reorders the list, so entitlements shift with it
        reg.deregister(addrs[0]).unwrap();
        let amounts = reg.airdrop_amounts();
        assert_eq!(
            amounts,
            vec![
                AirdropEntry {
                    address: addrs[2],
                    amount: 60
                },
                AirdropEntry {
                    address: addrs[1],
                    amount: 15
                },
            ]
        );

        // Rate updates are visible on the next computation
        reg.update_rate(addrs[1], 40).unwrap();
        assert_eq!(reg.airdrop_amounts()[1].amount, 20);
    }
}
