use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::MemberAirdropError;

/**
 * Member registry account
 *
 * Holds the member records of a single administrator ("authority") as an
 * insertion-ordered vector. The vector doubles as the registered-address
 * list: position in it determines the airdrop entitlement, and removal uses
 * swap-with-last, so enumeration order is not stable across removals.
 *
 * Derivation: ["registry", authority]
 *
 * The authority is a permanent identity: it never occupies a list slot, but
 * it can never be removed either (remove_member rejects it before the
 * existence check, so the protection holds whether or not the authority was
 * also registered as a member).
 */
#[account]
#[derive(Default, Debug)]
pub struct Registry {
    /// Bump seed for PDA derivation
    pub bump: u8,

    /// Administrator of this registry
    /// - The only identity allowed to mutate the member set
    pub authority: Pubkey,

    /// Member records in insertion order
    /// - At most MAX_MEMBERS entries; capacity is fixed at account creation
    pub members: Vec<MemberRecord>,
}

/// One registered member.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct MemberRecord {
    /// Unique member address, immutable once set
    pub address: Pubkey,
    /// Display label, at most MAX_NAME_LEN bytes
    pub name: String,
    /// Timestamp supplied at registration, stored verbatim
    pub entry_time: i64,
    /// Entitlement weight, the only mutable field
    pub rate: u64,
}

/// Derived (address, amount) pair of the entitlement view. Never persisted.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct AirdropEntry {
    pub address: Pubkey,
    pub amount: u64,
}

impl MemberRecord {
    /// Serialized size of one record with the name at full capacity
    pub const SPACE: usize = 32 + (4 + MAX_NAME_LEN) + 8 + 8;
}

impl Registry {
    /// Account space: discriminator + bump + authority + vec at full capacity
    pub const SPACE: usize = 8 + 1 + 32 + (4 + MAX_MEMBERS * MemberRecord::SPACE);

    fn position_of(&self, address: &Pubkey) -> Option<usize> {
        self.members.iter().position(|m| m.address == *address)
    }

    fn require_valid(address: &Pubkey) -> Result<()> {
        require!(
            *address != Pubkey::default(),
            MemberAirdropError::InvalidAddress
        );
        Ok(())
    }

    /// Appends a new member record. The address must be non-default and not
    /// yet registered.
    pub fn register(
        &mut self,
        address: Pubkey,
        entry_time: i64,
        name: String,
        rate: u64,
    ) -> Result<()> {
        Self::require_valid(&address)?;
        require!(
            self.position_of(&address).is_none(),
            MemberAirdropError::AlreadyRegistered
        );
        require!(
            name.len() <= MAX_NAME_LEN,
            MemberAirdropError::NameTooLong
        );
        require!(
            self.members.len() < MAX_MEMBERS,
            MemberAirdropError::MemberLimitReached
        );

        self.members.push(MemberRecord {
            address,
            name,
            entry_time,
            rate,
        });
        Ok(())
    }

    /// Replaces the rate of an existing member. Name and entry time are left
    /// untouched.
    pub fn update_rate(&mut self, address: Pubkey, new_rate: u64) -> Result<()> {
        Self::require_valid(&address)?;
        let index = self
            .position_of(&address)
            .ok_or(MemberAirdropError::NotRegistered)?;
        self.members[index].rate = new_rate;
        Ok(())
    }

    /// Removes a member by swapping the last record into its slot and
    /// truncating. The authority is rejected before the existence check so
    /// removing it always reports ProtectedAddress.
    pub fn deregister(&mut self, address: Pubkey) -> Result<()> {
        Self::require_valid(&address)?;
        require!(
            address != self.authority,
            MemberAirdropError::ProtectedAddress
        );
        let index = self
            .position_of(&address)
            .ok_or(MemberAirdropError::NotRegistered)?;
        self.members.swap_remove(index);
        Ok(())
    }

    /// Looks up the record for an arbitrary address.
    pub fn record(&self, address: &Pubkey) -> Result<MemberRecord> {
        Self::require_valid(address)?;
        self.position_of(address)
            .map(|i| self.members[i].clone())
            .ok_or_else(|| MemberAirdropError::NotRegistered.into())
    }

    /// Looks up the record of a caller acting on its own behalf. The caller
    /// key is a real signer, so only registration is checked.
    pub fn record_for(&self, caller: &Pubkey) -> Result<MemberRecord> {
        self.position_of(caller)
            .map(|i| self.members[i].clone())
            .ok_or_else(|| MemberAirdropError::NotRegistered.into())
    }

    /// Current address list, reflecting swap-remove history.
    pub fn registered_addresses(&self) -> Vec<Pubkey> {
        self.members.iter().map(|m| m.address).collect()
    }

    /**
     * Computes the entitlement view
     *
     * The member at list position i is entitled to rate / (i + 1), integer
     * division, remainder discarded: earlier registrants receive their full
     * declared rate, later ones a diminishing share. Always recomputed from
     * the live member list.
     */
    pub fn airdrop_amounts(&self) -> Vec<AirdropEntry> {
        self.members
            .iter()
            .enumerate()
            .map(|(i, m)| AirdropEntry {
                address: m.address,
                amount: m.rate / (i as u64 + 1),
            })
            .collect()
    }
}
