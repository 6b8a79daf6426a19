use anchor_lang::prelude::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

pub mod constants;
pub mod error;
pub mod event;
pub mod instructions;
pub mod state;
pub mod utils;

#[cfg(test)]
pub mod test;

use instructions::*;
use state::{AirdropEntry, MemberRecord};

/**
 * Member Airdrop Program
 *
 * Tracks a registry of members and pays out token airdrops against a merkle
 * commitment. The program is split into two independent subsystems:
 *
 * Registry:
 * - Administrator-owned list of member records (address, name, entry time, rate)
 * - Insertion order is preserved and is semantically significant: the airdrop
 *   entitlement for the member at position i is rate / (i + 1)
 * - O(1) removal via swap-with-last (enumeration order is not stable across
 *   removals)
 *
 * Merkle Claim Engine:
 * - A distributor commits to a fixed set of (claimant, amount) pairs through a
 *   single 32-byte merkle root supplied at creation and immutable thereafter
 * - Claimants prove membership with a merkle proof; each leaf pays out at most
 *   once, enforced by a per-claimant ClaimStatus PDA
 * - Supports both SPL Token and Token 2022 vaults
 *
 * The claim engine never reads the registry at runtime. The registry's
 * entitlement view is hashed into a merkle tree off-chain (see utils::merkle
 * for the leaf and pair encoding the builder must match) and only the
 * resulting root is published on-chain.
 *
 * Workflow:
 * 1. Administrator creates a registry and manages members
 * 2. Off-chain, the entitlement list is folded into a merkle root
 * 3. Owner creates a distributor with that root and deposits the payout funds
 * 4. Members claim with merkle proofs, each exactly once
 * 5. Owner withdraws any unclaimed funds and closes the campaign
 */
#[program]
pub mod member_airdrop {
    use super::*;

    /**
     * Creates the member registry for the signing administrator
     *
     * The administrator becomes the registry authority: the only identity
     * allowed to mutate the member set, and a permanent identity that can
     * never be removed.
     *
     * Access Control: any signer (one registry per authority key)
     */
    pub fn create_registry(ctx: Context<CreateRegistry>) -> Result<()> {
        handle_create_registry(ctx)
    }

    /**
     * Registers a new member
     *
     * @param member - Address to register; must be a non-default, unregistered pubkey
     * @param entry_time - Caller-supplied timestamp, stored verbatim
     * @param name - Display label
     * @param rate - Entitlement weight used by the airdrop calculation
     *
     * Access Control: registry authority only
     */
    pub fn create_member(
        ctx: Context<MutateRegistry>,
        member: Pubkey,
        entry_time: i64,
        name: String,
        rate: u64,
    ) -> Result<()> {
        handle_create_member(ctx, member, entry_time, name, rate)
    }

    /**
     * Replaces a member's rate, leaving name and entry time untouched
     *
     * Access Control: registry authority only
     */
    pub fn update_member_rate(
        ctx: Context<MutateRegistry>,
        member: Pubkey,
        new_rate: u64,
    ) -> Result<()> {
        handle_update_member_rate(ctx, member, new_rate)
    }

    /**
     * Removes a member via swap-with-last
     *
     * The last list entry moves into the removed slot, so enumeration order
     * changes for callers of get_registered_addresses. The registry authority
     * itself can never be removed.
     *
     * Access Control: registry authority only
     */
    pub fn remove_member(ctx: Context<MutateRegistry>, member: Pubkey) -> Result<()> {
        handle_remove_member(ctx, member)
    }

    /**
     * Returns the full record for an arbitrary member
     *
     * Access Control: registry authority only
     */
    pub fn get_member(
        ctx: Context<ReadRegistryAsAuthority>,
        member: Pubkey,
    ) -> Result<MemberRecord> {
        handle_get_member(ctx, member)
    }

    /**
     * Returns the record of the signing caller
     *
     * The one self-service read: a member can inspect its own record without
     * administrator privilege.
     */
    pub fn get_current_member(ctx: Context<ReadRegistryAsMember>) -> Result<MemberRecord> {
        handle_get_current_member(ctx)
    }

    /// Returns the registered addresses in current list order.
    pub fn get_registered_addresses(ctx: Context<ReadRegistry>) -> Result<Vec<Pubkey>> {
        handle_get_registered_addresses(ctx)
    }

    /**
     * Computes the airdrop entitlement list
     *
     * One entry per registered member in list order; the amount at position i
     * is rate / (i + 1) with integer division. Recomputed from scratch on
     * every call, never cached.
     *
     * Access Control: registry authority only
     */
    pub fn get_airdrop_amounts(ctx: Context<ReadRegistryAsAuthority>) -> Result<Vec<AirdropEntry>> {
        handle_get_airdrop_amounts(ctx)
    }

    /**
     * Creates a new distributor committed to a fixed merkle root
     *
     * Initializes the distributor and its token vault, deposits the payout
     * funds from the owner, and stores the merkle root. The root cannot be
     * changed afterwards; a new campaign requires a new distributor (nonce
     * numbers are assigned automatically per owner).
     *
     * @param initial_total_amount - Tokens deposited into the vault
     * @param merkle_root - 32-byte root committing to all (claimant, amount) pairs; must not be all zeros
     *
     * Access Control: owner only
     */
    pub fn create_distributor(
        ctx: Context<CreateDistributor>,
        initial_total_amount: u64,
        merkle_root: [u8; 32],
    ) -> Result<()> {
        handle_create_distributor(ctx, initial_total_amount, merkle_root)
    }

    /**
     * Checks whether a (claimant, amount) pair is part of the commitment
     *
     * Read-only. Returns false for any non-matching address, amount or proof;
     * never errors on well-formed input and never touches claim state. Prior
     * claims do not affect the result.
     */
    pub fn can_claim(ctx: Context<CanClaim>, amount: u64, proof: Vec<[u8; 32]>) -> Result<bool> {
        handle_can_claim(ctx, amount, proof)
    }

    /**
     * Claims an airdrop entitlement with merkle proof verification
     *
     * Verifies the proof for (claimant, amount) against the stored root, then
     * enforces at-most-once payout per claimant before transferring from the
     * vault. An invalid proof is always reported as InvalidProof, even when
     * the leaf was already claimed.
     *
     * @param amount - Committed amount for the signing claimant
     * @param proof - Sibling hashes from leaf to root
     *
     * Access Control: any claimant with a valid merkle proof
     */
    pub fn claim(ctx: Context<Claim>, amount: u64, proof: Vec<[u8; 32]>) -> Result<()> {
        handle_claim(ctx, amount, proof)
    }

    /**
     * Withdraws remaining tokens and closes the campaign
     *
     * Sweeps the vault balance back to the owner and closes the vault and
     * distributor accounts, reclaiming rent. No further claims are possible
     * afterwards.
     *
     * Access Control: owner only
     */
    pub fn withdraw(ctx: Context<Withdraw>) -> Result<()> {
        handle_withdraw(ctx)
    }
}
