use anchor_lang::solana_program::hash::hashv;
use anchor_lang::solana_program::pubkey::Pubkey;

/**
 * Merkle commitment scheme, version 1
 *
 * The off-chain tree builder must reproduce this encoding bit-for-bit or no
 * proof will verify:
 *
 * - Leaf: sha256(claimant_pubkey (32 bytes) || amount as u64 big-endian)
 * - Pair: children sorted ascending by byte value, then sha256(min || max).
 *   Sorting removes the need to record left/right positions in proofs.
 * - An odd node at the end of a level is paired with itself.
 *
 * Any change to this layout breaks every existing commitment and must be
 * treated as a new scheme version.
 */

/// Hashes one committed (claimant, amount) pair into a leaf.
pub fn hash_leaf(claimant: &Pubkey, amount: u64) -> [u8; 32] {
    hashv(&[&claimant.to_bytes(), &amount.to_be_bytes()]).to_bytes()
}

/// Combines two sibling hashes, smaller child first.
pub fn hash_pair(a: &[u8; 32], b: &[u8; 32]) -> [u8; 32] {
    if a <= b {
        hashv(&[a, b]).to_bytes()
    } else {
        hashv(&[b, a]).to_bytes()
    }
}

/// Folds a proof (sibling hashes, leaf level first) over a candidate leaf and
/// compares the result to the root. An empty proof matches only a single-leaf
/// tree whose root is the leaf itself.
pub fn verify(proof: &[[u8; 32]], root: [u8; 32], leaf: [u8; 32]) -> bool {
    let mut computed = leaf;
    for sibling in proof {
        computed = hash_pair(&computed, sibling);
    }
    computed == root
}
