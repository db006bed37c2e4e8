//! Merkle Proof Verification
//!
//! Verifies allowlist membership proofs against a committed root.
//!
//! Internal nodes are combined with a *commutative* pair hash: the two
//! operands are sorted bytewise before hashing, so proofs carry no
//! left/right position bits. Construction of trees and proofs is out of
//! scope for the engine; only verification is provided (test support
//! builds trees with the same pair hash).

use sha2::{Digest, Sha256};

use crate::core::hash::{Hash256, MERKLE_NODE_DOMAIN};

/// Combine two nodes with a commutative, domain-separated hash.
///
/// The operands are sorted bytewise, so `hash_pair(a, b) == hash_pair(b, a)`.
pub fn hash_pair(a: &Hash256, b: &Hash256) -> Hash256 {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };

    let mut hasher = Sha256::new();
    hasher.update(MERKLE_NODE_DOMAIN);
    hasher.update(lo);
    hasher.update(hi);
    hasher.finalize().into()
}

/// Verify a Merkle inclusion proof against a root hash.
///
/// Walks the proof from the leaf upward, combining the running hash with
/// each sibling. Deterministic, no side effects. A proof of the wrong
/// length simply fails to reproduce the root and is reported as no match.
///
/// The absent-root case (allowlist disabled) is represented by `Option`
/// at the condition level; callers never pass a sentinel here.
pub fn verify(proof: &[Hash256], root: &Hash256, leaf: &Hash256) -> bool {
    let mut current = *leaf;

    for sibling in proof {
        current = hash_pair(&current, sibling);
    }

    current == *root
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::hash::hash_with_domain;

    fn leaf(n: u8) -> Hash256 {
        hash_with_domain(b"test_leaf", &[n])
    }

    #[test]
    fn test_pair_hash_commutative() {
        let a = leaf(1);
        let b = leaf(2);

        assert_eq!(hash_pair(&a, &b), hash_pair(&b, &a));
    }

    #[test]
    fn test_pair_hash_distinct_inputs() {
        let a = leaf(1);
        let b = leaf(2);
        let c = leaf(3);

        assert_ne!(hash_pair(&a, &b), hash_pair(&a, &c));
    }

    #[test]
    fn test_verify_four_leaf_tree() {
        // Manual 4-leaf tree:
        //        root
        //       /    \
        //     n01    n23
        //    /  \   /  \
        //   l0  l1 l2  l3
        let leaves = [leaf(0), leaf(1), leaf(2), leaf(3)];
        let n01 = hash_pair(&leaves[0], &leaves[1]);
        let n23 = hash_pair(&leaves[2], &leaves[3]);
        let root = hash_pair(&n01, &n23);

        assert!(verify(&[leaves[1], n23], &root, &leaves[0]));
        assert!(verify(&[leaves[0], n23], &root, &leaves[1]));
        assert!(verify(&[leaves[3], n01], &root, &leaves[2]));
        assert!(verify(&[leaves[2], n01], &root, &leaves[3]));
    }

    #[test]
    fn test_verify_wrong_leaf_fails() {
        let leaves = [leaf(0), leaf(1)];
        let root = hash_pair(&leaves[0], &leaves[1]);

        assert!(verify(&[leaves[1]], &root, &leaves[0]));
        assert!(!verify(&[leaves[1]], &root, &leaf(9)));
    }

    #[test]
    fn test_verify_wrong_root_fails() {
        let leaves = [leaf(0), leaf(1)];
        let root = hash_pair(&leaves[0], &leaves[1]);
        let mut tampered = root;
        tampered[0] ^= 0xff;

        assert!(!verify(&[leaves[1]], &tampered, &leaves[0]));
    }

    #[test]
    fn test_verify_single_leaf_empty_proof() {
        // A one-leaf tree commits to the leaf itself.
        let l = leaf(5);
        assert!(verify(&[], &l, &l));
        assert!(!verify(&[], &l, &leaf(6)));
    }

    #[test]
    fn test_verify_wrong_length_proof_fails() {
        let leaves = [leaf(0), leaf(1)];
        let root = hash_pair(&leaves[0], &leaves[1]);

        // Too short and too long both fail as "no match".
        assert!(!verify(&[], &root, &leaves[0]));
        assert!(!verify(&[leaves[1], leaves[1]], &root, &leaves[0]));
    }
}
