use merkle_whitelist::{
    verify, verify_leaf_hash, Digest, HashMethod, MalformedProof, MerkleError, MerkleTree, Proof,
    ProofStep, Sha256Hash, TreeOptions,
};
use proptest::prelude::*;

const EMAILS: [&str; 3] = [
    "email1@example.com",
    "email2@example.com",
    "email3@example.com",
];

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn sha256_tree(items: &[Vec<u8>], options: TreeOptions) -> MerkleTree<Sha256Hash> {
    MerkleTree::build(items, Sha256Hash::new(), options).expect("non-empty input")
}

#[test]
fn email_whitelist_scenario() -> anyhow::Result<()> {
    init_logger();
    let options = TreeOptions::sorted();
    let hasher = Sha256Hash::new();
    let tree = MerkleTree::build(&EMAILS, hasher, options)?;

    assert_eq!(tree.leaf_count(), 3);
    assert_eq!(tree.layers()[0].len(), 4);
    assert_eq!(tree.height(), 2);

    let proof = tree.proof(b"email2@example.com")?;
    assert_eq!(proof.len(), 2);
    assert!(verify(b"email2@example.com", &proof, tree.root(), &hasher, &options)?);

    let other = MerkleTree::build(
        &["email4@example.com", "email5@example.com"],
        Sha256Hash::new(),
        options,
    )?;
    assert!(!verify(b"email2@example.com", &proof, other.root(), &hasher, &options)?);

    assert_eq!(
        tree.proof(b"intruder@example.com").unwrap_err(),
        MerkleError::NotFound
    );
    Ok(())
}

#[test]
fn padding_matches_manual_duplication() -> anyhow::Result<()> {
    let hasher = Sha256Hash::new();
    let options = TreeOptions::sorted();
    let tree = MerkleTree::build(&EMAILS, hasher, options)?;

    let [a, b, c] = EMAILS.map(|email| hasher.hash(email.as_bytes()));
    let sorted_pair = |x: &Digest, y: &Digest| {
        if x <= y {
            hasher.hash_nodes(x, y)
        } else {
            hasher.hash_nodes(y, x)
        }
    };
    let expected = sorted_pair(&sorted_pair(&a, &b), &sorted_pair(&c, &c));
    assert_eq!(tree.root(), &expected);
    Ok(())
}

#[test]
fn verifier_needs_only_the_root() -> anyhow::Result<()> {
    let options = TreeOptions::default();
    let (root_hex, encoded) = {
        let tree = MerkleTree::build(&EMAILS, Sha256Hash::new(), options)?;
        let proof = tree.proof(b"email3@example.com")?;
        (tree.root_hex(), proof.to_hex_steps())
    };

    // The tree is gone; only hex strings cross the boundary.
    let root: Digest = root_hex.parse()?;
    let proof = Proof::from_hex_steps(&encoded, 32)?;
    assert!(proof.verify(b"email3@example.com", &root, &Sha256Hash::new(), &options)?);
    assert!(!proof.verify(b"email1@example.com", &root, &Sha256Hash::new(), &options)?);
    Ok(())
}

#[test]
fn sorted_pairs_ignore_sibling_order() {
    let swapped = [EMAILS[1], EMAILS[0], EMAILS[2]];

    let sorted = TreeOptions::sorted();
    let a = MerkleTree::build(&EMAILS, Sha256Hash::new(), sorted).unwrap();
    let b = MerkleTree::build(&swapped, Sha256Hash::new(), sorted).unwrap();
    assert_eq!(a.root(), b.root());

    let positional = TreeOptions::default();
    let a = MerkleTree::build(&EMAILS, Sha256Hash::new(), positional).unwrap();
    let b = MerkleTree::build(&swapped, Sha256Hash::new(), positional).unwrap();
    assert_ne!(a.root(), b.root());
}

#[test]
fn proof_recomputes_the_published_root() {
    let hasher = Sha256Hash::new();
    for options in [TreeOptions::default(), TreeOptions::sorted()] {
        let tree = MerkleTree::build(&EMAILS, hasher, options).unwrap();
        for email in EMAILS {
            let proof = tree.proof(email.as_bytes()).unwrap();
            let leaf = hasher.hash(email.as_bytes());
            assert_eq!(&proof.compute_root(&leaf, &hasher, &options).unwrap(), tree.root());
        }
    }
}

#[test]
fn truncated_sibling_is_reported_not_rejected() {
    let hasher = Sha256Hash::new();
    let tree = MerkleTree::build(&EMAILS, hasher, TreeOptions::sorted()).unwrap();
    let proof = tree.proof(b"email1@example.com").unwrap();

    let mut steps = proof.into_steps();
    let short = Digest::from(&steps[1].sibling[..16]);
    steps[1] = ProofStep::sorted(short);

    let err = verify(
        b"email1@example.com",
        &Proof::new(steps),
        tree.root(),
        &hasher,
        &TreeOptions::sorted(),
    )
    .unwrap_err();
    assert_eq!(
        err,
        MerkleError::MalformedProof(MalformedProof::SiblingLength {
            step: 1,
            expected: 32,
            actual: 16,
        })
    );
}

#[test]
fn empty_input_is_rejected() {
    let items: [&str; 0] = [];
    let err = MerkleTree::build(&items, Sha256Hash::new(), TreeOptions::default()).unwrap_err();
    assert_eq!(err, MerkleError::EmptyInput);
}

fn items_strategy() -> impl Strategy<Value = Vec<Vec<u8>>> {
    prop::collection::vec(prop::collection::vec(any::<u8>(), 0..40), 1..40)
}

proptest! {
    #[test]
    fn building_twice_gives_the_same_root(items in items_strategy(), sort_pairs in any::<bool>()) {
        let options = TreeOptions::default().with_sort_pairs(sort_pairs);
        let first = sha256_tree(&items, options);
        let second = sha256_tree(&items, options);
        prop_assert_eq!(first.root(), second.root());
    }

    #[test]
    fn every_member_verifies(items in items_strategy(), sort_pairs in any::<bool>()) {
        let options = TreeOptions::default().with_sort_pairs(sort_pairs);
        let tree = sha256_tree(&items, options);
        let hasher = Sha256Hash::new();

        for item in &items {
            let proof = tree.proof(item).unwrap();
            prop_assert_eq!(proof.len(), tree.height());
            prop_assert!(verify(item, &proof, tree.root(), &hasher, &options).unwrap());
        }
    }

    #[test]
    fn borrowed_proof_does_not_admit_outsider(items in items_strategy(), outsider in prop::collection::vec(any::<u8>(), 40..60)) {
        // Outsiders are longer than any member, so they cannot collide by construction.
        let options = TreeOptions::sorted();
        let tree = sha256_tree(&items, options);
        let hasher = Sha256Hash::new();

        let borrowed = tree.proof(&items[0]).unwrap();
        prop_assert!(!verify(&outsider, &borrowed, tree.root(), &hasher, &options).unwrap());
    }

    #[test]
    fn any_flipped_byte_fails(
        items in prop::collection::vec(prop::collection::vec(any::<u8>(), 1..20), 2..20),
        pick in any::<prop::sample::Index>(),
        byte in 0usize..32,
        bit in 0u8..8,
        sort_pairs in any::<bool>(),
    ) {
        let options = TreeOptions::default().with_sort_pairs(sort_pairs);
        let tree = sha256_tree(&items, options);
        let hasher = Sha256Hash::new();
        let member = &items[0];
        let leaf = hasher.hash(member);
        let proof = tree.proof(member).unwrap();

        // Tamper with one sibling
        let mut steps = proof.clone().into_steps();
        let step = pick.index(steps.len());
        let mut bytes = steps[step].sibling.to_vec();
        bytes[byte] ^= 1 << bit;
        steps[step].sibling = Digest::from(bytes);
        let tampered = Proof::new(steps);
        prop_assert!(!verify_leaf_hash(&leaf, &tampered, tree.root(), &hasher, &options).unwrap());

        // Tamper with the root
        let mut root = tree.root().to_vec();
        root[byte] ^= 1 << bit;
        prop_assert!(!verify_leaf_hash(&leaf, &proof, &Digest::from(root), &hasher, &options).unwrap());
    }
}
