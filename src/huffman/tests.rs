use super::*;
use crate::frequency::{count_frequencies, total_words};
use crate::perf_and_test_utils::gen_text;

use proptest::prelude::*;

fn is_prefix_free(codes: &CodeTable) -> bool {
    codes.values().all(|a| {
        codes
            .values()
            .filter(|&b| !std::ptr::eq(a, b))
            .all(|b| !b.starts_with(a.as_str()))
    })
}

fn check_internal_freqs(tree: &HuffmanTree) -> u64 {
    match tree {
        HuffmanTree::Leaf { freq, .. } => *freq,
        HuffmanTree::Internal { freq, left, right } => {
            let sum = check_internal_freqs(left) + check_internal_freqs(right);
            assert_eq!(*freq, sum);
            sum
        }
    }
}

#[test]
fn test_small() {
    let tree = HuffmanTree::build(&count_frequencies("a a a b b c")).unwrap();

    let expected = HuffmanTree::internal_node(
        HuffmanTree::leaf("a", 3),
        HuffmanTree::internal_node(HuffmanTree::leaf("c", 1), HuffmanTree::leaf("b", 2)).unwrap(),
    )
    .unwrap();
    assert_eq!(tree, expected);
    assert_eq!(tree.freq(), 6);
    assert_eq!(tree.depth(), 2);
    assert_eq!(tree.encoded_len(), 9);

    let codes = tree.codebook();
    let pairs: Vec<(&str, &str)> = codes
        .iter()
        .map(|(w, c)| (w.as_str(), c.as_str()))
        .collect();
    assert_eq!(pairs, vec![("a", "0"), ("b", "11"), ("c", "10")]);
}

#[test]
fn test_single_word() {
    let tree = HuffmanTree::build(&count_frequencies("echo echo echo")).unwrap();

    assert!(tree.is_leaf());
    assert_eq!(tree.depth(), 0);
    assert_eq!(tree.leaves(), vec![("echo", 3)]);
    assert_eq!(tree.encoded_len(), 3);

    let codes = tree.codebook();
    assert_eq!(codes.len(), 1);
    assert_eq!(codes["echo"], "0");
}

#[test]
fn test_empty() {
    let res = HuffmanTree::build(&FreqTable::new());
    assert!(matches!(res, Err(HuffmanError::EmptyFrequencyTable)));

    let res = HuffmanTree::build(&count_frequencies("   \n\t"));
    assert!(matches!(res, Err(HuffmanError::EmptyFrequencyTable)));
}

#[test]
fn test_frequency_overflow() {
    let freqs = FreqTable::from([(String::from("a"), u64::MAX), (String::from("b"), 1)]);
    let res = HuffmanTree::build(&freqs);
    assert!(matches!(res, Err(HuffmanError::FrequencyOverflow)));

    let res = HuffmanTree::internal_node(
        HuffmanTree::leaf("a", u64::MAX - 1),
        HuffmanTree::leaf("b", 2),
    );
    assert!(matches!(res, Err(HuffmanError::FrequencyOverflow)));

    // the total fits exactly
    let freqs = FreqTable::from([(String::from("a"), u64::MAX - 1), (String::from("b"), 1)]);
    let tree = HuffmanTree::build(&freqs).unwrap();
    assert_eq!(tree.freq(), u64::MAX);
    assert_eq!(tree.encoded_len(), u64::MAX);

    let tree = HuffmanTree::build(&FreqTable::from([
        (String::from("a"), u64::MAX / 2),
        (String::from("b"), u64::MAX / 4),
        (String::from("c"), u64::MAX / 4),
    ]))
    .unwrap();
    // the weighted length does not fit and saturates
    assert_eq!(tree.encoded_len(), u64::MAX);
}

#[test]
fn test_equal_frequencies() {
    // all ties: merges follow seeding order first, then creation order
    let tree = HuffmanTree::build(&count_frequencies("d c b a")).unwrap();
    let codes = tree.codebook();

    assert_eq!(codes["a"], "00");
    assert_eq!(codes["b"], "01");
    assert_eq!(codes["c"], "10");
    assert_eq!(codes["d"], "11");

    // a leaf seeded before an equally heavy merged node is popped first
    let tree = HuffmanTree::build(&count_frequencies("x x y z")).unwrap();
    assert_eq!(tree.codebook()["x"], "0");
}

#[test]
fn test_determinism() {
    for (n_words, vocabulary) in [(50, 5), (500, 60), (5000, 400)] {
        let freqs = count_frequencies(&gen_text(n_words, vocabulary));

        let tree = HuffmanTree::build(&freqs).unwrap();
        let codes = tree.codebook();
        for _ in 0..3 {
            let again = HuffmanTree::build(&freqs).unwrap();
            assert_eq!(again, tree);
            assert_eq!(again.codebook(), codes);
        }
    }
}

#[test]
fn test_build_and_codebook() {
    let text = gen_text(2000, 120);
    let freqs = count_frequencies(&text);
    let tree = HuffmanTree::build(&freqs).unwrap();
    let codes = tree.codebook();

    assert_eq!(tree.freq(), total_words(&freqs));
    assert_eq!(check_internal_freqs(&tree), 2000);
    assert!(is_prefix_free(&codes));
    assert_eq!(codes.len(), freqs.len());

    let expected_len: u64 = freqs
        .iter()
        .map(|(word, &freq)| freq * codes[word].len() as u64)
        .sum();
    assert_eq!(tree.encoded_len(), expected_len);
}

#[test]
fn test_serde() {
    let tree = HuffmanTree::build(&count_frequencies("to be or not to be")).unwrap();

    let serialized = bincode::serialize(&tree).unwrap();
    let deserialized = bincode::deserialize::<HuffmanTree>(&serialized).unwrap();

    assert_eq!(tree, deserialized);
}

fn freq_tables() -> impl Strategy<Value = FreqTable> {
    proptest::collection::btree_map("[a-zA-Z,.]{1,8}", 1u64..1000, 1..64)
}

proptest! {
    #[test]
    fn proptest_prefix_code(freqs in freq_tables()) {
        let codes = HuffmanTree::build(&freqs).unwrap().codebook();

        prop_assert!(codes.values().all(|c| !c.is_empty() && c.chars().all(|b| b == '0' || b == '1')));
        if freqs.len() == 1 {
            prop_assert!(codes.values().all(|c| c == "0"));
        } else {
            prop_assert!(is_prefix_free(&codes));
        }
    }

    #[test]
    fn proptest_bijection(freqs in freq_tables()) {
        let tree = HuffmanTree::build(&freqs).unwrap();
        let codes = tree.codebook();

        prop_assert!(codes.keys().eq(freqs.keys()));

        let mut leaves: Vec<(String, u64)> = tree
            .leaves()
            .into_iter()
            .map(|(w, f)| (w.to_owned(), f))
            .collect();
        leaves.sort();
        let expected: Vec<(String, u64)> = freqs.into_iter().collect();
        prop_assert_eq!(leaves, expected);
    }

    #[test]
    fn proptest_internal_freqs(freqs in freq_tables()) {
        let tree = HuffmanTree::build(&freqs).unwrap();
        prop_assert_eq!(check_internal_freqs(&tree), total_words(&freqs));
    }

    #[test]
    fn proptest_not_worse_than_fixed_length(freqs in freq_tables()) {
        let tree = HuffmanTree::build(&freqs).unwrap();

        let n = freqs.len() as u64;
        let fixed_bits = (64 - (n - 1).leading_zeros()).max(1) as u64;
        prop_assert!(tree.encoded_len() <= fixed_bits * total_words(&freqs));
    }
}
