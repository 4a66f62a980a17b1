use super::*;
use crate::perf_and_test_utils::gen_text;

#[test]
fn test_encode_block() {
    let encoded = encode_block("  a a a b b c \n", CompressPolicy::Lenient)
        .unwrap()
        .unwrap();

    assert_eq!(encoded.text, "a a a b b c");
    assert_eq!(encoded.tree.freq(), 6);
    assert_eq!(encoded.codes.len(), 3);
    assert_eq!(encoded.compressed, "000111110");
    assert_eq!(
        encoded.tree.serialize(),
        "I 6 L a 3 # # I 3 L c 1 # # L b 2 # # "
    );
}

#[test]
fn test_encode_empty_block() {
    for text in ["", "   ", "\n\t\r\n"] {
        for policy in [CompressPolicy::Lenient, CompressPolicy::Strict] {
            assert_eq!(encode_block(text, policy).unwrap(), None);
        }
    }
}

#[test]
fn test_encode_single_word() {
    let encoded = encode_block("hey hey hey hey", CompressPolicy::Strict)
        .unwrap()
        .unwrap();

    assert_eq!(encoded.codes.len(), 1);
    assert_eq!(encoded.codes["hey"], "0");
    assert_eq!(encoded.compressed, "0000");
    assert_eq!(encoded.tree.serialize(), "L hey 4 # # ");
}

#[test]
fn test_encode_random_blocks() {
    for (n_words, vocabulary) in [(20, 4), (400, 50), (4000, 700)] {
        let text = gen_text(n_words, vocabulary);
        let lenient = encode_block(&text, CompressPolicy::Lenient)
            .unwrap()
            .unwrap();
        let strict = encode_block(&text, CompressPolicy::Strict)
            .unwrap()
            .unwrap();

        // codes built from the text cover every word, so policies agree
        assert_eq!(lenient, strict);
        assert_eq!(
            HuffmanTree::deserialize(&lenient.tree.serialize()).unwrap(),
            lenient.tree
        );
        assert_eq!(lenient.compressed.len() as u64, lenient.tree.encoded_len());
    }
}

#[test]
fn test_errors() {
    use std::error::Error;

    let err = HuffmanError::UnknownWord(String::from("zebra"));
    assert_eq!(err.to_string(), "word `zebra` has no Huffman code");
    assert!(err.source().is_none());

    let err = HuffmanError::from(std::io::Error::new(std::io::ErrorKind::Other, "disk full"));
    assert_eq!(err.to_string(), "io error: disk full");
    assert!(err.source().is_some());

    assert_eq!(
        HuffmanError::MalformedTree(String::from("bad marker")).to_string(),
        "malformed serialized tree: bad marker"
    );
}

#[test]
fn test_encode_block_separators() {
    // U+00A0 is part of a word, ASCII whitespace is not
    let encoded = encode_block("\x0B\u{a0} a\u{a0}b\u{a0}\r\n", CompressPolicy::Strict)
        .unwrap()
        .unwrap();

    assert_eq!(encoded.text, "\u{a0} a\u{a0}b\u{a0}");
    assert_eq!(encoded.codes.len(), 2);
    assert!(encoded.codes.contains_key("a\u{a0}b\u{a0}"));
}
