#[cfg(test)]
mod tests {
    use base64::{engine::general_purpose::STANDARD, Engine as _};
    use proptest::prelude::*;
    use ninek_core::base64::{decode, decode_with, encode, encoded_len, strip_whitespace, DecodeMode};

    // --- Scenarios ---

    #[test]
    fn test_hi_round_trip() {
        assert_eq!(encode(b"Hi"), "SGk=");
        assert_eq!(decode("SGk="), b"Hi");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(encode(b""), "");
        assert!(decode("").is_empty());
    }

    #[test]
    fn test_all_byte_values_match_reference() {
        let data: Vec<u8> = (0..=255u8).collect();
        assert_eq!(encode(&data), STANDARD.encode(&data));
    }

    #[test]
    fn test_wrapped_text_decodes_after_stripping() {
        let data = b"{\"slots\":[1,2,3],\"name\":\"hero\"}";
        let wrapped: String = encode(data)
            .as_bytes()
            .chunks(8)
            .map(|line| format!("  {}\r\n", std::str::from_utf8(line).unwrap()))
            .collect();
        assert_eq!(decode(&strip_whitespace(&wrapped)), data);
    }

    // --- Properties ---

    proptest! {
        #[test]
        fn prop_round_trip(data in proptest::collection::vec(any::<u8>(), 0..1024)) {
            prop_assert_eq!(decode(&encode(&data)), data.clone());
            prop_assert_eq!(decode_with(&encode(&data), DecodeMode::Strict).unwrap(), data);
        }

        #[test]
        fn prop_matches_reference_encoder(data in proptest::collection::vec(any::<u8>(), 0..1024)) {
            prop_assert_eq!(encode(&data), STANDARD.encode(&data));
        }

        #[test]
        fn prop_length_and_padding(data in proptest::collection::vec(any::<u8>(), 0..512)) {
            let text = encode(&data);
            prop_assert_eq!(text.len(), 4 * data.len().div_ceil(3));
            prop_assert_eq!(text.len(), encoded_len(data.len()));
            prop_assert_eq!(text.len() % 4, 0);
            match data.len() % 3 {
                1 => prop_assert!(text.ends_with("==")),
                2 => prop_assert!(text.ends_with('=') && !text.ends_with("==")),
                _ => prop_assert!(!text.ends_with('=')),
            }
        }

        #[test]
        fn prop_whitespace_tolerance(
            data in proptest::collection::vec(any::<u8>(), 1..256),
            gaps in proptest::collection::vec((any::<prop::sample::Index>(), prop::sample::select(vec![' ', '\t', '\n', '\r', '\x0b', '\x0c'])), 0..32),
        ) {
            let mut text = encode(&data);
            for (at, ws) in gaps {
                let pos = at.index(text.len() + 1);
                text.insert(pos, ws);
            }
            prop_assert_eq!(decode(&strip_whitespace(&text)), data);
        }
    }
}
