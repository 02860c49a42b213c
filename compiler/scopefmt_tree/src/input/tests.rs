use super::*;

mod str_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn read_borrows() {
        let text = "let a = 1";
        assert!(matches!(text.read(4, 5), Ok(Cow::Borrowed("a"))));
        assert_eq!(text.read(0, 0).unwrap(), "");
        assert_eq!(text.read(0, 9).unwrap(), "let a = 1");
    }

    #[test]
    fn read_rejects_bad_ranges() {
        let text = "abc";
        assert_eq!(
            text.read(2, 1),
            Err(InputError::Reversed { from: 2, to: 1 })
        );
        assert_eq!(
            text.read(1, 4),
            Err(InputError::OutOfRange {
                from: 1,
                to: 4,
                len: 3
            })
        );
    }

    #[test]
    fn read_rejects_split_characters() {
        let text = "aé";
        assert_eq!(
            text.read(0, 2),
            Err(InputError::NotCharBoundary { from: 0, to: 2 })
        );
        assert_eq!(text.read(1, 3).unwrap(), "é");
    }

    #[test]
    fn byte_at() {
        let text = String::from("a\n b");
        assert_eq!(text.byte_at(1), Some(b'\n'));
        assert_eq!(text.byte_at(2), Some(b' '));
        assert_eq!(text.byte_at(4), None);
    }
}

mod chunked_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> ChunkedInput {
        ChunkedInput::new(["let a", "", " = ", "1;\n"])
    }

    #[test]
    fn empty_chunks_are_dropped() {
        let input = sample();
        assert_eq!(input.chunks().collect::<Vec<_>>(), vec!["let a", " = ", "1;\n"]);
        assert_eq!(input.len(), 11);
        assert!(!input.is_empty());
        assert!(ChunkedInput::default().is_empty());
    }

    #[test]
    fn read_within_one_chunk_borrows() {
        let input = sample();
        assert!(matches!(input.read(0, 3), Ok(Cow::Borrowed("let"))));
        assert!(matches!(input.read(6, 7), Ok(Cow::Borrowed("="))));
    }

    #[test]
    fn read_across_chunks() {
        let input = sample();
        let text = input.read(4, 9).unwrap();
        assert!(matches!(text, Cow::Owned(_)));
        assert_eq!(text, "a = 1");
        assert_eq!(input.read(0, 11).unwrap(), "let a = 1;\n");
    }

    #[test]
    fn read_at_chunk_edges() {
        let input = sample();
        assert_eq!(input.read(5, 8).unwrap(), " = ");
        assert_eq!(input.read(5, 5).unwrap(), "");
        assert_eq!(input.read(11, 11).unwrap(), "");
    }

    #[test]
    fn read_rejects_bad_ranges() {
        let input = sample();
        assert_eq!(
            input.read(3, 12),
            Err(InputError::OutOfRange {
                from: 3,
                to: 12,
                len: 11
            })
        );
        assert_eq!(
            input.read(4, 2),
            Err(InputError::Reversed { from: 4, to: 2 })
        );
    }

    #[test]
    fn read_rejects_split_characters_across_chunks() {
        let input = ChunkedInput::new(["a", "é"]);
        assert_eq!(
            input.read(0, 2),
            Err(InputError::NotCharBoundary { from: 0, to: 2 })
        );
        assert_eq!(input.read(0, 3).unwrap(), "aé");
    }

    #[test]
    fn byte_at() {
        let input = sample();
        assert_eq!(input.byte_at(0), Some(b'l'));
        assert_eq!(input.byte_at(5), Some(b' '));
        assert_eq!(input.byte_at(10), Some(b'\n'));
        assert_eq!(input.byte_at(11), None);
    }

    #[test]
    fn from_reader_splits_lines() {
        let input = ChunkedInput::from_reader("a\n\nb".as_bytes()).unwrap();
        assert_eq!(input.chunks().collect::<Vec<_>>(), vec!["a\n", "\n", "b"]);
        assert_eq!(input.read(0, 4).unwrap(), "a\n\nb");
    }
}

mod source_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn both_variants_read_the_same() {
        let text = Source::from("foo ( bar )");
        let chunked = Source::from(ChunkedInput::new(["foo (", " bar", " )"]));
        assert_eq!(text.len(), chunked.len());
        for (from, to) in [(0, 3), (4, 5), (3, 9), (0, 11)] {
            assert_eq!(text.read(from, to).unwrap(), chunked.read(from, to).unwrap());
        }
        for offset in 0..=text.len() {
            assert_eq!(text.byte_at(offset), chunked.byte_at(offset));
        }
    }

    #[test]
    fn default_is_empty_text() {
        assert_eq!(Source::default(), Source::Text(String::new()));
        assert!(Source::default().is_empty());
    }
}
