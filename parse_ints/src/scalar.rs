use std::io::{self, BufReader, Bytes, Read};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub value: i32,
    pub line: usize,
}

/// Splits a byte stream on spaces and newlines and converts every run of
/// other bytes into an integer with [`atoi`].
pub struct Tokenizer<R> {
    bytes: Bytes<BufReader<R>>,
    buf: Vec<u8>,
    line: usize,
    done: bool,
}

impl<R: Read> Tokenizer<R> {
    pub fn new(reader: R) -> Self {
        Self {
            bytes: BufReader::new(reader).bytes(),
            buf: Vec::with_capacity(16),
            line: 1,
            done: false,
        }
    }

    fn take_token(&mut self, line: usize) -> Token {
        let (value, clean) = scan(&self.buf);
        if !clean {
            log::debug!(
                "line {line}: coerced {:?} to {value}",
                String::from_utf8_lossy(&self.buf)
            );
        }
        self.buf.clear();
        Token { value, line }
    }
}

impl<R: Read> Iterator for Tokenizer<R> {
    type Item = io::Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            let byte = match self.bytes.next() {
                Some(Ok(byte)) => Some(byte),
                Some(Err(error)) => {
                    self.done = true;
                    return Some(Err(error));
                }
                None => None,
            };
            match byte {
                Some(b' ') | Some(b'\n') | None => {
                    let line = self.line;
                    match byte {
                        Some(b'\n') => self.line += 1,
                        None => self.done = true,
                        _ => {}
                    }
                    if !self.buf.is_empty() {
                        return Some(Ok(self.take_token(line)));
                    }
                    if self.done {
                        return None;
                    }
                }
                Some(byte) => self.buf.push(byte),
            }
        }
    }
}

/// C-style `atoi`: leading whitespace, an optional sign, then decimal digits
/// up to the first non-digit. Yields `0` when there are no digits and wraps
/// on overflow.
pub fn atoi(bytes: &[u8]) -> i32 {
    scan(bytes).0
}

/// Value plus whether the token held nothing but the number.
fn scan(bytes: &[u8]) -> (i32, bool) {
    let mut cursor = 0;
    while cursor < bytes.len() && is_space(bytes[cursor]) {
        cursor += 1;
    }
    let negative = match bytes.get(cursor) {
        Some(b'-') => {
            cursor += 1;
            true
        }
        Some(b'+') => {
            cursor += 1;
            false
        }
        _ => false,
    };
    let digits_start = cursor;
    let mut value: i32 = 0;
    while let Some(byte @ b'0'..=b'9') = bytes.get(cursor).copied() {
        value = value.wrapping_mul(10).wrapping_add(i32::from(byte - b'0'));
        cursor += 1;
    }
    let n_digits = cursor - digits_start;
    if negative {
        value = value.wrapping_neg();
    }
    let clean = n_digits > 0 && bytes[cursor..].iter().all(|b| is_space(*b));
    (value, clean)
}

fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

#[cfg(test)]
mod test {
    use super::*;

    fn tokens(input: &str) -> Vec<Token> {
        Tokenizer::new(input.as_bytes())
            .collect::<io::Result<Vec<_>>>()
            .unwrap()
    }

    fn parse_ints(input: &[u8]) -> Vec<i32> {
        Tokenizer::new(input)
            .map(|token| token.unwrap().value)
            .collect()
    }

    #[test]
    fn converts_plain_digits() {
        assert_eq!(atoi(b"0"), 0);
        assert_eq!(atoi(b"7"), 7);
        assert_eq!(atoi(b"12345"), 12345);
    }

    #[test]
    fn converts_signs() {
        assert_eq!(atoi(b"-42"), -42);
        assert_eq!(atoi(b"+42"), 42);
        assert_eq!(atoi(b"-"), 0);
    }

    #[test]
    fn skips_leading_whitespace() {
        assert_eq!(atoi(b"\t 15"), 15);
        assert_eq!(atoi(b"\r\n-3"), -3);
    }

    #[test]
    fn stops_at_first_non_digit() {
        assert_eq!(atoi(b"12abc"), 12);
        assert_eq!(atoi(b"3\r"), 3);
        assert_eq!(atoi(b"1-2"), 1);
    }

    #[test]
    fn non_digit_leading_is_zero() {
        assert_eq!(atoi(b"abc"), 0);
        assert_eq!(atoi(b"x12"), 0);
        assert_eq!(atoi(b""), 0);
    }

    #[test]
    fn wraps_on_overflow() {
        assert_eq!(atoi(b"2147483647"), i32::MAX);
        assert_eq!(atoi(b"-2147483648"), i32::MIN);
        assert_eq!(atoi(b"2147483648"), i32::MIN);
    }

    #[test]
    fn flags_coerced_tokens() {
        assert!(scan(b"12").1);
        assert!(scan(b"-12\r").1);
        assert!(!scan(b"12abc").1);
        assert!(!scan(b"abc").1);
        assert!(!scan(b"+").1);
    }

    #[test]
    fn empty_input_has_no_tokens() {
        assert!(tokens("").is_empty());
        assert!(tokens("   \n\n ").is_empty());
    }

    #[test]
    fn terminates_without_trailing_newline() {
        let found = tokens("3   4\n5 6");
        let values: Vec<_> = found.iter().map(|t| t.value).collect();
        assert_eq!(values, [3, 4, 5, 6]);
    }

    #[test]
    fn tracks_line_numbers() {
        let found = tokens("1 2\n\n3 4\n");
        let lines: Vec<_> = found.iter().map(|t| t.line).collect();
        assert_eq!(lines, [1, 1, 3, 3]);
    }

    #[test]
    fn tabs_and_carriage_returns_stay_in_token() {
        assert_eq!(parse_ints(b"1\t2 3\r\n4\r\n"), [1, 3, 4]);
    }

    #[test]
    fn long_tokens_are_not_truncated() {
        let input = format!("{}1 2", "0".repeat(64));
        assert_eq!(parse_ints(input.as_bytes()), [1, 2]);
    }

    #[test]
    fn malformed_token_parses_to_zero() {
        assert_eq!(parse_ints(b"oops 5\n"), [0, 5]);
    }

    #[test]
    fn read_errors_end_iteration() {
        struct Failing;

        impl Read for Failing {
            fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::Other, "disk on fire"))
            }
        }

        let mut tokenizer = Tokenizer::new(Failing);
        assert!(matches!(tokenizer.next(), Some(Err(_))));
        assert!(tokenizer.next().is_none());
    }

    mod props {
        use super::super::*;
        use super::parse_ints;
        use proptest::prelude::*;
        use proptest_derive::Arbitrary;

        #[derive(Debug, Clone, Copy, Arbitrary)]
        enum Separator {
            Space,
            Spaces,
            Newline,
            BlankLine,
        }

        impl Separator {
            fn as_str(self) -> &'static str {
                match self {
                    Separator::Space => " ",
                    Separator::Spaces => "   ",
                    Separator::Newline => "\n",
                    Separator::BlankLine => "\n\n",
                }
            }
        }

        proptest! {
            #[test]
            fn atoi_agrees_with_str_parse(n in any::<i32>()) {
                prop_assert_eq!(atoi(n.to_string().as_bytes()), n);
            }

            #[test]
            fn tokenizes_rendered_lists(items in any::<Vec<(i32, Separator)>>()) {
                let mut input = String::new();
                for (n, sep) in items.iter() {
                    input.push_str(&n.to_string());
                    input.push_str(sep.as_str());
                }
                let expected: Vec<i32> = items.iter().map(|(n, _)| *n).collect();
                prop_assert_eq!(parse_ints(input.as_bytes()), expected);
            }
        }
    }
}
