//! Bidirectional mapping between a line's 16-bit code-unit stream and its
//! human-readable textual form.
//!
//! [`decode_line`] is a total function: it always produces a string, for any
//! input code-unit slice, by stopping at the first `0x0000` terminator or
//! the end of the slice, whichever comes first, and treating any truncated
//! variable/ruby token as ending early rather than panicking.
//!
//! [`encode_line`] is the inverse and can fail - an input string can name an
//! escape, variable, or ruby form that the grammar does not recognize.

use crate::games::Game;
use crate::{Error, Result, remap};

/// Marker introducing a variable token.
const VARIABLE: u16 = 0x0010;
/// End-of-line sentinel.
const TERMINATOR: u16 = 0x0000;
const RETURN: u16 = 0xBE00;
const CLEAR: u16 = 0xBE01;
const WAIT: u16 = 0xBE02;
const CROSSREF: u16 = 0xBDFF;
const RUBY: u16 = 0xFF01;

/// Decode a plaintext code-unit stream into its textual form.
///
/// `remap` enables the private-use-area character remap table (§3); the
/// active `game`'s variable table resolves `[VAR ...]` names and literal
/// single-character codes (e.g. the Pokédollar sign).
#[must_use]
pub fn decode_line(units: &[u16], game: Game, remap: bool) -> String {
    let mut out = String::new();
    let mut i = 0;
    while i < units.len() {
        let unit = units[i];
        i += 1;
        match unit {
            TERMINATOR => break,
            VARIABLE => {
                let (text, consumed) = decode_variable(&units[i..], game, remap);
                out.push_str(&text);
                i += consumed;
            }
            0x000A => out.push_str("\\n"),
            0x005C => out.push_str("\\\\"),
            0x005B => out.push_str("\\["),
            0x007B => out.push_str("\\{"),
            other => {
                if let Some(c) = game.table().literal_char(other) {
                    out.push(c);
                } else {
                    out.push(code_point_to_char(remap::to_unicode(other, remap)));
                }
            }
        }
    }
    out
}

/// Decode the body of a variable token (everything after the `0x0010`
/// marker). Returns the rendered text and the number of units consumed
/// from `rest` (i.e. not counting the marker itself).
fn decode_variable(rest: &[u16], game: Game, remap: bool) -> (String, usize) {
    let mut i = 0;
    let Some(&count) = rest.get(i) else {
        return (String::new(), rest.len());
    };
    i += 1;
    let Some(&id) = rest.get(i) else {
        return (String::new(), rest.len());
    };
    i += 1;

    match id {
        RETURN => ("\\r".to_owned(), i),
        CLEAR => ("\\c".to_owned(), i),
        WAIT => {
            let arg = rest.get(i).copied().unwrap_or(0);
            i += 1;
            (format!("[WAIT {arg}]"), i)
        }
        CROSSREF => {
            let arg = rest.get(i).copied().unwrap_or(0);
            i += 1;
            (format!("[~ {arg}]"), i)
        }
        RUBY => {
            let base_len = usize::from(rest.get(i).copied().unwrap_or(0));
            i += 1;
            let ruby_len = usize::from(rest.get(i).copied().unwrap_or(0));
            i += 1;
            let base1 = take_bounded(rest, &mut i, base_len);
            let ruby = take_bounded(rest, &mut i, ruby_len);
            let base2 = take_bounded(rest, &mut i, base_len);

            let mut s = String::from("{");
            s.push_str(&decode_line(base1, game, remap));
            s.push('|');
            s.push_str(&decode_line(ruby, game, remap));
            if base1 != base2 {
                s.push('|');
                s.push_str(&decode_line(base2, game, remap));
            }
            s.push('}');
            (s, i)
        }
        other => {
            let name = game.table().name_or_hex(other);
            let arg_count = usize::from(count).saturating_sub(1);
            let mut s = format!("[VAR {name}");
            if arg_count > 0 {
                s.push('(');
                let mut args = Vec::with_capacity(arg_count);
                for _ in 0..arg_count {
                    let arg = rest.get(i).copied().unwrap_or(0);
                    i += 1;
                    args.push(format!("{arg:04X}"));
                }
                s.push_str(&args.join(","));
                s.push(')');
            }
            s.push(']');
            (s, i)
        }
    }
}

/// Slice `len` units starting at `*i`, clamped to `rest`'s bounds, and
/// advance `*i` by `len` regardless (so a truncated token still ends the
/// decode rather than looping).
fn take_bounded<'a>(rest: &'a [u16], i: &mut usize, len: usize) -> &'a [u16] {
    let start = (*i).min(rest.len());
    let end = (start + len).min(rest.len());
    *i += len;
    &rest[start..end]
}

fn code_point_to_char(cp: u32) -> char {
    char::from_u32(cp).unwrap_or('\u{FFFD}')
}

/// Encode a string into its plaintext code-unit stream, terminated by
/// `0x0000`.
pub fn encode_line(s: &str, game: Game, remap: bool) -> Result<Vec<u16>> {
    let mut out = Vec::new();
    let mut chars = s.chars();

    while let Some(c) = chars.next() {
        match c {
            '\\' => encode_escape(&mut chars, &mut out)?,
            '[' => {
                let body = take_until(&mut chars, ']').ok_or(Error::UnterminatedToken('['))?;
                encode_variable(&body, game, &mut out)?;
            }
            '{' => {
                let body = take_until(&mut chars, '}').ok_or(Error::UnterminatedToken('{'))?;
                encode_ruby(&body, remap, &mut out)?;
            }
            other => encode_literal_char(other, game, remap, &mut out)?,
        }
    }
    out.push(TERMINATOR);
    Ok(out)
}

fn encode_escape(chars: &mut std::str::Chars<'_>, out: &mut Vec<u16>) -> Result<()> {
    let esc = chars.next().ok_or(Error::MalformedEscape('\0'))?;
    match esc {
        'n' => out.push(0x000A),
        '\\' => out.push(0x005C),
        '[' => out.push(0x005B),
        '{' => out.push(0x007B),
        'r' => out.extend([VARIABLE, 1, RETURN]),
        'c' => out.extend([VARIABLE, 1, CLEAR]),
        other => return Err(Error::MalformedEscape(other)),
    }
    Ok(())
}

fn encode_literal_char(c: char, game: Game, remap: bool, out: &mut Vec<u16>) -> Result<()> {
    if let Some(code) = game.table().code_for_char(c) {
        out.push(code);
    } else {
        let unit = remap::from_unicode(c as u32, remap).ok_or(Error::OutOfRangeChar(c))?;
        out.push(unit);
    }
    Ok(())
}

/// Consume `chars` up to (and including) the first occurrence of
/// `delimiter`, returning everything before it. `None` if `chars` is
/// exhausted without finding `delimiter`.
fn take_until(chars: &mut std::str::Chars<'_>, delimiter: char) -> Option<String> {
    let mut body = String::new();
    for c in chars.by_ref() {
        if c == delimiter {
            return Some(body);
        }
        body.push(c);
    }
    None
}

fn encode_variable(body: &str, game: Game, out: &mut Vec<u16>) -> Result<()> {
    let (command, args) = body
        .split_once(' ')
        .ok_or_else(|| Error::MalformedVariable(body.to_owned()))?;

    match command {
        "~" => {
            let arg = parse_decimal_u16(args, body)?;
            out.extend([VARIABLE, 2, CROSSREF, arg]);
        }
        "WAIT" => {
            let arg = parse_decimal_u16(args, body)?;
            out.extend([VARIABLE, 2, WAIT, arg]);
        }
        "VAR" => encode_named_variable(args, game, out)?,
        _ => return Err(Error::MalformedVariable(body.to_owned())),
    }
    Ok(())
}

fn encode_named_variable(args: &str, game: Game, out: &mut Vec<u16>) -> Result<()> {
    if let Some((name, rest)) = args.split_once('(') {
        let arg_list = rest
            .strip_suffix(')')
            .ok_or_else(|| Error::MalformedVariable(args.to_owned()))?;
        let code = game.table().code(name)?;
        let mut values = Vec::new();
        for arg in arg_list.split(',') {
            let v = u16::from_str_radix(arg.trim(), 16)
                .map_err(|_| Error::MalformedVariable(args.to_owned()))?;
            values.push(v);
        }
        out.push(VARIABLE);
        out.push(1 + values.len() as u16);
        out.push(code);
        out.extend(values);
    } else {
        let code = game.table().code(args)?;
        out.extend([VARIABLE, 1, code]);
    }
    Ok(())
}

fn parse_decimal_u16(s: &str, body_for_err: &str) -> Result<u16> {
    s.trim()
        .parse()
        .map_err(|_| Error::MalformedVariable(body_for_err.to_owned()))
}

fn encode_ruby(body: &str, remap: bool, out: &mut Vec<u16>) -> Result<()> {
    let parts: Vec<&str> = body.split('|').collect();
    let (base1, ruby, base2) = match parts.as_slice() {
        [base, ruby] => (*base, *ruby, *base),
        [base1, ruby, base2] => (*base1, *ruby, *base2),
        _ => return Err(Error::MalformedVariable(body.to_owned())),
    };

    if base1.chars().count() != base2.chars().count() {
        return Err(Error::RubyLengthMismatch);
    }

    let base_len = base1.chars().count() as u16;
    let ruby_len = ruby.chars().count() as u16;
    out.extend([VARIABLE, 3 + base_len + ruby_len, RUBY, base_len, ruby_len]);

    for c in base1.chars().chain(ruby.chars()).chain(base2.chars()) {
        let unit = remap::from_unicode(c as u32, remap).ok_or(Error::OutOfRangeChar(c))?;
        out.push(unit);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_round_trips() {
        let units = encode_line("Hi", Game::Lgpe, false).unwrap();
        assert_eq!(units, vec![b'H' as u16, b'i' as u16, 0x0000]);
        assert_eq!(decode_line(&units, Game::Lgpe, false), "Hi");
    }

    #[test]
    fn newline_escape_round_trips() {
        let units = encode_line("\\n", Game::Lgpe, false).unwrap();
        assert!(units.contains(&0x000A));
        assert_eq!(decode_line(&units, Game::Lgpe, false), "\\n");
    }

    #[test]
    fn backslash_escape_round_trips() {
        let units = encode_line("\\\\", Game::Lgpe, false).unwrap();
        assert_eq!(decode_line(&units, Game::Lgpe, false), "\\\\");
    }

    #[test]
    fn unknown_escape_is_an_error() {
        assert_eq!(
            encode_line("\\q", Game::Lgpe, false),
            Err(Error::MalformedEscape('q'))
        );
    }

    #[test]
    fn wait_variable_emits_expected_units() {
        let units = encode_line("[WAIT 30]", Game::Lgpe, false).unwrap();
        assert_eq!(&units[..4], &[0x0010, 0x0002, 0xBE02, 0x001E]);
    }

    #[test]
    fn crossref_variable_emits_expected_units() {
        let units = encode_line("[~ 5]", Game::Lgpe, false).unwrap();
        assert_eq!(&units[..4], &[0x0010, 0x0002, 0xBDFF, 0x0005]);
    }

    #[test]
    fn return_and_wait_sequence() {
        let units = encode_line("Hello\\r[WAIT 60]World", Game::Lgpe, false).unwrap();
        let r_pos = units
            .windows(3)
            .position(|w| w == [0x0010, 1, 0xBE00])
            .unwrap();
        let wait_pos = units
            .windows(4)
            .position(|w| w == [0x0010, 2, 0xBE02, 0x003C])
            .unwrap();
        assert!(r_pos < wait_pos);
    }

    #[test]
    fn named_variable_with_args_round_trips() {
        let units = encode_line("[VAR COLOR(0001)]Red", Game::Lgpe, false).unwrap();
        assert_eq!(&units[..4], &[0x0010, 0x0002, 0xFF00, 0x0001]);
        assert_eq!(decode_line(&units, Game::Lgpe, false), "[VAR COLOR(0001)]Red");
    }

    #[test]
    fn unmapped_code_renders_as_hex() {
        let units = vec![VARIABLE, 1, 0x1234, 0x0000];
        assert_eq!(decode_line(&units, Game::Swsh, false), "[VAR 1234]");
    }

    #[test]
    fn ruby_symmetric_round_trips() {
        let units = encode_line("{ab|xy}", Game::Lgpe, false).unwrap();
        assert_eq!(decode_line(&units, Game::Lgpe, false), "{ab|xy}");
    }

    #[test]
    fn ruby_asymmetric_round_trips() {
        let units = encode_line("{ab|xy|cd}", Game::Lgpe, false).unwrap();
        assert_eq!(decode_line(&units, Game::Lgpe, false), "{ab|xy|cd}");
    }

    #[test]
    fn ruby_japanese_example_matches_spec_units() {
        let units = encode_line("{漢字|かんじ}", Game::Lgpe, false).unwrap();
        let expected: Vec<u16> = vec![
            0x0010, 0x0008, 0xFF01, 0x0002, 0x0003, 0x6F22, 0x5B57, 0x304B, 0x3093, 0x3058,
            0x6F22, 0x5B57, 0x0000,
        ];
        assert_eq!(units, expected);
    }

    #[test]
    fn ruby_length_mismatch_is_rejected() {
        assert_eq!(
            encode_line("{ab|xy|abc}", Game::Lgpe, false),
            Err(Error::RubyLengthMismatch)
        );
    }

    #[test]
    fn pokedollar_literal_round_trips() {
        let units = encode_line("100₽", Game::Lgpe, false).unwrap();
        assert!(units.contains(&0xE300));
        assert_eq!(decode_line(&units, Game::Lgpe, false), "100₽");
    }

    #[test]
    fn out_of_range_char_is_an_error() {
        assert_eq!(
            encode_line("\u{1F600}", Game::Lgpe, false),
            Err(Error::OutOfRangeChar('\u{1F600}'))
        );
    }

    #[test]
    fn unterminated_variable_token_is_an_error() {
        assert_eq!(
            encode_line("[VAR COLOR", Game::Lgpe, false),
            Err(Error::UnterminatedToken('['))
        );
    }

    #[test]
    fn unterminated_ruby_token_is_an_error() {
        assert_eq!(
            encode_line("{ab|xy", Game::Lgpe, false),
            Err(Error::UnterminatedToken('{'))
        );
    }

    #[test]
    fn remap_applies_to_plain_characters() {
        let units = encode_line("\u{2026}", Game::Lgpe, true).unwrap();
        assert_eq!(units[0], 0xE08D);
        assert_eq!(decode_line(&units, Game::Lgpe, true), "\u{2026}");
    }

    #[test]
    fn truncated_variable_token_does_not_panic() {
        let units = [VARIABLE, 5, 0xFF00];
        let s = decode_line(&units, Game::Lgpe, false);
        assert!(s.starts_with("[VAR COLOR"));
    }

    #[test]
    fn decode_stops_at_terminator_before_buffer_end() {
        let units = [b'A' as u16, 0x0000, b'B' as u16];
        assert_eq!(decode_line(&units, Game::Lgpe, false), "A");
    }
}
