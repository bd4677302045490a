// Named pattern classes, listed from most to least specific.
// Each matcher looks at `text[pos..]` and returns the byte length it claims.

use lazy_static::lazy_static;

use super::token::TokenKind;
use crate::emoji::is_emoji;
use crate::engine::config::Lexicon;

pub type Matcher = fn(&str, usize, &Lexicon) -> Option<usize>;

pub struct PatternClass {
    pub kind: TokenKind,
    pub matcher: Matcher,
}

/// Precedence order: the first class that matches at a position wins.
pub const PATTERN_CLASSES: [PatternClass; 15] = [
    PatternClass { kind: TokenKind::Url, matcher: url },
    PatternClass { kind: TokenKind::Email, matcher: email },
    PatternClass { kind: TokenKind::Compound, matcher: compound },
    PatternClass { kind: TokenKind::Hashtag, matcher: hashtag },
    PatternClass { kind: TokenKind::Mention, matcher: mention },
    PatternClass { kind: TokenKind::Heart, matcher: heart },
    PatternClass { kind: TokenKind::Emoticon, matcher: emoticon },
    PatternClass { kind: TokenKind::Contraction, matcher: contraction },
    PatternClass { kind: TokenKind::Title, matcher: title },
    PatternClass { kind: TokenKind::Abbreviation, matcher: abbreviation },
    PatternClass { kind: TokenKind::Number, matcher: number },
    PatternClass { kind: TokenKind::Word, matcher: word },
    PatternClass { kind: TokenKind::Symbol, matcher: symbol },
    PatternClass { kind: TokenKind::Emoji, matcher: emoji },
    PatternClass { kind: TokenKind::Other, matcher: other },
];

const URL_PREFIXES: [&str; 3] = ["https://", "http://", "www."];

const SYMBOLS: &str = "()<>!?.,/\\'\"-_=§|´ˇ°[]{}~$^&*;:%+£€`";

enum Emoticon {
    Literal(&'static str),
    /// `eyes nose? mouth+`
    Face {
        eyes: &'static str,
        nose: char,
        mouth: char,
    },
}

lazy_static! {
    static ref EMOTICONS: Vec<Emoticon> = {
        const EXTRAS: [&str; 9] = ["-_-", "x_x", "^_^", "o.o", "o_o", "(:", "):", ");", "(;"];
        const EYES: [&str; 4] = [">:", ":", "=", ";"];
        const NOSES: [char; 5] = ['-', ',', '^', '\'', '"'];
        const MOUTHS: [char; 13] = [
            'D', 'd', 'p', 'P', 'v', ')', 'o', 'O', '(', '3', '/', '|', '\\',
        ];

        let mut table: Vec<Emoticon> = EXTRAS.iter().map(|&e| Emoticon::Literal(e)).collect();
        for &eyes in &EYES {
            for &nose in &NOSES {
                for &mouth in &MOUTHS {
                    table.push(Emoticon::Face { eyes, nose, mouth });
                }
            }
        }
        table
    };
}

fn char_at(text: &str, pos: usize) -> Option<char> {
    text[pos..].chars().next()
}

fn char_before(text: &str, pos: usize) -> Option<char> {
    text[..pos].chars().next_back()
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_word_boundary(text: &str, pos: usize) -> bool {
    let before = char_before(text, pos).map_or(false, is_word_char);
    let after = char_at(text, pos).map_or(false, is_word_char);
    before != after
}

fn is_tag_byte(b: &u8) -> bool {
    b.is_ascii_alphanumeric() || *b == b'_'
}

fn is_local_byte(b: &u8) -> bool {
    b.is_ascii_alphanumeric() || b"._%+-".contains(b)
}

fn is_domain_byte(b: &u8) -> bool {
    b.is_ascii_alphanumeric() || *b == b'.' || *b == b'-'
}

/// Length of the leading ASCII run satisfying `pred`; ASCII runs always end on a char boundary.
fn ascii_run<F>(bytes: &[u8], pred: F) -> usize
where
    F: Fn(&u8) -> bool,
{
    bytes.iter().take_while(|&b| pred(b)).count()
}

/// Byte length of the leading run of characters satisfying `pred`.
pub(crate) fn run_len<F>(text: &str, pred: F) -> usize
where
    F: Fn(char) -> bool,
{
    text.chars()
        .take_while(|&c| pred(c))
        .map(char::len_utf8)
        .sum()
}

fn nonzero(len: usize) -> Option<usize> {
    (len > 0).then_some(len)
}

fn url(text: &str, pos: usize, _: &Lexicon) -> Option<usize> {
    let rest = &text[pos..];
    let prefix = URL_PREFIXES.iter().find(|p| rest.starts_with(*p))?;
    let body = run_len(&rest[prefix.len()..], |c| !c.is_whitespace());
    nonzero(body).map(|n| prefix.len() + n)
}

fn email(text: &str, pos: usize, _: &Lexicon) -> Option<usize> {
    if !is_word_boundary(text, pos) {
        return None;
    }
    let bytes = &text.as_bytes()[pos..];
    let local = ascii_run(bytes, is_local_byte);
    if local == 0 || bytes.get(local) != Some(&b'@') {
        return None;
    }

    let domain_start = local + 1;
    let domain_len = ascii_run(&bytes[domain_start..], is_domain_byte);
    let domain = &bytes[domain_start..domain_start + domain_len];

    // Longest host first, then a top-level part of 2+ letters ending at a word boundary
    for dot in (1..domain.len()).rev() {
        if domain[dot] != b'.' {
            continue;
        }
        let letters = ascii_run(&domain[dot + 1..], u8::is_ascii_alphabetic);
        if letters < 2 {
            continue;
        }
        let len = domain_start + dot + 1 + letters;
        if is_word_boundary(text, pos + len) {
            return Some(len);
        }
    }
    None
}

fn compound(text: &str, pos: usize, _: &Lexicon) -> Option<usize> {
    let bytes = &text.as_bytes()[pos..];
    let head = ascii_run(bytes, u8::is_ascii_alphabetic);
    if head == 0 || !matches!(bytes.get(head), Some(b'-') | Some(b'_')) {
        return None;
    }
    let tail = ascii_run(&bytes[head + 1..], u8::is_ascii_alphabetic);
    nonzero(tail).map(|n| head + 1 + n)
}

fn tagged(text: &str, pos: usize, sigil: u8) -> Option<usize> {
    let bytes = &text.as_bytes()[pos..];
    if bytes.first() != Some(&sigil) {
        return None;
    }
    nonzero(ascii_run(&bytes[1..], is_tag_byte)).map(|n| n + 1)
}

fn hashtag(text: &str, pos: usize, _: &Lexicon) -> Option<usize> {
    tagged(text, pos, b'#')
}

fn mention(text: &str, pos: usize, _: &Lexicon) -> Option<usize> {
    tagged(text, pos, b'@')
}

/// One or more `<+/?3+` groups: `<3`, `<333`, `</3`, `<3<3`.
fn heart(text: &str, pos: usize, _: &Lexicon) -> Option<usize> {
    let bytes = &text.as_bytes()[pos..];
    let mut end = 0;
    loop {
        let mut i = end;
        let opens = ascii_run(&bytes[i..], |b| *b == b'<');
        if opens == 0 {
            break;
        }
        i += opens;
        if bytes.get(i) == Some(&b'/') {
            i += 1;
        }
        let threes = ascii_run(&bytes[i..], |b| *b == b'3');
        if threes == 0 {
            break;
        }
        end = i + threes;
    }
    nonzero(end)
}

fn face(rest: &str, eyes: &str, nose: char, mouth: char) -> Option<usize> {
    let after_eyes = rest.strip_prefix(eyes)?;
    if let Some(after_nose) = after_eyes.strip_prefix(nose) {
        let mouths = run_len(after_nose, |c| c == mouth);
        if mouths > 0 {
            return Some(eyes.len() + nose.len_utf8() + mouths);
        }
    }
    nonzero(run_len(after_eyes, |c| c == mouth)).map(|n| eyes.len() + n)
}

fn emoticon(text: &str, pos: usize, _: &Lexicon) -> Option<usize> {
    let rest = &text[pos..];
    EMOTICONS.iter().find_map(|e| match *e {
        Emoticon::Literal(s) => rest.starts_with(s).then_some(s.len()),
        Emoticon::Face { eyes, nose, mouth } => face(rest, eyes, nose, mouth),
    })
}

fn contraction(text: &str, pos: usize, _: &Lexicon) -> Option<usize> {
    let bytes = &text.as_bytes()[pos..];
    let head = ascii_run(bytes, u8::is_ascii_alphabetic);
    if head == 0 || bytes.get(head) != Some(&b'\'') {
        return None;
    }
    let tail = ascii_run(&bytes[head + 1..], u8::is_ascii_alphabetic);
    nonzero(tail).map(|n| head + 1 + n)
}

fn title(text: &str, pos: usize, lexicon: &Lexicon) -> Option<usize> {
    let rest = &text.as_bytes()[pos..];
    lexicon
        .titles
        .iter()
        .find(|t| {
            !t.is_empty()
                && rest.len() >= t.len()
                && rest[..t.len()].eq_ignore_ascii_case(t.as_bytes())
        })
        .map(|t| t.len())
}

/// Two or more `letter.` pairs starting a word that does not follow a period.
fn abbreviation(text: &str, pos: usize, _: &Lexicon) -> Option<usize> {
    if !is_word_boundary(text, pos) || char_before(text, pos) == Some('.') {
        return None;
    }
    let bytes = &text.as_bytes()[pos..];
    let mut end = 0;
    while bytes.get(end).map_or(false, u8::is_ascii_alphabetic) && bytes.get(end + 1) == Some(&b'.')
    {
        end += 2;
    }
    (end >= 4).then_some(end)
}

fn number(text: &str, pos: usize, _: &Lexicon) -> Option<usize> {
    nonzero(ascii_run(&text.as_bytes()[pos..], u8::is_ascii_digit))
}

fn word(text: &str, pos: usize, _: &Lexicon) -> Option<usize> {
    nonzero(ascii_run(&text.as_bytes()[pos..], u8::is_ascii_alphabetic))
}

fn symbol(text: &str, pos: usize, _: &Lexicon) -> Option<usize> {
    let c = char_at(text, pos)?;
    let len = run_len(&text[pos..], |x| x == c);
    match c {
        // Leave the last sigil to a hashtag or mention that follows: "##tag" -> "#", "#tag"
        '#' | '@' => {
            let body_follows = text.as_bytes().get(pos + len).map_or(false, is_tag_byte);
            if len > 1 && body_follows {
                Some(len - 1)
            } else {
                Some(len)
            }
        }
        _ if SYMBOLS.contains(c) => Some(len),
        _ => None,
    }
}

fn emoji(text: &str, pos: usize, _: &Lexicon) -> Option<usize> {
    char_at(text, pos)
        .filter(|&c| is_emoji(c))
        .map(char::len_utf8)
}

fn other(text: &str, pos: usize, _: &Lexicon) -> Option<usize> {
    char_at(text, pos).map(char::len_utf8)
}

/// First pattern class matching at `pos`, with the byte length it claims.
pub fn first_match(text: &str, pos: usize, lexicon: &Lexicon) -> Option<(TokenKind, usize)> {
    PATTERN_CLASSES.iter().find_map(|class| {
        (class.matcher)(text, pos, lexicon)
            .filter(|&len| len > 0)
            .map(|len| (class.kind, len))
    })
}
