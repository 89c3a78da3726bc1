// Mon Oct 12 2026 - Alex

use crate::declarator::nested::{flatten, parse_groups, split_arguments, Group};
use crate::declarator::primitive::is_primitive_word;
use crate::declarator::{
    ArrayLength, Declarator, DeclaratorError, Derivation, Dialect, Indirection, Qualifiers,
};

const KEYWORDS: &[&str] = &["struct", "union", "enum", "class"];

struct Context<'a> {
    input: &'a str,
    dialect: Dialect,
}

impl Context<'_> {
    fn cxx(&self) -> bool {
        self.dialect == Dialect::Cxx
    }

    fn error(&self, fragment: &str) -> DeclaratorError {
        DeclaratorError::parse(fragment, self.input)
    }
}

pub(crate) fn parse(input: &str, dialect: Dialect) -> Result<Declarator, DeclaratorError> {
    let ctx = Context { input, dialect };
    let (spelling, bitfield) = split_bitfield(input)?;
    let (qualifiers, base, tail) = parse_base(spelling, &ctx)?;

    let tail = tail.replace("[]", "*");
    if let Some(member) = member_pointer(&tail) {
        return Err(ctx.error(member));
    }
    let derivations = if tail.trim().is_empty() {
        Vec::new()
    } else {
        derivation_stack(parse_groups(&tail, input)?, &ctx)?
    };

    Ok(Declarator::from_parts(base, qualifiers, bitfield, derivations, dialect))
}

/// Splits `int #3` into `int` and a width of 3. Only a `#` outside any
/// parenthesis counts.
fn split_bitfield(input: &str) -> Result<(&str, Option<u32>), DeclaratorError> {
    let mut depth = 0i32;
    let mut mark = None;
    for (i, c) in input.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth -= 1,
            '#' if depth == 0 => mark = Some(i),
            _ => {}
        }
    }
    let Some(pos) = mark else {
        return Ok((input, None));
    };
    let width = input[pos + 1..].trim();
    let bits: u32 = width.parse().map_err(|_| DeclaratorError::BitfieldWidth {
        width: width.to_string(),
        input: input.to_string(),
    })?;
    Ok((&input[..pos], (bits > 0).then_some(bits)))
}

fn take_word(s: &str) -> (&str, &str) {
    let end = s
        .char_indices()
        .find(|(_, c)| !(c.is_ascii_alphanumeric() || *c == '_'))
        .map(|(i, _)| i)
        .unwrap_or(s.len());
    (&s[..end], &s[end..])
}

/// Qualified C++ symbol, template arguments and anonymous `?_` names included.
fn take_symbol(s: &str) -> Option<(&str, &str)> {
    let mut chars = s.char_indices().peekable();
    match chars.peek() {
        Some((_, c)) if c.is_ascii_alphabetic() || matches!(c, '_' | ':' | '?' | '~') => {}
        _ => return None,
    }
    let mut angle = 0i32;
    let mut paren = 0i32;
    let mut end = s.len();
    for (i, c) in chars {
        if angle > 0 {
            match c {
                '<' => angle += 1,
                '>' if paren == 0 => angle -= 1,
                '(' => paren += 1,
                ')' => paren -= 1,
                _ => {}
            }
            continue;
        }
        match c {
            '<' => angle += 1,
            c if c.is_ascii_alphanumeric() || matches!(c, '_' | ':' | '$' | '?' | '~') => {}
            _ => {
                end = i;
                break;
            }
        }
    }
    if angle != 0 {
        return None;
    }
    Some((&s[..end], &s[end..]))
}

fn parse_base<'a>(
    spelling: &'a str,
    ctx: &Context<'_>,
) -> Result<(Qualifiers, String, &'a str), DeclaratorError> {
    let mut qualifiers = Qualifiers::empty();
    let mut rest = spelling.trim_start();

    loop {
        let (word, after) = take_word(rest);
        if let Some(q) = Qualifiers::from_keyword(word) {
            qualifiers |= q;
        } else if word != "noexcept" || !ctx.cxx() {
            break;
        }
        rest = after.trim_start();
    }

    let base = if let Some(after) = rest.strip_prefix("...") {
        rest = after;
        "...".to_string()
    } else {
        let (word, after) = take_word(rest);
        if is_primitive_word(word) {
            let mut words = vec![word];
            rest = after;
            loop {
                let (next, after) = take_word(rest.trim_start());
                if !is_primitive_word(next) {
                    break;
                }
                words.push(next);
                rest = after;
            }
            words.join(" ")
        } else if KEYWORDS.contains(&word) {
            let (symbol, after) =
                take_symbol(after.trim_start()).ok_or_else(|| ctx.error(rest))?;
            rest = after;
            format!("{} {}", word, symbol)
        } else if let Some((symbol, after)) = take_symbol(rest) {
            rest = after;
            symbol.to_string()
        } else if qualifiers.intersects(Qualifiers::UNSIGNED | Qualifiers::SIGNED) {
            // `unsigned` alone stands for `unsigned int`
            "int".to_string()
        } else {
            return Err(ctx.error(rest));
        }
    };

    loop {
        let (word, after) = take_word(rest.trim_start());
        match word {
            "const" => qualifiers |= Qualifiers::CONST,
            "volatile" => qualifiers |= Qualifiers::VOLATILE,
            _ => break,
        }
        rest = after;
    }

    Ok((qualifiers, base, rest))
}

/// Walks the nested groups of a declarator tail outside-in and returns the
/// derivation stack, innermost first.
fn derivation_stack(
    mut items: Vec<Group>,
    ctx: &Context<'_>,
) -> Result<Vec<Derivation>, DeclaratorError> {
    let mut stack = Vec::new();
    let mut qualifier = None;

    if let Some(head) = items.first().and_then(Group::as_text).map(str::to_string) {
        match operators(&head, ctx)? {
            Some(ops) => {
                stack.extend(ops);
                items.remove(0);
            }
            None => {
                // a bare parameter list: everything left belongs to it
                stack.push(Derivation::signature(split_arguments(&flatten(&items))));
                items.clear();
            }
        }
    }

    if let [Group::Nested(inner)] = items.as_slice() {
        if inner.is_empty() {
            stack.push(Derivation::signature(Vec::new()));
            return Ok(stack);
        }
    }

    if items.len() > 1 {
        match items.pop() {
            Some(Group::Text(tail)) => {
                if tail.starts_with('[') {
                    stack.extend(array_dims(&tail, ctx)?);
                } else if ctx.cxx() && is_method_qualifier(&tail) {
                    qualifier = Some(tail.split_whitespace().collect::<Vec<_>>().join(" "));
                } else {
                    return Err(ctx.error(&tail));
                }
            }
            Some(Group::Nested(params)) => {
                stack.push(Derivation::signature(split_arguments(&flatten(&params))));
            }
            None => {}
        }
    }

    if !items.is_empty() {
        if items.len() == 1 && qualifier.is_none() {
            if let Some(Group::Nested(inner)) = items.first() {
                items = inner.clone();
            }
        }
        stack.extend(derivation_stack(items, ctx)?);
    }

    if let Some(q) = qualifier {
        let target = stack
            .iter_mut()
            .rev()
            .find_map(|d| match d {
                Derivation::FunctionSignature { qualifier, .. } => Some(qualifier),
                _ => None,
            })
            .ok_or_else(|| ctx.error(&q))?;
        *target = Some(q);
    }

    Ok(stack)
}

/// Parses a run of pointer/reference operators followed by array
/// dimensions. Returns `None` when `text` does not start with an operator,
/// which makes it a parameter list.
fn operators(text: &str, ctx: &Context<'_>) -> Result<Option<Vec<Derivation>>, DeclaratorError> {
    let mut rest = text.trim();
    let mut ops = Vec::new();

    loop {
        let indirection = if rest.starts_with('*') {
            let stars = rest.chars().take_while(|c| *c == '*').count();
            rest = &rest[stars..];
            let depth = u8::try_from(stars).map_err(|_| ctx.error(text))?;
            Indirection::Pointer(depth)
        } else if rest.starts_with('&') {
            if !ctx.cxx() {
                return Err(ctx.error(rest));
            }
            if let Some(after) = rest.strip_prefix("&&") {
                rest = after;
                Indirection::RvalueRef
            } else {
                rest = &rest[1..];
                Indirection::LvalueRef
            }
        } else {
            break;
        };

        let mut trailing = Qualifiers::empty();
        loop {
            let (word, after) = take_word(rest.trim_start());
            match word {
                "const" => trailing |= Qualifiers::CONST,
                "volatile" => trailing |= Qualifiers::VOLATILE,
                _ => break,
            }
            rest = after;
        }
        rest = rest.trim_start();
        ops.push(Derivation::Pointer {
            indirection,
            trailing,
        });
    }

    if rest.starts_with('[') {
        ops.extend(array_dims(rest, ctx)?);
        rest = "";
    }

    if ops.is_empty() {
        return Ok(None);
    }
    if !rest.is_empty() {
        return Err(ctx.error(rest));
    }
    Ok(Some(ops))
}

/// `[2][3]` yields the dimensions innermost first: `[3]` then `[2]`.
fn array_dims(text: &str, ctx: &Context<'_>) -> Result<Vec<Derivation>, DeclaratorError> {
    let mut dims = Vec::new();
    let mut rest = text.trim();
    while !rest.is_empty() {
        let body = rest.strip_prefix('[').ok_or_else(|| ctx.error(rest))?;
        let close = body.find(']').ok_or_else(|| ctx.error(rest))?;
        let dim = body[..close].trim();
        let length = match dim.parse::<u32>() {
            Ok(n) => ArrayLength::Fixed(n),
            Err(_) if ctx.cxx() && !dim.is_empty() => ArrayLength::Symbolic(dim.to_string()),
            Err(_) => return Err(ctx.error(&rest[..close + 2])),
        };
        dims.push(Derivation::Array { length });
        rest = body[close + 1..].trim_start();
    }
    dims.reverse();
    Ok(dims)
}

/// Pointer-to-member operator (`A::*`) in declarator position. These have no
/// derivation and are rejected; inside a parameter list they stay opaque.
fn member_pointer(tail: &str) -> Option<&str> {
    for (pos, _) in tail.match_indices("::*") {
        let before = &tail[..pos];
        let start = before
            .char_indices()
            .rev()
            .find(|(_, c)| !(c.is_alphanumeric() || *c == '_' || *c == ':'))
            .map_or(0, |(i, c)| i + c.len_utf8());
        let lead = before[..start].trim_end();
        if lead.is_empty() || lead.ends_with('(') {
            return Some(&tail[start..pos + 3]);
        }
    }
    None
}

fn is_method_qualifier(text: &str) -> bool {
    let spaced = text.replace('&', " & ");
    let words: Vec<&str> = spaced.split_whitespace().collect();
    let refs = words.iter().filter(|w| **w == "&").count();
    !words.is_empty()
        && refs <= 2
        && words
            .iter()
            .all(|w| matches!(*w, "const" | "volatile" | "noexcept" | "&"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_bitfield() {
        assert_eq!(split_bitfield("int #3").unwrap(), ("int ", Some(3)));
        assert_eq!(split_bitfield("unsigned int# 12").unwrap(), ("unsigned int", Some(12)));
        assert_eq!(split_bitfield("int").unwrap(), ("int", None));
        assert!(split_bitfield("int #x").is_err());
    }

    #[test]
    fn test_take_symbol() {
        assert_eq!(take_symbol("X::Y &"), Some(("X::Y", " &")));
        assert_eq!(
            take_symbol("std::map<int, std::pair<a, b> >::iterator *"),
            Some(("std::map<int, std::pair<a, b> >::iterator", " *"))
        );
        assert_eq!(take_symbol("?_1a2b3c4d"), Some(("?_1a2b3c4d", "")));
        assert_eq!(take_symbol("*x"), None);
        assert_eq!(take_symbol("vec<int"), None);
    }

    #[test]
    fn test_method_qualifier() {
        assert!(is_method_qualifier("volatile"));
        assert!(is_method_qualifier("&&"));
        assert!(is_method_qualifier("const &"));
        assert!(is_method_qualifier("noexcept"));
        assert!(!is_method_qualifier("[2]"));
        assert!(!is_method_qualifier("&&&"));
    }

    #[test]
    fn test_member_pointer_rejected() {
        assert_eq!(member_pointer(" A::*"), Some("A::*"));
        assert_eq!(member_pointer(" (ns::A::*)(int)"), Some("ns::A::*"));
        assert_eq!(member_pointer(" (*)(int A::*)"), None);
        assert_eq!(member_pointer(" *"), None);

        let err = parse("int A::*", Dialect::Cxx).unwrap_err();
        assert_eq!(
            err,
            DeclaratorError::Parse {
                fragment: "A::*".into(),
                input: "int A::*".into(),
            }
        );
        assert!(parse("void (A::*)(int) const", Dialect::Cxx).is_err());
        assert!(parse("void (*)(int A::*)", Dialect::Cxx).is_ok());
    }

    #[test]
    fn test_array_dims_order() {
        let ctx = Context {
            input: "int [2][3]",
            dialect: Dialect::C,
        };
        let dims = array_dims("[2][3]", &ctx).unwrap();
        assert_eq!(dims, vec![Derivation::array(3), Derivation::array(2)]);
        assert!(array_dims("[N]", &ctx).is_err());
    }
}
