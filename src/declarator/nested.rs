// Mon Oct 12 2026 - Alex

use crate::declarator::DeclaratorError;

/// Balanced-parenthesis tree of a declarator tail. Text runs are trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Group {
    Text(String),
    Nested(Vec<Group>),
}

impl Group {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(t) => Some(t),
            Self::Nested(_) => None,
        }
    }
}

/// Splits `tail` into its top level groups. `input` is the full spelling,
/// kept for error reporting.
pub fn parse_groups(tail: &str, input: &str) -> Result<Vec<Group>, DeclaratorError> {
    let mut stack: Vec<Vec<Group>> = vec![Vec::new()];
    let mut text = String::new();

    for c in tail.chars() {
        match c {
            '(' => {
                flush(&mut text, &mut stack);
                stack.push(Vec::new());
            }
            ')' => {
                flush(&mut text, &mut stack);
                if stack.len() < 2 {
                    return Err(DeclaratorError::Unbalanced(input.to_string()));
                }
                let inner = stack.pop().unwrap_or_default();
                if let Some(parent) = stack.last_mut() {
                    parent.push(Group::Nested(inner));
                }
            }
            _ => text.push(c),
        }
    }
    flush(&mut text, &mut stack);

    if stack.len() != 1 {
        return Err(DeclaratorError::Unbalanced(input.to_string()));
    }
    Ok(stack.pop().unwrap_or_default())
}

fn flush(text: &mut String, stack: &mut [Vec<Group>]) {
    let trimmed = text.trim();
    if !trimmed.is_empty() {
        if let Some(top) = stack.last_mut() {
            top.push(Group::Text(trimmed.to_string()));
        }
    }
    text.clear();
}

/// Re-assembles groups into source text, `(*)(int)` style.
pub fn flatten(groups: &[Group]) -> String {
    let mut out = String::new();
    let mut prev_text = false;
    for g in groups {
        match g {
            Group::Text(t) => {
                if !out.is_empty() && !t.starts_with(',') {
                    out.push(' ');
                }
                out.push_str(t);
                prev_text = true;
            }
            Group::Nested(inner) => {
                if prev_text {
                    out.push(' ');
                }
                out.push('(');
                out.push_str(&flatten(inner));
                out.push(')');
                prev_text = false;
            }
        }
    }
    out
}

/// Splits a parameter list on its top level commas.
pub fn split_arguments(list: &str) -> Vec<String> {
    let mut args = Vec::new();
    let mut depth = 0i32;
    let mut current = String::new();
    for c in list.chars() {
        match c {
            '(' | '<' | '[' => {
                depth += 1;
                current.push(c);
            }
            ')' | '>' | ']' => {
                depth -= 1;
                current.push(c);
            }
            ',' if depth == 0 => {
                args.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(c),
        }
    }
    args.push(current.trim().to_string());
    args.into_iter().filter(|a| !a.is_empty()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_groups() {
        let g = parse_groups("* (*[2]) [3]", "int * (*[2]) [3]").unwrap();
        assert_eq!(
            g,
            vec![
                Group::Text("*".into()),
                Group::Nested(vec![Group::Text("*[2]".into())]),
                Group::Text("[3]".into()),
            ]
        );
    }

    #[test]
    fn test_unbalanced() {
        assert!(matches!(
            parse_groups("(*)(int", "int (*)(int"),
            Err(DeclaratorError::Unbalanced(_))
        ));
        assert!(parse_groups("*)", "int *)").is_err());
    }

    #[test]
    fn test_flatten_and_split() {
        let g = parse_groups("int, struct X*, void (*)(int)", "").unwrap();
        let flat = flatten(&g);
        assert_eq!(flat, "int, struct X*, void (*)(int)");
        assert_eq!(
            split_arguments(&flat),
            vec!["int", "struct X*", "void (*)(int)"]
        );
        assert!(split_arguments("").is_empty());
        assert_eq!(split_arguments("std::map<int, int>, char"), vec!["std::map<int, int>", "char"]);
    }
}
