//! Alias bodies of configured custom commands.
//!
//! A body is a line of input with placeholders: `$1`..`$9` for positional
//! arguments, `$*` for all arguments, `$dest` for the current destination and
//! `$$` for a literal dollar sign. Any other `$` is kept as typed.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Reference {
    Arg(usize),
    All,
    Destination,
    Dollar,
}

impl Reference {
    /// Placeholder at the start of `s` (just after a `$`) and its length.
    fn parse(s: &str) -> Option<(Self, usize)> {
        if s.starts_with("dest") {
            return Some((Self::Destination, 4));
        }
        let reference = match s.as_bytes().first()? {
            b @ b'1'..=b'9' => Self::Arg(usize::from(b - b'0')),
            b'*' => Self::All,
            b'$' => Self::Dollar,
            _ => return None,
        };
        Some((reference, 1))
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Segment<'a> {
    Text(&'a str),
    Ref(Reference),
}

fn segments(body: &str) -> Vec<Segment<'_>> {
    let mut out = Vec::new();
    let mut rest = body;
    while let Some(pos) = rest.find('$') {
        if pos > 0 {
            out.push(Segment::Text(&rest[..pos]));
        }
        let after = &rest[pos + 1..];
        rest = match Reference::parse(after) {
            Some((reference, len)) => {
                out.push(Segment::Ref(reference));
                &after[len..]
            }
            None => {
                out.push(Segment::Text("$"));
                after
            }
        };
    }
    if !rest.is_empty() {
        out.push(Segment::Text(rest));
    }
    out
}

/// Substitute the placeholders of `body`. Missing positional arguments expand to nothing.
pub fn expand<S: AsRef<str>>(body: &str, args: &[S], destination: &str) -> String {
    let mut out = String::with_capacity(body.len());
    for segment in segments(body) {
        match segment {
            Segment::Text(text) => out.push_str(text),
            Segment::Ref(Reference::Arg(n)) => {
                if let Some(arg) = args.get(n - 1) {
                    out.push_str(arg.as_ref());
                }
            }
            Segment::Ref(Reference::All) => {
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        out.push(' ');
                    }
                    out.push_str(arg.as_ref());
                }
            }
            Segment::Ref(Reference::Destination) => out.push_str(destination),
            Segment::Ref(Reference::Dollar) => out.push('$'),
        }
    }
    out
}

/// Highest positional placeholder used in `body`, 0 if none.
pub fn highest_reference(body: &str) -> usize {
    segments(body)
        .into_iter()
        .filter_map(|segment| match segment {
            Segment::Ref(Reference::Arg(n)) => Some(n),
            _ => None,
        })
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_args() {
        assert_eq!(
            expand("/me slaps $1 with a $2", &["bob", "trout"], "#rust"),
            "/me slaps bob with a trout"
        );
    }

    #[test]
    fn test_missing_args_expand_empty() {
        assert_eq!(expand("/kick $1 $2", &["bob"], "#rust"), "/kick bob ");
    }

    #[test]
    fn test_all_args_and_destination() {
        assert_eq!(
            expand("/notice $dest $*", &["hello", "there"], "#rust"),
            "/notice #rust hello there"
        );
        assert_eq!(expand("$*", &[] as &[&str], "#rust"), "");
    }

    #[test]
    fn test_literal_dollars() {
        assert_eq!(expand("costs $$5", &[] as &[&str], ""), "costs $5");
        assert_eq!(expand("$0 $x $", &["a"], ""), "$0 $x $");
        assert_eq!(expand("$destination", &[] as &[&str], "#a"), "#aination");
    }

    #[test]
    fn test_highest_reference() {
        assert_eq!(highest_reference("/me waves"), 0);
        assert_eq!(highest_reference("/msg $2 $1 $*"), 2);
        assert_eq!(highest_reference("$$9"), 0);
        assert_eq!(highest_reference("$9"), 9);
    }
}
