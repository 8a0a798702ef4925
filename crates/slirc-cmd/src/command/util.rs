use std::fmt::{self, Write};

/// Check if a string needs colon-prefixing as a trailing IRC argument.
pub fn needs_colon_prefix(s: &str) -> bool {
    s.is_empty() || s.contains(' ') || s.starts_with(':')
}

/// Check a parameter for characters that would break line framing.
pub fn is_valid_param(param: &str) -> bool {
    !param
        .as_bytes()
        .iter()
        .any(|&b| b == b'\r' || b == b'\n' || b == 0)
}

/// Check a parameter written before the trailing one.
///
/// Besides framing characters, it must be non-empty, contain no space and
/// not start with `:`, or the server would read it as the trailing parameter.
pub fn is_valid_middle_param(param: &str) -> bool {
    is_valid_param(param) && !needs_colon_prefix(param)
}

fn validate_param(param: &str) -> fmt::Result {
    if is_valid_param(param) {
        Ok(())
    } else {
        Err(fmt::Error)
    }
}

fn validate_middle_param(param: &str) -> fmt::Result {
    if is_valid_middle_param(param) {
        Ok(())
    } else {
        Err(fmt::Error)
    }
}

/// Write a command with arguments.
/// The last argument is treated as trailing and gets a `:` prefix if needed.
pub fn write_cmd(f: &mut fmt::Formatter<'_>, cmd: &str, args: &[&str]) -> fmt::Result {
    f.write_str(cmd)?;
    let Some((trailing, middle)) = args.split_last() else {
        return Ok(());
    };

    for param in middle {
        validate_middle_param(param)?;
        f.write_char(' ')?;
        f.write_str(param)?;
    }

    validate_param(trailing)?;
    f.write_char(' ')?;
    if needs_colon_prefix(trailing) {
        f.write_char(':')?;
    }
    f.write_str(trailing)
}

/// Write a command whose last argument is free text and always colon-prefixed.
pub fn write_cmd_freeform(f: &mut fmt::Formatter<'_>, cmd: &str, args: &[&str]) -> fmt::Result {
    f.write_str(cmd)?;
    let Some((suffix, middle)) = args.split_last() else {
        return Ok(());
    };

    for arg in middle {
        validate_middle_param(arg)?;
        f.write_char(' ')?;
        f.write_str(arg)?;
    }
    validate_param(suffix)?;
    f.write_str(" :")?;
    f.write_str(suffix)
}

/// Write a command with an optional comma-separated list argument.
///
/// The list is never colon-prefixed, so each item follows the middle rules.
pub fn write_cmd_list(f: &mut fmt::Formatter<'_>, cmd: &str, items: &[String]) -> fmt::Result {
    f.write_str(cmd)?;
    for (i, item) in items.iter().enumerate() {
        validate_middle_param(item)?;
        f.write_char(if i == 0 { ' ' } else { ',' })?;
        f.write_str(item)?;
    }
    Ok(())
}

/// Write words verbatim, separated by single spaces.
pub fn write_words(f: &mut fmt::Formatter<'_>, words: &[String]) -> fmt::Result {
    for (i, word) in words.iter().enumerate() {
        validate_param(word)?;
        if i > 0 {
            f.write_char(' ')?;
        }
        f.write_str(word)?;
    }
    Ok(())
}
