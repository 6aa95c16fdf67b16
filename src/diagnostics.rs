//! stderr messages shared by the reader and the top-level error handler.

use std::fmt::Display;

pub fn error_message(msg: impl Display) -> String {
    format!("ERROR: {}", msg)
}

pub fn warn_message(msg: impl Display) -> String {
    format!("WARN: {}", msg)
}

pub fn warn(msg: impl Display) {
    eprintln!("{}", warn_message(msg));
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn prefixes() {
        assert_eq!(error_message("bad line"), "ERROR: bad line");
        assert_eq!(warn_message(format!("dup {}", 3)), "WARN: dup 3");
    }
}
