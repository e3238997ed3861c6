#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use crate::app::input::{PROMPT, collect_symbol, normalize_symbol, prompt_symbol};

    #[test]
    fn normalizes_to_trimmed_uppercase() {
        assert_eq!(normalize_symbol("  nvda \n"), "NVDA");
        assert_eq!(normalize_symbol("brk-b"), "BRK-B");
    }

    #[test]
    fn prompt_reads_one_line() {
        let mut reader = Cursor::new("tsla\naapl\n");
        let mut out = Vec::new();

        let symbol = prompt_symbol(&mut reader, &mut out).unwrap();

        assert_eq!(symbol, "TSLA");
        assert_eq!(String::from_utf8(out).unwrap(), PROMPT);
    }

    #[test]
    fn blank_entry_passes_through() {
        let mut reader = Cursor::new("   \n");
        let mut out = Vec::new();

        assert_eq!(prompt_symbol(&mut reader, &mut out).unwrap(), "");

        let mut eof = Cursor::new("");
        assert_eq!(prompt_symbol(&mut eof, &mut out).unwrap(), "");
    }

    #[test]
    fn argument_skips_the_prompt() {
        assert_eq!(collect_symbol(Some(" msft ")).unwrap(), "MSFT");
    }
}
