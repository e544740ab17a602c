use std::io::{self, Write};

/// Prints `Nothing`.
pub fn nothing<W: Write>(out: &mut W) -> io::Result<()> {
    let s = "Nothing";
    writeln!(out, "{s}")
}
