use std::fmt;
use std::io;

/// Number of `0xHH` values emitted per line of the array body.
pub const BYTES_PER_LINE: usize = 12;

/// A C header embedding `data` as `uint8_t <name>[]` plus a `size_t <name>_SIZE`.
///
/// The layout is fixed and byte-for-byte stable:
///
/// ```text
/// #ifndef FOO_H
/// #define FOO_H
///
/// #include <stdint.h>
/// #include <stddef.h>
///
/// uint8_t FOO[] = {
/// 0x00, 0x01, ... 0x0B,
/// 0x0C
/// };
///
/// size_t FOO_SIZE = 13;
///
/// #endif // FOO_H
/// ```
///
/// Values are separated by `", "` except after the last one, and a newline
/// follows every 12th value regardless of whether a separator precedes it.
#[derive(Debug, Clone, Copy)]
pub struct CHeader<'a> {
    pub name: &'a str,
    pub data: &'a [u8],
}

impl<'a> CHeader<'a> {
    pub fn new(name: &'a str, data: &'a [u8]) -> Self {
        Self { name, data }
    }

    /// Include-guard token: the uppercased name with a `_H` suffix.
    pub fn guard(&self) -> String {
        format!("{}_H", self.name.to_uppercase())
    }

    pub fn size_constant(&self) -> String {
        format!("{}_SIZE", self.name)
    }

    pub fn write_to<W: io::Write>(&self, w: &mut W) -> io::Result<()> {
        write!(w, "{self}")
    }

    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CHeader<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.guard();
        writeln!(f, "#ifndef {guard}")?;
        writeln!(f, "#define {guard}\n")?;
        writeln!(f, "#include <stdint.h>")?;
        writeln!(f, "#include <stddef.h>\n")?;

        writeln!(f, "uint8_t {}[] = {{", self.name)?;
        let last = self.data.len().saturating_sub(1);
        for (i, byte) in self.data.iter().enumerate() {
            write!(f, "0x{byte:02X}")?;
            if i != last {
                f.write_str(", ")?;
            }
            if (i + 1) % BYTES_PER_LINE == 0 {
                f.write_str("\n")?;
            }
        }
        f.write_str("\n};\n\n")?;

        writeln!(f, "size_t {} = {};\n", self.size_constant(), self.data.len())?;
        writeln!(f, "#endif // {guard}")
    }
}

/// Whether `name` is usable as a C identifier (ASCII only, no keyword check).
pub fn is_c_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
