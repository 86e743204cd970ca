use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::HeaderError;
use crate::header::{is_c_identifier, CHeader};

/// Outcome of a successful [`generate`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    pub output: PathBuf,
    pub size: usize,
    pub guard: String,
}

/// Reads `input` in full and writes it to `output` as a C header named `name`.
///
/// A missing input is detected before the output is opened, so the output is
/// left untouched in that case. Any later I/O failure may leave a truncated
/// output file behind.
pub fn generate<I, O>(input: I, output: O, name: &str) -> Result<Generated, HeaderError>
where
    I: AsRef<Path>,
    O: AsRef<Path>,
{
    let input = input.as_ref();
    let output = output.as_ref();

    if !input.is_file() {
        return Err(HeaderError::MissingInput {
            path: input.to_path_buf(),
        });
    }

    if !is_c_identifier(name) {
        log::warn!("'{name}' is not a valid C identifier; using it verbatim");
    }

    let data = fs::read(input).map_err(|source| HeaderError::Read {
        path: input.to_path_buf(),
        source,
    })?;
    log::debug!("Read {} bytes from {}", data.len(), input.display());

    let header = CHeader::new(name, &data);
    write_header(output, &header).map_err(|source| HeaderError::Write {
        path: output.to_path_buf(),
        source,
    })?;
    log::debug!(
        "Wrote {} ({} bytes as {})",
        output.display(),
        data.len(),
        name
    );

    Ok(Generated {
        output: output.to_path_buf(),
        size: data.len(),
        guard: header.guard(),
    })
}

fn write_header(path: &Path, header: &CHeader<'_>) -> io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    header.write_to(&mut out)?;
    out.flush()
}
