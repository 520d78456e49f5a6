//! LZO1X section decompression
//!
//! Backed by the `rust-lzo` crate when the `lzo` feature is enabled. The
//! backend is checked once per process against a known stream before its
//! first real use; later calls reuse the cached result.

use crate::Result;

/// Decompress an LZO1X stream into `output`, returning the bytes written.
pub fn decompress_into(input: &[u8], output: &mut [u8]) -> Result<usize> {
    backend::init()?;
    backend::decompress(input, output)
}

/// Decompress into a fresh buffer of `output_capacity` bytes, truncated to the bytes produced.
pub fn decompress(input: &[u8], output_capacity: usize) -> Result<Vec<u8>> {
    let mut output = vec![0u8; output_capacity];
    let written = decompress_into(input, &mut output)?;
    output.truncate(written);
    Ok(output)
}

/// Run the one-time backend check without decompressing anything.
pub fn init() -> Result<()> {
    backend::init()
}

/// Whether this build can decode LZO sections at all.
pub fn is_available() -> bool {
    cfg!(feature = "lzo")
}

#[cfg(feature = "lzo")]
mod backend {
    use std::sync::OnceLock;

    use rust_lzo::{LZOContext, LZOError};

    use crate::{Error, Result};

    /// Twelve `a` bytes: four literals and an overlapping eight-byte match.
    const PROBE: [u8; 10] = [21, b'a', b'a', b'a', b'a', 0xE0, 0x00, 0x11, 0x00, 0x00];

    static SELF_CHECK: OnceLock<bool> = OnceLock::new();

    pub(super) fn init() -> Result<()> {
        let healthy = *SELF_CHECK.get_or_init(|| {
            let mut out = [0u8; 12];
            let ok = matches!(decompress(&PROBE, &mut out), Ok(12)) && out == [b'a'; 12];
            log::debug!("LZO backend self check {}", if ok { "passed" } else { "failed" });
            ok
        });
        if healthy {
            Ok(())
        } else {
            Err(Error::Lzo("backend self check failed".to_string()))
        }
    }

    pub(super) fn decompress(input: &[u8], output: &mut [u8]) -> Result<usize> {
        let capacity = output.len();
        let (decoded, status) = LZOContext::decompress_to_slice(input, output);
        let written = decoded.len();
        match status {
            LZOError::OK => Ok(written),
            LZOError::INPUT_NOT_CONSUMED => {
                log::debug!(
                    "LZO stream ended before consuming all {} input bytes",
                    input.len()
                );
                Ok(written)
            }
            LZOError::OUTPUT_OVERRUN => Err(Error::write_overrun(written, 1, capacity)),
            LZOError::INPUT_OVERRUN => Err(Error::Lzo("input overrun".to_string())),
            LZOError::LOOKBEHIND_OVERRUN => Err(Error::Lzo("lookbehind overrun".to_string())),
            LZOError::EOF_NOT_FOUND => Err(Error::Lzo("end of stream marker not found".to_string())),
            _ => Err(Error::Lzo("stream rejected by decoder".to_string())),
        }
    }
}

#[cfg(not(feature = "lzo"))]
mod backend {
    use crate::{Error, Result};

    pub(super) fn init() -> Result<()> {
        Err(Error::unsupported("LZO support was not compiled in"))
    }

    pub(super) fn decompress(_input: &[u8], _output: &mut [u8]) -> Result<usize> {
        init().map(|()| 0)
    }
}
