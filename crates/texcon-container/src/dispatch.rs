//! Container-format dispatch: peek the first 4 bytes to choose DDS vs KTX.

use texcon_common::BinaryReader;

use crate::dds::parse_dds;
use crate::descriptor::Descriptor;
use crate::error::{Error, Result};
use crate::ktx::parse_ktx;

const DDS_MAGIC: [u8; 4] = *b"DDS ";
const KTX_MAGIC: [u8; 4] = [0xAB, b'K', b'T', b'X'];

/// Parse a DDS or KTXv1 container from a complete in-memory blob.
///
/// Peeks the first 4 bytes to choose a format, then delegates to
/// [`parse_dds`] or [`parse_ktx`]. Blobs shorter than 4 bytes, or whose
/// first 4 bytes match neither magic, fail without attempting either
/// parser.
pub fn parse(blob: &[u8]) -> Result<Descriptor> {
    let mut reader = BinaryReader::new(blob);
    let magic = reader.peek_bytes(4)?;

    if magic == DDS_MAGIC {
        reader.advance(4);
        parse_dds(&mut reader)
    } else if magic == KTX_MAGIC {
        reader.advance(4);
        parse_ktx(&mut reader)
    } else {
        Err(Error::UnknownSignature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_unknown_signature() {
        let err = parse(b"HELLO WORLD").unwrap_err();
        assert!(matches!(err, Error::UnknownSignature));
    }

    #[test]
    fn rejects_short_blob() {
        let err = parse(b"DD").unwrap_err();
        assert!(matches!(err, Error::Truncated(_)));
    }
}
