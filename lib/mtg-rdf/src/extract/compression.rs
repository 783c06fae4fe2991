use bzip2::read::MultiBzDecoder;
use flate2::read::MultiGzDecoder;
use reqwest::Url;
use std::fmt::{Display, Formatter};
use std::io::{self, Write};

/// Represents the compression of a downloaded payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Compression {
    /// The payload is stored as-is.
    None,
    /// A .bz2 archive.
    Bz2,
    /// A .gz archive.
    Gzip,
}

impl Compression {
    /// Derives the compression from the extension of the last path segment of `url`.
    pub fn from_url(url: &Url) -> Self {
        let path = url.path();
        if path.ends_with(".bz2") {
            Self::Bz2
        } else if path.ends_with(".gz") {
            Self::Gzip
        } else {
            Self::None
        }
    }

    /// Decompresses `payload` into `writer` and returns the number of decompressed bytes.
    pub fn unpack(self, payload: &[u8], writer: &mut impl Write) -> io::Result<u64> {
        match self {
            Self::None => io::copy(&mut &*payload, writer),
            Self::Bz2 => io::copy(&mut MultiBzDecoder::new(payload), writer),
            Self::Gzip => io::copy(&mut MultiGzDecoder::new(payload), writer),
        }
    }
}

impl Display for Compression {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => f.write_str("uncompressed"),
            Self::Bz2 => f.write_str(".bz2"),
            Self::Gzip => f.write_str(".gz"),
        }
    }
}
