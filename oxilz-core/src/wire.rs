//! Fixed-width binary serialization of codec output units.
//!
//! Records are little-endian with no padding and no separators. Signed
//! fields are written in two's complement but only non-negative values are
//! ever produced or accepted.
//!
//! An absent literal is written either as the reserved sentinel byte
//! [`ABSENT_LITERAL`] or, in [`LiteralMode::Flagged`], as a presence flag
//! byte followed by the literal byte. Sentinel mode is one byte smaller but
//! cannot carry a real literal equal to the sentinel, so full-byte alphabets
//! need the flagged layout.

use crate::Symbol;
use crate::error::{LzError, Result};

/// Sentinel byte marking an absent literal in [`LiteralMode::Sentinel`].
pub const ABSENT_LITERAL: u8 = 0xFF;

/// How an optional literal is laid out on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LiteralMode {
    /// One byte; [`ABSENT_LITERAL`] means "no literal".
    #[default]
    Sentinel,
    /// Two bytes: presence flag (0 or 1), then the literal (0 when absent).
    Flagged,
}

impl LiteralMode {
    /// Bytes taken by one optional literal.
    pub const fn literal_width(self) -> usize {
        match self {
            Self::Sentinel => 1,
            Self::Flagged => 2,
        }
    }

    /// Single-byte tag used by container headers.
    pub const fn to_byte(self) -> u8 {
        match self {
            Self::Sentinel => 0,
            Self::Flagged => 1,
        }
    }

    /// Parse a container header tag.
    pub fn from_byte(tag: u8) -> Result<Self> {
        match tag {
            0 => Ok(Self::Sentinel),
            1 => Ok(Self::Flagged),
            other => Err(LzError::corrupted(
                0,
                format!("unknown literal mode tag {other}"),
            )),
        }
    }
}

/// A codec output unit with a fixed-width binary record.
pub trait WireUnit: Sized {
    /// Size in bytes of one record.
    fn wire_size(mode: LiteralMode) -> usize;

    /// Append this unit's record.
    fn write(&self, writer: &mut UnitWriter) -> Result<()>;

    /// Read one record.
    fn read(reader: &mut UnitReader<'_>) -> Result<Self>;
}

/// Little-endian record writer.
#[derive(Debug, Default)]
pub struct UnitWriter {
    buf: Vec<u8>,
    mode: LiteralMode,
}

impl UnitWriter {
    /// Create a writer with `capacity` bytes reserved.
    pub fn with_capacity(mode: LiteralMode, capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
            mode,
        }
    }

    /// Append an unsigned 32-bit value.
    pub fn write_u32(&mut self, value: u32) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    /// Append a count as u32, failing if it does not fit.
    pub fn write_count(&mut self, field: &'static str, value: usize) -> Result<()> {
        let value = u32::try_from(value).map_err(|_| LzError::field_overflow(field, value as u64))?;
        self.write_u32(value);
        Ok(())
    }

    /// Append a non-negative value as a signed 16-bit field.
    pub fn write_i16(&mut self, field: &'static str, value: u64) -> Result<()> {
        let value = i16::try_from(value).map_err(|_| LzError::field_overflow(field, value))?;
        self.buf.extend_from_slice(&value.to_le_bytes());
        Ok(())
    }

    /// Append a non-negative value as a signed 32-bit field.
    pub fn write_i32(&mut self, field: &'static str, value: u64) -> Result<()> {
        let value = i32::try_from(value).map_err(|_| LzError::field_overflow(field, value))?;
        self.buf.extend_from_slice(&value.to_le_bytes());
        Ok(())
    }

    /// Append an optional literal in the configured layout.
    pub fn write_literal(&mut self, literal: Option<Symbol>) -> Result<()> {
        match (self.mode, literal) {
            (LiteralMode::Sentinel, Some(ABSENT_LITERAL)) => Err(LzError::SentinelCollision {
                literal: ABSENT_LITERAL,
            }),
            (LiteralMode::Sentinel, Some(symbol)) => {
                self.buf.push(symbol);
                Ok(())
            }
            (LiteralMode::Sentinel, None) => {
                self.buf.push(ABSENT_LITERAL);
                Ok(())
            }
            (LiteralMode::Flagged, Some(symbol)) => {
                self.buf.extend_from_slice(&[1, symbol]);
                Ok(())
            }
            (LiteralMode::Flagged, None) => {
                self.buf.extend_from_slice(&[0, 0]);
                Ok(())
            }
        }
    }

    /// Bytes written so far.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Whether nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Take the written bytes.
    pub fn into_vec(self) -> Vec<u8> {
        self.buf
    }
}

/// Little-endian record reader over a borrowed buffer.
#[derive(Debug)]
pub struct UnitReader<'a> {
    data: &'a [u8],
    pos: usize,
    mode: LiteralMode,
}

impl<'a> UnitReader<'a> {
    /// Create a reader over `data`.
    pub fn new(data: &'a [u8], mode: LiteralMode) -> Self {
        Self { data, pos: 0, mode }
    }

    /// Bytes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    fn take<const N: usize>(&mut self) -> Result<[u8; N]> {
        let available = self.remaining();
        if available < N {
            return Err(LzError::unexpected_eof(N - available));
        }
        let mut bytes = [0u8; N];
        bytes.copy_from_slice(&self.data[self.pos..self.pos + N]);
        self.pos += N;
        Ok(bytes)
    }

    /// Read an unsigned 32-bit value.
    pub fn read_u32(&mut self) -> Result<u32> {
        self.take::<4>().map(u32::from_le_bytes)
    }

    /// Read a signed 16-bit field that must be non-negative.
    pub fn read_i16(&mut self, field: &'static str) -> Result<u64> {
        let offset = self.pos as u64;
        let value = i16::from_le_bytes(self.take::<2>()?);
        u64::try_from(value)
            .map_err(|_| LzError::corrupted(offset, format!("negative {field} {value}")))
    }

    /// Read a signed 32-bit field that must be non-negative.
    pub fn read_i32(&mut self, field: &'static str) -> Result<u64> {
        let offset = self.pos as u64;
        let value = i32::from_le_bytes(self.take::<4>()?);
        u64::try_from(value)
            .map_err(|_| LzError::corrupted(offset, format!("negative {field} {value}")))
    }

    /// Read an optional literal in the configured layout.
    pub fn read_literal(&mut self) -> Result<Option<Symbol>> {
        match self.mode {
            LiteralMode::Sentinel => {
                let [byte] = self.take::<1>()?;
                Ok((byte != ABSENT_LITERAL).then_some(byte))
            }
            LiteralMode::Flagged => {
                let offset = self.pos as u64;
                match self.take::<2>()? {
                    [0, _] => Ok(None),
                    [1, symbol] => Ok(Some(symbol)),
                    [flag, _] => Err(LzError::corrupted(
                        offset,
                        format!("invalid literal presence flag {flag}"),
                    )),
                }
            }
        }
    }

    /// Fail if any bytes are left over.
    pub fn finish(self) -> Result<()> {
        if self.remaining() == 0 {
            Ok(())
        } else {
            Err(LzError::corrupted(
                self.pos as u64,
                format!("{} trailing bytes", self.remaining()),
            ))
        }
    }
}

/// Serialize a unit sequence as concatenated records.
pub fn serialize_units<U: WireUnit>(units: &[U], mode: LiteralMode) -> Result<Vec<u8>> {
    let mut writer = UnitWriter::with_capacity(mode, units.len() * U::wire_size(mode));
    for unit in units {
        unit.write(&mut writer)?;
    }
    Ok(writer.into_vec())
}

/// Deserialize a buffer of concatenated records.
///
/// The buffer length must be a whole number of records.
pub fn deserialize_units<U: WireUnit>(data: &[u8], mode: LiteralMode) -> Result<Vec<U>> {
    let size = U::wire_size(mode);
    let partial = data.len() % size;
    if partial != 0 {
        return Err(LzError::unexpected_eof(size - partial));
    }

    let mut reader = UnitReader::new(data, mode);
    let mut units = Vec::with_capacity(data.len() / size);
    while reader.remaining() > 0 {
        units.push(U::read(&mut reader)?);
    }
    Ok(units)
}
