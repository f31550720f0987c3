//! Core codec trait.
//!
//! Every dictionary codec turns a symbol sequence into a sequence of
//! structured output units and back. The block-parallel runner is generic
//! over this trait.

use crate::Symbol;
use crate::error::{LzError, Result};
use crate::wire::WireUnit;

/// A configured symbol-stream codec.
///
/// Implementations hold only configuration: every call builds fresh
/// dictionary or window state, so one codec value can be shared by many
/// threads at once.
pub trait Codec: Send + Sync {
    /// Output unit produced by [`Codec::encode`].
    type Unit: WireUnit + Clone + Send + Sync;

    /// Short codec name for diagnostics.
    fn name(&self) -> &'static str;

    /// Encode `symbols` into output units.
    ///
    /// Fails with [`LzError::InvalidSymbol`] before producing anything if a
    /// symbol lies outside the configured alphabet.
    fn encode(&self, symbols: &[Symbol]) -> Result<Vec<Self::Unit>>;

    /// Decode units produced by [`Codec::encode`] with the same configuration.
    ///
    /// Decoding with a different configuration than the one used to encode
    /// is a caller error; the output is then unspecified.
    fn decode(&self, units: &[Self::Unit]) -> Result<Vec<Symbol>>;

    /// Encode into a caller-provided buffer; returns the number of units written.
    fn encode_into(&self, symbols: &[Symbol], output: &mut [Self::Unit]) -> Result<usize> {
        let units = self.encode(symbols)?;
        if units.len() > output.len() {
            return Err(LzError::output_capacity(units.len(), output.len()));
        }
        output[..units.len()].clone_from_slice(&units);
        Ok(units.len())
    }

    /// Decode into a caller-provided buffer; returns the number of symbols written.
    fn decode_into(&self, units: &[Self::Unit], output: &mut [Symbol]) -> Result<usize> {
        let symbols = self.decode(units)?;
        if symbols.len() > output.len() {
            return Err(LzError::output_capacity(symbols.len(), output.len()));
        }
        output[..symbols.len()].copy_from_slice(&symbols);
        Ok(symbols.len())
    }
}
