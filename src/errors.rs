/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Debug, Display, Formatter};

use zune_core::bytestream::ZByteIoError;

use crate::constants::{SUPPORTED_DEPTHS, TGA_TYPE_GRAYSCALE, TGA_TYPE_TRUE_COLOR};

/// Errors possible during decoding
pub enum TgaDecodeErrors {
    /// The input ended before the fixed 18 byte header record
    /// could be read
    TruncatedHeader,
    /// The header contains an image type other than uncompressed
    /// true color (2) or uncompressed grayscale (3)
    UnsupportedImageType(u8),
    /// The header contains a pixel depth other than 24 or 32 bits
    /// per pixel
    UnsupportedPixelDepth(u8),
    /// Width or height is zero
    ///
    /// Arguments are the width and height read from the header
    InvalidDimensions(u16, u16),
    /// The pixel stream ended before `width * height` records
    /// could be read
    ///
    /// # Arguments
    /// - 1st argument is the number of pixel bytes the header promised
    /// - 2nd argument is the number of pixel bytes actually consumed
    TruncatedPixelData(usize, usize),
    /// The pixel buffer allocation could not be satisfied
    ///
    /// Argument is the size, in bytes, that was requested
    AllocationFailed(usize),
    /// A dimension is above the configured decoder limit
    ///
    /// Bump up `max_width`/`max_height` in
    /// [DecoderOptions](zune_core::options::DecoderOptions) to decode
    /// such images
    TooLargeDimensions(&'static str, usize, usize),
    /// The output slice passed to `decode_into` cannot hold the
    /// whole image
    TooSmallOutput(usize, usize),
    /// Generic message
    Generic(&'static str),
    IoErrors(ZByteIoError)
}

impl Debug for TgaDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            TgaDecodeErrors::TruncatedHeader => {
                writeln!(f, "Not enough bytes for the 18 byte TGA header")
            }
            TgaDecodeErrors::UnsupportedImageType(kind) => {
                writeln!(
                    f,
                    "Unsupported image type {kind}, supported types are {TGA_TYPE_TRUE_COLOR} and {TGA_TYPE_GRAYSCALE}"
                )
            }
            TgaDecodeErrors::UnsupportedPixelDepth(depth) => {
                writeln!(
                    f,
                    "Unsupported pixel depth {depth}, supported depths are {SUPPORTED_DEPTHS:?}"
                )
            }
            TgaDecodeErrors::InvalidDimensions(width, height) => {
                writeln!(
                    f,
                    "Invalid dimensions {width}x{height}, width and height must both be greater than zero"
                )
            }
            TgaDecodeErrors::TruncatedPixelData(expected, found) => {
                writeln!(
                    f,
                    "Truncated pixel data, expected {expected} bytes of pixels but the stream ended after {found}"
                )
            }
            TgaDecodeErrors::AllocationFailed(size) => {
                writeln!(f, "Could not allocate {size} bytes for the pixel buffer")
            }
            TgaDecodeErrors::TooLargeDimensions(dimension, expected, found) => {
                writeln!(
                    f,
                    "Too large dimensions for {dimension}, {found} exceeds {expected}"
                )
            }
            TgaDecodeErrors::TooSmallOutput(expected, found) => {
                writeln!(
                    f,
                    "Too small output, expected a buffer of at least {expected} pixels but found {found}"
                )
            }
            TgaDecodeErrors::Generic(message) => {
                writeln!(f, "{message}")
            }
            TgaDecodeErrors::IoErrors(err) => {
                writeln!(f, "I/O error {err:?}")
            }
        }
    }
}

impl Display for TgaDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

impl From<ZByteIoError> for TgaDecodeErrors {
    fn from(value: ZByteIoError) -> Self {
        TgaDecodeErrors::IoErrors(value)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TgaDecodeErrors {}

/// Errors encountered during encoding
pub enum TgaEncodeErrors {
    /// The header write did not complete
    HeaderWriteError(ZByteIoError),
    /// The pixel data write did not complete
    DataWriteError(ZByteIoError),
    /// The header's pixel depth is neither 24 nor 32 bits per pixel
    ///
    /// Images built by this crate always carry a valid depth, this
    /// can only happen for a hand assembled header
    UnsupportedPixelDepth(u8),
    /// The pixel buffer length does not match `width * height`
    ///
    /// # Arguments
    /// - 1st argument is the pixel count the header promises
    /// - 2nd argument is the length of the pixel buffer
    WrongPixelCount(usize, usize),
    IoErrors(ZByteIoError)
}

impl Debug for TgaEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            TgaEncodeErrors::HeaderWriteError(err) => {
                writeln!(f, "Could not write the TGA header: {err:?}")
            }
            TgaEncodeErrors::DataWriteError(err) => {
                writeln!(f, "Could not write pixel data: {err:?}")
            }
            TgaEncodeErrors::UnsupportedPixelDepth(depth) => {
                writeln!(
                    f,
                    "Cannot encode a header with pixel depth {depth}, supported depths are {SUPPORTED_DEPTHS:?}"
                )
            }
            TgaEncodeErrors::WrongPixelCount(expected, found) => {
                writeln!(
                    f,
                    "Pixel buffer length {found} does not match the {expected} pixels the header promises"
                )
            }
            TgaEncodeErrors::IoErrors(err) => {
                writeln!(f, "I/O error {err:?}")
            }
        }
    }
}

impl Display for TgaEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

impl From<ZByteIoError> for TgaEncodeErrors {
    fn from(value: ZByteIoError) -> Self {
        TgaEncodeErrors::IoErrors(value)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TgaEncodeErrors {}
