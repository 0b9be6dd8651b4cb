/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! TGA encoding support

use zune_core::bytestream::{ZByteWriterTrait, ZWriter};

use crate::constants::{SUPPORTED_DEPTHS, TGA_HEADER_SIZE};
use crate::errors::TgaEncodeErrors;
use crate::image::{Pixel, TgaImage};

/// A TGA encoder
///
/// Writes the image's 18 byte header verbatim followed by its pixels
/// in on disk B,G,R\[,A\] order. The header's pixel depth decides the
/// record width, at 24 bits per pixel the alpha channel is not stored.
///
/// An image written by this encoder reads back identically, header
/// fields and pixels both
///
/// # Example
/// - Encode a 100 by 100 transparent image
///
/// ```
/// use zune_tga::{TgaEncoder, TgaImage};
///
/// let image = TgaImage::new(100, 100);
/// let mut sink = vec![];
/// let size = TgaEncoder::new(&image).encode(&mut sink).unwrap();
/// assert_eq!(size, 18 + 100 * 100 * 4);
/// ```
pub struct TgaEncoder<'a> {
    image: &'a TgaImage
}

impl<'a> TgaEncoder<'a> {
    /// Create a new encoder which will encode the image
    ///
    /// # Arguments
    /// - `image`: The image to encode, borrowed for the encoder's lifetime
    pub const fn new(image: &'a TgaImage) -> TgaEncoder<'a> {
        TgaEncoder { image }
    }

    /// Return the exact number of bytes a successful encode will write
    pub fn expected_size(&self) -> usize {
        let header = self.image.header();

        TGA_HEADER_SIZE
            .checked_add(
                header
                    .pixel_count()
                    .checked_mul(usize::from(header.bytes_per_pixel()))
                    .unwrap()
            )
            .unwrap()
    }

    /// Encode the image into `sink`
    ///
    /// Header and pixel write failures are reported as separate error
    /// variants, nothing is retried and no resource outlives the call
    ///
    /// # Returns
    /// - `Ok(size)`: Actual bytes used for encoding
    /// - `Err`: The error encountered during encoding
    pub fn encode<T: ZByteWriterTrait>(&self, sink: T) -> Result<usize, TgaEncodeErrors> {
        let header = self.image.header();

        if !SUPPORTED_DEPTHS.contains(&header.bits_per_pixel) {
            return Err(TgaEncodeErrors::UnsupportedPixelDepth(header.bits_per_pixel));
        }

        let expected = header.pixel_count();
        let found = self.image.pixels().len();

        if expected != found {
            return Err(TgaEncodeErrors::WrongPixelCount(expected, found));
        }

        let mut stream = ZWriter::new(sink);

        stream.reserve(self.expected_size())?;

        stream
            .write_const_bytes(&header.to_bytes())
            .map_err(TgaEncodeErrors::HeaderWriteError)?;

        match header.bytes_per_pixel() {
            3 => Self::encode_records::<3, T>(&mut stream, self.image.pixels())?,
            4 => Self::encode_records::<4, T>(&mut stream, self.image.pixels())?,
            // the depth check above only lets 24 and 32 bits through
            _ => unreachable!()
        }

        Ok(stream.bytes_written())
    }

    fn encode_records<const DST: usize, T: ZByteWriterTrait>(
        stream: &mut ZWriter<T>, pixels: &[Pixel]
    ) -> Result<(), TgaEncodeErrors> {
        for pixel in pixels {
            let mut record = [0; DST];

            record[0] = pixel.b;
            record[1] = pixel.g;
            record[2] = pixel.r;

            if DST == 4 {
                record[DST - 1] = pixel.a;
            }

            stream
                .write_const_bytes(&record)
                .map_err(TgaEncodeErrors::DataWriteError)?;
        }
        Ok(())
    }
}
