/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! TGA decoding support

use alloc::vec::Vec;
use core::mem::size_of;

use log::{trace, warn};
use zune_core::bit_depth::BitDepth;
use zune_core::bytestream::{ZByteReaderTrait, ZReader};
use zune_core::colorspace::ColorSpace;
use zune_core::options::DecoderOptions;

use crate::constants::{TGA_HEADER_SIZE, TGA_OPAQUE_ALPHA};
use crate::errors::TgaDecodeErrors;
use crate::header::TgaHeader;
use crate::image::{Pixel, TgaImage};

/// In memory pixels are always four 8-bit channels
const TGA_COLORSPACE: ColorSpace = ColorSpace::RGBA;
const TGA_BIT_DEPTH: BitDepth = BitDepth::Eight;

/// A decoder for uncompressed true color and grayscale TGA images
///
/// The decoder is initialized by calling `new` and either of
/// [`decode_headers`] to decode headers or [`decode`] to return
/// the whole image
///
/// Details of the image, like its dimensions and raw header fields,
/// are accessible after decoding headers
///
/// [`decode_headers`]:TgaDecoder::decode_headers
/// [`decode`]:TgaDecoder::decode
pub struct TgaDecoder<T>
where
    T: ZByteReaderTrait
{
    stream:  ZReader<T>,
    header:  Option<TgaHeader>,
    options: DecoderOptions
}

impl<T> TgaDecoder<T>
where
    T: ZByteReaderTrait
{
    /// Create a new TGA decoder with the default options
    ///
    /// # Arguments
    /// - `data`: The raw TGA bytes
    ///
    /// # Example
    /// ```
    /// use zune_core::bytestream::ZCursor;
    /// let mut decoder = zune_tga::TgaDecoder::new(ZCursor::new(&[]));
    /// // additional code
    /// ```
    pub fn new(data: T) -> TgaDecoder<T> {
        TgaDecoder::new_with_options(data, DecoderOptions::default())
    }

    /// Create a new TGA decoder that obeys specified restrictions
    ///
    /// E.g can be used to set width and height limits to prevent OOM attacks
    ///
    /// # Arguments
    /// - `data`: The raw TGA bytes
    /// - `options`: Decoder options that the decoder should respect
    ///
    /// # Example
    /// ```
    /// use zune_core::bytestream::ZCursor;
    /// use zune_core::options::DecoderOptions;
    /// use zune_tga::TgaDecoder;
    /// // only decode images less than 10 in both width and height
    ///
    /// let options = DecoderOptions::default().set_max_width(10).set_max_height(10);
    ///
    /// let mut decoder = TgaDecoder::new_with_options(ZCursor::new([]), options);
    /// ```
    pub fn new_with_options(data: T, options: DecoderOptions) -> TgaDecoder<T> {
        TgaDecoder {
            stream: ZReader::new(data),
            header: None,
            options
        }
    }

    /// Decode and validate the fixed 18 byte header, storing it into
    /// the decoder instance
    ///
    /// TGA has no magic bytes, the header alone decides whether the
    /// input is decodable. Validation order is image type, pixel depth,
    /// dimensions, the first failing check wins.
    ///
    /// An image ID block, when present, is skipped without being
    /// interpreted. A color map block is rejected in strict mode and
    /// skipped otherwise, this codec never reads palette entries.
    ///
    /// Calling this again after a successful call is a no-op
    ///
    /// # Returns
    /// - On success: Nothing
    /// - On error: The error encountered when decoding headers,
    ///   an instance of [TgaDecodeErrors]
    ///
    /// [TgaDecodeErrors]:crate::errors::TgaDecodeErrors
    pub fn decode_headers(&mut self) -> Result<(), TgaDecodeErrors> {
        if self.header.is_some() {
            return Ok(());
        }
        let mut record = [0; TGA_HEADER_SIZE];

        self.stream
            .read_exact_bytes(&mut record)
            .map_err(|_| TgaDecodeErrors::TruncatedHeader)?;

        let header = TgaHeader::from_bytes(record);

        header.validate()?;

        if usize::from(header.width) > self.options.max_width() {
            return Err(TgaDecodeErrors::TooLargeDimensions(
                "width",
                self.options.max_width(),
                usize::from(header.width)
            ));
        }
        if usize::from(header.height) > self.options.max_height() {
            return Err(TgaDecodeErrors::TooLargeDimensions(
                "height",
                self.options.max_height(),
                usize::from(header.height)
            ));
        }

        if header.id_length > 0 {
            self.stream.skip(usize::from(header.id_length))?;
        }
        if header.color_map_type != 0 {
            if self.options.strict_mode() {
                return Err(TgaDecodeErrors::Generic(
                    "color mapped TGA images are not supported"
                ));
            }
            // entries can still precede the pixels of a true color
            // image, step over them without reading any
            let entry_size = (usize::from(header.color_map_depth) + 7) / 8;
            let map_size = usize::from(header.color_map_length) * entry_size;

            warn!("Ignoring a {map_size} byte color map block");
            self.stream.skip(map_size)?;
        }

        trace!("Image width: {}", header.width);
        trace!("Image height: {}", header.height);
        trace!("Image type: {}", header.image_type);
        trace!("Pixel depth: {}", header.bits_per_pixel);

        self.header = Some(header);

        Ok(())
    }

    /// Return the number of pixels required to hold the decoded image
    ///
    /// The in memory size per pixel is always [`size_of::<Pixel>()`](crate::Pixel),
    /// independent of the on disk record width
    ///
    /// # Returns
    /// - `Some(usize)`: Minimum length of a [Pixel] slice needed to hold the image
    /// - `None`: Indicates the headers were not decoded
    ///
    /// [Pixel]:crate::Pixel
    pub fn output_buffer_size(&self) -> Option<usize> {
        self.header.as_ref().map(TgaHeader::pixel_count)
    }

    /// Decode a TGA image returning the pixels or an error
    ///
    /// The returned [TgaImage] exclusively owns its buffer and carries
    /// the header the file declared, 24-bit files decode with every
    /// alpha channel set to fully opaque
    ///
    /// # Example
    /// - Round trip a blue 2 by 2 image through the encoder and back
    /// ```
    /// use zune_core::bytestream::ZCursor;
    /// use zune_tga::{Pixel, TgaDecoder, TgaEncoder, TgaImage};
    ///
    /// let mut image = TgaImage::new(2, 2);
    /// image.fill(Pixel::opaque(0, 0, 255));
    ///
    /// let mut sink = vec![];
    /// TgaEncoder::new(&image).encode(&mut sink).unwrap();
    ///
    /// let decoded = TgaDecoder::new(ZCursor::new(&sink)).decode().unwrap();
    /// assert_eq!(image.pixels(), decoded.pixels());
    /// ```
    ///
    /// [TgaImage]:crate::TgaImage
    pub fn decode(&mut self) -> Result<TgaImage, TgaDecodeErrors> {
        self.decode_headers()?;

        let header = self.header.unwrap();
        let size = header.pixel_count();

        let mut pixels: Vec<Pixel> = Vec::new();
        // fallible reserve so a hostile header cannot abort the process,
        // the resize below cannot reallocate
        pixels
            .try_reserve_exact(size)
            .map_err(|_| TgaDecodeErrors::AllocationFailed(size.saturating_mul(size_of::<Pixel>())))?;
        pixels.resize(size, Pixel::default());

        self.decode_pixels(&header, &mut pixels)?;

        TgaImage::from_parts(header, pixels)
    }

    /// Decode a TGA image and store the pixels into a caller provided
    /// buffer
    ///
    /// Returns an error if the buffer cannot hold `width * height`
    /// pixels, extra room at the end is left untouched
    ///
    /// # Arguments
    /// - `pixels`: Output buffer to which we will write decoded pixels
    pub fn decode_into(&mut self, pixels: &mut [Pixel]) -> Result<(), TgaDecodeErrors> {
        self.decode_headers()?;

        let header = self.header.unwrap();
        let size = header.pixel_count();

        if pixels.len() < size {
            return Err(TgaDecodeErrors::TooSmallOutput(size, pixels.len()));
        }
        self.decode_pixels(&header, &mut pixels[..size])
    }

    fn decode_pixels(
        &mut self, header: &TgaHeader, pixels: &mut [Pixel]
    ) -> Result<(), TgaDecodeErrors> {
        match header.bytes_per_pixel() {
            3 => self.decode_records::<3>(pixels),
            4 => self.decode_records::<4>(pixels),
            // validate() only lets 24 and 32 bit headers through
            _ => unreachable!()
        }
    }

    fn decode_records<const SRC: usize>(
        &mut self, pixels: &mut [Pixel]
    ) -> Result<(), TgaDecodeErrors> {
        let expected = pixels.len().saturating_mul(SRC);

        for (position, pixel) in pixels.iter_mut().enumerate() {
            // records are B,G,R with an optional trailing alpha
            let mut record = [0; SRC];

            self.stream
                .read_exact_bytes(&mut record)
                .map_err(|_| TgaDecodeErrors::TruncatedPixelData(expected, position * SRC))?;

            let alpha = if SRC == 4 { record[SRC - 1] } else { TGA_OPAQUE_ALPHA };

            *pixel = Pixel::new(record[2], record[1], record[0], alpha);
        }
        trace!("Finished decoding image");

        Ok(())
    }

    /// Return the colorspace decoded pixels are stored in
    ///
    /// This is always RGBA, 24-bit files gain an opaque alpha channel
    pub const fn colorspace(&self) -> ColorSpace {
        TGA_COLORSPACE
    }

    /// Return the bit depth of a decoded channel
    ///
    /// This is always 8
    pub const fn bit_depth(&self) -> BitDepth {
        TGA_BIT_DEPTH
    }

    /// Return the width and height of the image
    ///
    /// Or `None` if the headers haven't been decoded
    pub fn dimensions(&self) -> Option<(usize, usize)> {
        self.header
            .as_ref()
            .map(|h| (usize::from(h.width), usize::from(h.height)))
    }

    /// Return the raw header the file declared
    ///
    /// Reading fields has no validation side effects, useful for
    /// diagnostics and dump tools
    ///
    /// Or `None` if the headers haven't been decoded
    pub const fn header(&self) -> Option<&TgaHeader> {
        self.header.as_ref()
    }
}
