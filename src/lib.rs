/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! A Truevision TGA (Targa) decoder and encoder for uncompressed images
//!
//! The TGA format has no magic bytes, an image starts with a fixed 18 byte header
//! immediately followed by pixel data:
//! ```text
//! ╔════════╤══════════════════════════════════════════════════════════╗
//! ║ Bytes  │ Description                                              ║
//! ╠════════╪══════════════════════════════════════════════════════════╣
//! ║ 1      │ Image ID length                                          ║
//! ╟────────┼──────────────────────────────────────────────────────────╢
//! ║ 1      │ Color map type, 0 means no color map                     ║
//! ╟────────┼──────────────────────────────────────────────────────────╢
//! ║ 1      │ Image type, 2 = true color, 3 = grayscale, uncompressed  ║
//! ╟────────┼──────────────────────────────────────────────────────────╢
//! ║ 5      │ Color map specification (origin, length, entry size)     ║
//! ╟────────┼──────────────────────────────────────────────────────────╢
//! ║ 4      │ X and Y origin, 16-bit LE each                           ║
//! ╟────────┼──────────────────────────────────────────────────────────╢
//! ║ 4      │ Width and height in pixels, 16-bit LE each               ║
//! ╟────────┼──────────────────────────────────────────────────────────╢
//! ║ 1      │ Bits per pixel, 24 or 32                                 ║
//! ╟────────┼──────────────────────────────────────────────────────────╢
//! ║ 1      │ Image descriptor (origin and interleave flags)           ║
//! ╟────────┼──────────────────────────────────────────────────────────╢
//! ║ [334]  │ B,G,R or B,G,R,A records / pixel, row-major              ║
//! ╚════════╧══════════════════════════════════════════════════════════╝
//! ```
//! Pixels are stored on disk in B,G,R\[,A\] order, the decoder returns them with
//! named R,G,B,A channels, 24-bit records decode with a fully opaque alpha.
//!
//! # Features
//! - Decoding and encoding
//! - `no_std`
//! - Fuzz tested decoder
//! - No unsafe
//!
//! # Supported formats
//! - Uncompressed true color (type 2), 24 and 32 bits per pixel
//! - Uncompressed grayscale (type 3), 24 and 32 bits per pixel
//!
//! # Unsupported formats
//! - Run length encoded images (types 9, 10, 11)
//! - Color mapped images (type 1)
//! - The TGA v2 footer and extension area are neither read nor written
//!
//! ## `no_std`
//! You can use `no_std` with alloc feature to compile for `no_std` endpoints
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![macro_use]
extern crate alloc;
extern crate core;

pub use decoder::TgaDecoder;
pub use encoder::TgaEncoder;
pub use errors::{TgaDecodeErrors, TgaEncodeErrors};
pub use header::TgaHeader;
pub use image::{Pixel, TgaImage};
pub use zune_core;

mod constants;
mod decoder;
mod encoder;
mod errors;
mod header;
mod image;
