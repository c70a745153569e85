//! PDF Writer
//!
//! Streams indirect objects to the output as they are produced and records
//! their byte offsets for the cross-reference table. Objects may be written in
//! any order; the xref table is sorted by object number when the file is
//! finished.

use super::objects::{PdfDictionary, PdfObject, PdfSerializer, PdfStream};
use flate2::write::ZlibEncoder;
use flate2::Compression;
use std::io::{self, Write};
use thiserror::Error;

/// PDF header version written by [`PdfWriter::write_header`]
pub const PDF_VERSION: &str = "1.4";

/// Error type for PDF operations
#[derive(Debug, Error)]
pub enum PdfError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    #[error("Compression error: {0}")]
    Compression(String),
}

/// Result type for PDF operations
pub type Result<T> = std::result::Result<T, PdfError>;

/// PDF file writer
pub struct PdfWriter<W: Write> {
    writer: W,
    position: u64,
    /// (object number, byte offset)
    offsets: Vec<(u32, u64)>,
    next_obj_num: u32,
    compress: bool,
}

impl<W: Write> PdfWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            position: 0,
            offsets: Vec::new(),
            next_obj_num: 1,
            compress: true,
        }
    }

    /// Set whether unencoded streams are flate-compressed
    pub fn set_compression(&mut self, compress: bool) {
        self.compress = compress;
    }

    /// Bytes written so far
    pub fn position(&self) -> u64 {
        self.position
    }

    fn write_bytes(&mut self, data: &[u8]) -> Result<()> {
        self.writer.write_all(data)?;
        self.position += data.len() as u64;
        Ok(())
    }

    /// Reserve the next object number
    pub fn allocate_object(&mut self) -> u32 {
        let num = self.next_obj_num;
        self.next_obj_num += 1;
        num
    }

    /// Write the `%PDF-x.y` header and the binary marker comment
    pub fn write_header(&mut self) -> Result<()> {
        self.write_bytes(format!("%PDF-{}\n", PDF_VERSION).as_bytes())?;
        self.write_bytes(&[b'%', 0xE2, 0xE3, 0xCF, 0xD3, b'\n'])
    }

    /// Write an indirect object
    pub fn write_object(&mut self, obj_num: u32, object: &PdfObject) -> Result<()> {
        if obj_num == 0 || obj_num >= self.next_obj_num {
            return Err(PdfError::InvalidDocument(format!(
                "Object {} was never allocated",
                obj_num
            )));
        }
        if self.offsets.iter().any(|(num, _)| *num == obj_num) {
            return Err(PdfError::InvalidDocument(format!(
                "Object {} written twice",
                obj_num
            )));
        }

        let offset = self.position;
        let mut serializer = PdfSerializer::new(Vec::new());
        serializer.write_object(object)?;
        let body = serializer.into_inner();

        self.write_bytes(format!("{} 0 obj\n", obj_num).as_bytes())?;
        self.write_bytes(&body)?;
        self.write_bytes(b"\nendobj\n")?;
        self.offsets.push((obj_num, offset));
        Ok(())
    }

    /// Write a stream object, compressing it first when enabled
    pub fn write_stream_object(&mut self, obj_num: u32, mut stream: PdfStream) -> Result<()> {
        if self.compress && !stream.encoded {
            stream = compress_stream(stream)?;
        }
        stream
            .dict
            .insert("Length", PdfObject::Integer(stream.data.len() as i64));
        self.write_object(obj_num, &PdfObject::Stream(stream))
    }

    /// Write the cross-reference table and trailer
    pub fn write_xref_and_trailer(&mut self, catalog_ref: u32, info_ref: Option<u32>) -> Result<()> {
        let xref_offset = self.position;
        let mut entries = self.offsets.clone();
        entries.sort_by_key(|(num, _)| *num);

        let mut table = format!("xref\n0 {}\n0000000000 65535 f \n", self.next_obj_num);
        let mut expected = 1u32;
        for (num, offset) in entries {
            // allocated but never written objects become free entries
            while expected < num {
                table.push_str("0000000000 65535 f \n");
                expected += 1;
            }
            table.push_str(&format!("{:010} 00000 n \n", offset));
            expected = num + 1;
        }
        while expected < self.next_obj_num {
            table.push_str("0000000000 65535 f \n");
            expected += 1;
        }
        self.write_bytes(table.as_bytes())?;

        let mut trailer = PdfDictionary::new();
        trailer.insert("Size", PdfObject::Integer(self.next_obj_num as i64));
        trailer.insert("Root", PdfObject::Reference(catalog_ref));
        if let Some(info) = info_ref {
            trailer.insert("Info", PdfObject::Reference(info));
        }
        let mut serializer = PdfSerializer::new(Vec::new());
        serializer.write_object(&PdfObject::Dictionary(trailer))?;

        self.write_bytes(b"trailer\n")?;
        self.write_bytes(&serializer.into_inner())?;
        self.write_bytes(format!("\nstartxref\n{}\n%%EOF\n", xref_offset).as_bytes())
    }

    /// Flush and return the inner writer
    pub fn finish(mut self) -> Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}

/// Flate-compress stream data and mark it with /Filter /FlateDecode
fn compress_stream(mut stream: PdfStream) -> Result<PdfStream> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(&stream.data)
        .map_err(|e| PdfError::Compression(e.to_string()))?;
    stream.data = encoder
        .finish()
        .map_err(|e| PdfError::Compression(e.to_string()))?;
    stream.encoded = true;
    stream.dict.insert("Filter", PdfObject::name("FlateDecode"));
    Ok(stream)
}
