//! PDF Image Handling
//!
//! Raw 8-bit pixel buffers become image XObjects. Alpha is split off into a
//! separate DeviceGray soft mask, since PDF images carry no alpha channel of
//! their own.

use super::objects::{PdfDictionary, PdfObject, PdfStream};

/// Color space for images
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSpace {
    DeviceGray,
    DeviceRGB,
}

impl ColorSpace {
    pub fn pdf_name(&self) -> &'static str {
        match self {
            ColorSpace::DeviceGray => "DeviceGray",
            ColorSpace::DeviceRGB => "DeviceRGB",
        }
    }

    pub fn components(&self) -> usize {
        match self {
            ColorSpace::DeviceGray => 1,
            ColorSpace::DeviceRGB => 3,
        }
    }
}

/// Image data for embedding in PDF
#[derive(Debug, Clone, PartialEq)]
pub struct ImageData {
    pub width: u32,
    pub height: u32,
    pub color_space: ColorSpace,
    /// Color samples, 8 bits per component
    pub data: Vec<u8>,
    /// Alpha samples, present only when some pixel is not fully opaque
    pub soft_mask: Option<Vec<u8>>,
}

impl ImageData {
    /// Image from raw grayscale bytes
    pub fn from_raw_gray(data: Vec<u8>, width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            color_space: ColorSpace::DeviceGray,
            data,
            soft_mask: None,
        }
    }

    /// Image from raw RGB bytes
    pub fn from_raw_rgb(data: Vec<u8>, width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            color_space: ColorSpace::DeviceRGB,
            data,
            soft_mask: None,
        }
    }

    /// Image from raw RGBA bytes, splitting alpha into a soft mask
    pub fn from_raw_rgba(data: &[u8], width: u32, height: u32) -> Self {
        let pixels = data.len() / 4;
        let mut rgb = Vec::with_capacity(pixels * 3);
        let mut alpha = Vec::with_capacity(pixels);
        for px in data.chunks_exact(4) {
            rgb.extend_from_slice(&px[..3]);
            alpha.push(px[3]);
        }
        let opaque = alpha.iter().all(|&a| a == u8::MAX);

        Self {
            width,
            height,
            color_space: ColorSpace::DeviceRGB,
            data: rgb,
            soft_mask: (!opaque).then_some(alpha),
        }
    }

    /// Expected length of `data` for the image dimensions
    pub fn expected_len(&self) -> usize {
        self.width as usize * self.height as usize * self.color_space.components()
    }

    /// Image XObject stream, optionally linked to a soft mask object
    pub fn to_xobject(&self, soft_mask_ref: Option<u32>) -> PdfStream {
        let mut dict = image_dict(self.width, self.height, self.color_space);
        if let Some(mask_ref) = soft_mask_ref {
            dict.insert("SMask", PdfObject::Reference(mask_ref));
        }
        PdfStream::with_dict(dict, self.data.clone())
    }

    /// Soft mask XObject stream, if the image has transparency
    pub fn soft_mask_xobject(&self) -> Option<PdfStream> {
        self.soft_mask.as_ref().map(|alpha| {
            PdfStream::with_dict(
                image_dict(self.width, self.height, ColorSpace::DeviceGray),
                alpha.clone(),
            )
        })
    }
}

fn image_dict(width: u32, height: u32, color_space: ColorSpace) -> PdfDictionary {
    let mut dict = PdfDictionary::typed("XObject");
    dict.insert("Subtype", PdfObject::name("Image"));
    dict.insert("Width", width);
    dict.insert("Height", height);
    dict.insert("BitsPerComponent", 8i64);
    dict.insert("ColorSpace", PdfObject::name(color_space.pdf_name()));
    dict
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gray_xobject() {
        let image = ImageData::from_raw_gray(vec![0, 255, 128, 64], 2, 2);
        assert_eq!(image.expected_len(), 4);

        let stream = image.to_xobject(None);
        assert_eq!(stream.dict.get("Subtype"), Some(&PdfObject::name("Image")));
        assert_eq!(stream.dict.get("Width"), Some(&PdfObject::Integer(2)));
        assert_eq!(
            stream.dict.get("ColorSpace"),
            Some(&PdfObject::name("DeviceGray"))
        );
        assert!(!stream.dict.contains_key("SMask"));
        assert_eq!(stream.data, vec![0, 255, 128, 64]);
    }

    #[test]
    fn test_rgba_splits_alpha() {
        let image = ImageData::from_raw_rgba(&[1, 2, 3, 255, 4, 5, 6, 0], 2, 1);
        assert_eq!(image.data, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(image.soft_mask, Some(vec![255, 0]));

        let stream = image.to_xobject(Some(7));
        assert_eq!(stream.dict.get("SMask"), Some(&PdfObject::Reference(7)));
        let mask = image.soft_mask_xobject().unwrap();
        assert_eq!(
            mask.dict.get("ColorSpace"),
            Some(&PdfObject::name("DeviceGray"))
        );
        assert_eq!(mask.data, vec![255, 0]);
    }

    #[test]
    fn test_opaque_rgba_has_no_mask() {
        let image = ImageData::from_raw_rgba(&[9, 9, 9, 255], 1, 1);
        assert!(image.soft_mask.is_none());
        assert!(image.soft_mask_xobject().is_none());
        assert_eq!(image.expected_len(), 3);
    }
}
