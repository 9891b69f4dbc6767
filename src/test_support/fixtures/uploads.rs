use crate::modules::attachments::core::upload::FileUpload;

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

pub fn png_upload(file_name: &str) -> FileUpload {
    FileUpload {
        file_name: file_name.to_string(),
        content_type: "image/png".to_string(),
        bytes: PNG_SIGNATURE.to_vec(),
    }
}

pub fn pdf_upload(file_name: &str) -> FileUpload {
    FileUpload {
        file_name: file_name.to_string(),
        content_type: "application/pdf".to_string(),
        bytes: b"%PDF-1.7\n%%EOF".to_vec(),
    }
}
