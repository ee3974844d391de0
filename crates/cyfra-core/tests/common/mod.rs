//! Builds small text PDFs for integration tests.
#![allow(dead_code)]

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, encryption, Document, Object, Stream};

/// A document with one page per entry, each page showing its lines top to
/// bottom in Helvetica.
pub fn text_document(pages: &[&[&str]]) -> Document {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids: Vec<Object> = Vec::new();
    for lines in pages {
        let mut operations = vec![
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec!["F1".into(), 10.into()]),
            Operation::new("Td", vec![40.into(), 800.into()]),
        ];
        for line in lines.iter() {
            operations.push(Operation::new("Tj", vec![Object::string_literal(*line)]));
            operations.push(Operation::new("Td", vec![0.into(), (-18).into()]));
        }
        operations.push(Operation::new("ET", vec![]));

        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc
}

/// Serialized [`text_document`].
pub fn text_pdf(pages: &[&[&str]]) -> Vec<u8> {
    save(text_document(pages))
}

/// Single-page PDF written to `path`.
pub fn write_text_pdf(path: &std::path::Path, lines: &[&str]) {
    std::fs::write(path, text_pdf(&[lines])).unwrap();
}

/// RC4 encrypted (standard handler, revision 4) [`text_pdf`] whose user
/// password is empty. With `wrong_check` the stored user password hash does
/// not match, so the empty password is rejected.
pub fn encrypted_pdf(pages: &[&[&str]], wrong_check: bool) -> Vec<u8> {
    let mut doc = text_document(pages);

    let mut handler = dictionary! {
        "Filter" => "Standard",
        "V" => 4,
        "R" => 4,
        "Length" => 128,
        "CF" => dictionary! {
            "StdCF" => dictionary! { "CFM" => "V2", "Length" => 16 },
        },
        "StmF" => "StdCF",
        "StrF" => "StdCF",
        "O" => Object::string_literal(vec![0x5a; 32]),
        "P" => -4,
    };
    if wrong_check {
        handler.set("U", Object::string_literal(vec![0u8; 32]));
    }
    let handler_id = doc.add_object(handler);

    doc.trailer.set("Encrypt", handler_id);
    doc.trailer.set(
        "ID",
        vec![
            Object::string_literal(b"cyfra-fixture-id".to_vec()),
            Object::string_literal(b"cyfra-fixture-id".to_vec()),
        ],
    );

    // RC4 is symmetric, so the per-object decryption routine also encrypts.
    let key = encryption::get_encryption_key(&doc, "", false).unwrap();
    for (&id, object) in doc.objects.iter_mut() {
        if id == handler_id {
            continue;
        }
        let Ok(cipher) = encryption::decrypt_object(&key, id, object, false) else {
            continue;
        };
        if let Object::Stream(stream) = object {
            stream.set_content(cipher);
        }
    }

    save(doc)
}

fn save(mut doc: Document) -> Vec<u8> {
    let mut buffer = Vec::new();
    doc.save_to(&mut buffer).unwrap();
    buffer
}

/// First page of a typical acknowledgement printout.
pub const COMPLAINT_PAGE: &[&str] = &[
    "National Cyber Crime Reporting Portal",
    "Acknowledgement Number : 31234240012345",
    "Complaint Date : 12-03-2024",
    "Complaint Accepted Date 13/03/2024 11:20:05 AM",
    "Category of complaint : Online Financial Fraud",
    "Name : Ravi Kumar",
    "Mobile : 9876543210",
    "State : Kerala",
    "Total Fraudulent Amount : 25000",
    "Status : Under Process",
];

/// A later page listing transactions.
pub const TRANSACTION_PAGE: &[&str] = &[
    "Transaction Details",
    "Transaction Date 10/03/2024",
    "Transaction Date 11/03/2024",
    "FIR No. 44/2024",
];
