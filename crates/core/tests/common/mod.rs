//! Shared fixture builders for integration tests.

use lopdf::{Document, Object, ObjectId, Stream, dictionary};

/// Build a minimal valid PDF with one page per entry.
///
/// `Some(text)` produces a page with a single text-drawing content stream;
/// `None` produces a page with no content at all (a blank page).
pub fn pdf_with_pages(texts: &[Option<&str>]) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id: ObjectId = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });

    let mut kids: Vec<Object> = Vec::new();
    for text in texts {
        let page_id = match text {
            Some(text) => {
                let content = format!("BT /F1 12 Tf 72 700 Td ({text}) Tj ET");
                let stream = Stream::new(lopdf::Dictionary::new(), content.into_bytes());
                let content_id = doc.add_object(Object::Stream(stream));
                doc.add_object(dictionary! {
                    "Type" => "Page",
                    "Parent" => pages_id,
                    "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
                    "Contents" => content_id,
                    "Resources" => Object::Dictionary(dictionary! {
                        "Font" => Object::Dictionary(dictionary! {
                            "F1" => font_id,
                        }),
                    }),
                })
            }
            None => doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            }),
        };
        kids.push(page_id.into());
    }

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => texts.len() as i64,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buf = Vec::new();
    doc.save_to(&mut buf).expect("failed to save test PDF");
    buf
}
