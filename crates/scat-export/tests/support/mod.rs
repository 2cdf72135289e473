//! Builds small fillable PDFs for tests.

#![allow(dead_code)]

use lopdf::{Dictionary, Document, Object, ObjectId, dictionary};

pub enum Field {
    Text(&'static str),
    Check(&'static str),
    Radio(&'static str, &'static [&'static str]),
    /// A non-terminal field holding text children, named `parent.child`.
    Group(&'static str, &'static [&'static str]),
}

fn rect() -> Object {
    Object::Array(vec![
        Object::Integer(0),
        Object::Integer(0),
        Object::Integer(100),
        Object::Integer(20),
    ])
}

fn states(on: &str) -> Dictionary {
    dictionary! {
        "N" => dictionary! {
            on => Object::Null,
            "Off" => Object::Null,
        },
    }
}

fn text_widget(name: &str, page: ObjectId) -> Dictionary {
    dictionary! {
        "Type" => "Annot",
        "Subtype" => "Widget",
        "FT" => "Tx",
        "T" => Object::string_literal(name),
        "Rect" => rect(),
        "P" => page,
    }
}

pub fn form_pdf(fields: &[Field]) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let page_id = doc.new_object_id();
    let mut roots = Vec::new();
    let mut annots = Vec::new();

    for field in fields {
        match field {
            Field::Text(name) => {
                let id = doc.add_object(text_widget(name, page_id));
                roots.push(Object::Reference(id));
                annots.push(Object::Reference(id));
            }
            Field::Check(name) => {
                let id = doc.add_object(dictionary! {
                    "Type" => "Annot",
                    "Subtype" => "Widget",
                    "FT" => "Btn",
                    "T" => Object::string_literal(*name),
                    "V" => "Off",
                    "AS" => "Off",
                    "AP" => states("Yes"),
                    "Rect" => rect(),
                    "P" => page_id,
                });
                roots.push(Object::Reference(id));
                annots.push(Object::Reference(id));
            }
            Field::Radio(name, options) => {
                let parent_id = doc.new_object_id();
                let kids: Vec<Object> = options
                    .iter()
                    .map(|option| {
                        let id = doc.add_object(dictionary! {
                            "Type" => "Annot",
                            "Subtype" => "Widget",
                            "Parent" => parent_id,
                            "AS" => "Off",
                            "AP" => states(option),
                            "Rect" => rect(),
                            "P" => page_id,
                        });
                        annots.push(Object::Reference(id));
                        Object::Reference(id)
                    })
                    .collect();
                doc.objects.insert(
                    parent_id,
                    Object::Dictionary(dictionary! {
                        "FT" => "Btn",
                        "Ff" => Object::Integer(49152),
                        "T" => Object::string_literal(*name),
                        "V" => "Off",
                        "Kids" => kids,
                    }),
                );
                roots.push(Object::Reference(parent_id));
            }
            Field::Group(name, children) => {
                let parent_id = doc.new_object_id();
                let kids: Vec<Object> = children
                    .iter()
                    .map(|child| {
                        let mut widget = text_widget(child, page_id);
                        widget.remove(b"FT");
                        widget.set("Parent", parent_id);
                        let id = doc.add_object(widget);
                        annots.push(Object::Reference(id));
                        Object::Reference(id)
                    })
                    .collect();
                doc.objects.insert(
                    parent_id,
                    Object::Dictionary(dictionary! {
                        "FT" => "Tx",
                        "T" => Object::string_literal(*name),
                        "Kids" => kids,
                    }),
                );
                roots.push(Object::Reference(parent_id));
            }
        }
    }

    doc.objects.insert(
        page_id,
        Object::Dictionary(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => Object::Array(vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Integer(612),
                Object::Integer(792),
            ]),
            "Annots" => annots,
        }),
    );
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![Object::Reference(page_id)],
            "Count" => Object::Integer(1),
        }),
    );
    let acroform_id = doc.add_object(dictionary! { "Fields" => roots });
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
        "AcroForm" => acroform_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).expect("fixture saves");
    bytes
}

/// Read `/AcroForm /NeedAppearances` from saved bytes.
pub fn need_appearances(bytes: &[u8]) -> bool {
    let doc = Document::load_mem(bytes).expect("output parses");
    let Ok(Object::Reference(root)) = doc.trailer.get(b"Root") else {
        return false;
    };
    let catalog = doc.get_dictionary(*root).expect("catalog");
    let acroform = match catalog.get(b"AcroForm") {
        Ok(Object::Reference(id)) => doc.get_dictionary(*id).expect("acroform"),
        Ok(Object::Dictionary(dict)) => dict,
        _ => return false,
    };
    matches!(acroform.get(b"NeedAppearances"), Ok(Object::Boolean(true)))
}
