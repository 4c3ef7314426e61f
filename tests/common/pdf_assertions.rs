use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, Stream};
use vellum::{RenderOutput, StyleRegistry};

/// Parses operator text the way a PDF reader would.
pub fn decode_operations(operators: &str) -> Result<Vec<Operation>, lopdf::Error> {
    Ok(Content::decode(operators.as_bytes())?.operations)
}

/// Operator names in order, e.g. `["q", "cm", "m", "l", "S", "Q"]`.
pub fn operator_names(operators: &str) -> Result<Vec<String>, lopdf::Error> {
    Ok(decode_operations(operators)?
        .into_iter()
        .map(|op| op.operator)
        .collect())
}

pub fn count_operator(operators: &str, name: &str) -> Result<usize, lopdf::Error> {
    Ok(operator_names(operators)?
        .iter()
        .filter(|op| op.as_str() == name)
        .count())
}

/// Parses a serialized graphics-state dictionary into a lopdf dictionary.
pub fn parse_style_dict(dict: &str) -> Result<Dictionary, Box<dyn std::error::Error>> {
    let operations = decode_operations(&format!("{dict} gs"))?;
    let operand = operations
        .first()
        .and_then(|op| op.operands.first())
        .ok_or("graphics-state dictionary did not parse to an operand")?;
    Ok(operand.as_dict()?.clone())
}

/// Builds a one-page PDF whose content stream is `output.operators` and whose
/// `/ExtGState` resources declare every name in `output.style_names`, then
/// reloads it with lopdf.
pub fn assemble_page(
    output: &RenderOutput,
    registry: &StyleRegistry,
) -> Result<Document, Box<dyn std::error::Error>> {
    let mut doc = Document::with_version("1.7");
    let pages_id = doc.new_object_id();

    let mut states = Dictionary::new();
    for name in &output.style_names {
        let dict = parse_style_dict(registry.lookup_by_name(name.as_str())?)?;
        states.set(name.as_str(), Object::Dictionary(dict));
    }

    let content_id = doc.add_object(Stream::new(
        dictionary! {},
        output.operators.as_bytes().to_vec(),
    ));
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
        "Resources" => dictionary! { "ExtGState" => states },
        "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
    });
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)?;
    Ok(Document::load_mem(&bytes)?)
}

/// The decoded content of the first page of `doc`.
pub fn first_page_operations(doc: &Document) -> Result<Vec<Operation>, Box<dyn std::error::Error>> {
    let (_, page_id) = doc
        .get_pages()
        .into_iter()
        .next()
        .ok_or("document has no pages")?;
    Ok(doc.get_and_decode_page_content(page_id)?.operations)
}

/// Asserts that every `q` has a matching `Q` and none closes early.
pub fn assert_balanced_stack(operators: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut depth = 0_i32;
    for name in operator_names(operators)? {
        match name.as_str() {
            "q" => depth += 1,
            "Q" => {
                depth -= 1;
                assert!(depth >= 0, "Q without matching q in {operators}");
            }
            _ => {}
        }
    }
    assert_eq!(depth, 0, "unbalanced q/Q in {operators}");
    Ok(())
}
