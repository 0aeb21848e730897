//! Integration tests for populating documents through DocScope chains

use std::io::Cursor;

use quickdoc::analysis::tokenizer::Tokenizer;
use quickdoc::analysis::tokenizer::unicode_word::UnicodeWordTokenizer;
use quickdoc::prelude::*;

#[test]
fn test_nested_city_field() -> Result<()> {
    let root = DocScope::new(Document::new());
    root.descend("user")
        .descend("address")
        .text("city", Some("Paris"))?;

    let doc = root.document();
    let doc = doc.borrow();
    assert_eq!(doc.len(), 1, "Should contain exactly one field");
    assert_eq!(doc.fields()[0].name(), "user.address.city");
    assert_eq!(doc.fields()[0].string_value(), Some("Paris"));

    Ok(())
}

#[test]
fn test_null_value_is_placeholder() -> Result<()> {
    let root = DocScope::new(Document::new());
    root.text("name", None)?;

    let doc = root.document();
    let field = doc.borrow().fields()[0].string_value().map(str::to_string);
    assert_eq!(field.as_deref(), Some(NULL_PLACEHOLDER));

    Ok(())
}

#[test]
fn test_store_default_survives_descend() -> Result<()> {
    let root = DocScope::new(Document::new());
    let b1 = root.with_default_store(Store::Yes);
    let b2 = b1.descend("x");

    assert_eq!(b2.default_store(), Store::Yes);
    assert_eq!(b2.path(), "x");

    let field = b2.text("y", Some("1"))?;
    assert_eq!(field.name(), "x.y");
    assert!(field.is_stored());

    Ok(())
}

#[test]
fn test_deep_paths_for_every_depth() -> Result<()> {
    let segments = ["a", "bb", "c_c", "d-d", "e"];
    let root = DocScope::new(Document::new());

    let mut scope = root.clone();
    for (depth, segment) in segments.iter().enumerate() {
        scope = scope.descend(segment);
        scope.text("f", Some(depth.to_string().as_str()))?;
    }

    let doc = root.document();
    let doc = doc.borrow();
    for depth in 0..segments.len() {
        let expected = format!("{}.f", segments[..=depth].join("."));
        assert_eq!(doc.get_values(&expected), vec![depth.to_string().as_str()]);
    }

    Ok(())
}

#[test]
fn test_derivations_do_not_mutate_original() -> Result<()> {
    let root = DocScope::with_defaults(Document::new(), Store::Yes, Index::Analyzed);
    let _ = root.descend("child");
    let _ = root.with_default_store(Store::No);
    let _ = root.with_default_index(Index::NotAnalyzed);

    let field = root.text("title", Some("Guide"))?;
    assert_eq!(field.name(), "title");
    assert!(field.is_stored());
    assert_eq!(field.index(), Index::Analyzed);

    Ok(())
}

#[test]
fn test_mixed_sources_share_one_document() -> Result<()> {
    let root = DocScope::with_defaults(Document::new(), Store::Yes, Index::Analyzed);
    let article = root.descend("article");
    let keyword = article.with_default_index(Index::NotAnalyzed);

    keyword.text("id", Some("post-17"))?;
    article.text("title", Some("Flattening nested records"))?;
    article.reader_with_term_vector(
        "body",
        Cursor::new("long body text streamed from disk"),
        TermVector::WithPositionsOffsets,
    )?;
    let tokens = UnicodeWordTokenizer::new().tokenize("rust, search; index")?;
    article.tokens("tags", tokens)?;
    article.bytes("thumbnail", vec![0xffu8, 0xd8, 0xff], Store::Yes)?;
    article.descend("author").text("email", None)?.set_boost(0.5);

    let doc = root.document();
    let doc = doc.borrow();
    assert_eq!(
        doc.field_names(),
        vec![
            "article.id",
            "article.title",
            "article.body",
            "article.tags",
            "article.thumbnail",
            "article.author.email",
        ]
    );

    let id = doc.get("article.id").unwrap();
    assert!(id.is_stored());
    assert!(!id.is_tokenized());

    let body = doc.get("article.body").unwrap();
    assert!(!body.is_stored());
    assert!(body.term_vector().with_offsets());

    let email = doc.get("article.author.email").unwrap();
    assert_eq!(email.string_value(), Some(NULL_PLACEHOLDER));
    assert_eq!(email.boost(), 0.5);

    Ok(())
}

#[test]
fn test_field_errors_leave_document_unchanged() {
    let root = DocScope::new(Document::new());
    root.text("ok", Some("1")).unwrap();

    let unindexed = root.with_default_index(Index::No);
    let result = unindexed.text("hidden", Some("2"));
    assert!(matches!(result, Err(QuickdocError::Field(_))));
    drop(result);

    let doc = root.document();
    assert_eq!(doc.borrow().field_names(), vec!["ok"]);
}

#[test]
fn test_held_field_blocks_additions_across_chain() -> Result<()> {
    let root = DocScope::new(Document::new());
    let user = root.descend("user");
    let stored = user.with_default_store(Store::Yes);

    let mut name = user.text("name", Some("Ada"))?;
    name.set_boost(1.5);

    for result in [
        root.text("id", Some("1")).map(drop),
        stored.text("email", None).map(drop),
        user.descend("address").text("city", Some("Paris")).map(drop),
    ] {
        assert!(matches!(result, Err(QuickdocError::Borrow(_))));
    }
    drop(name);

    stored.text("email", None)?;
    let doc = root.document();
    let doc = doc.borrow();
    assert_eq!(doc.field_names(), vec!["user.name", "user.email"]);
    assert_eq!(doc.get("user.name").unwrap().boost(), 1.5);

    Ok(())
}

#[test]
fn test_document_handed_back_to_caller() -> Result<()> {
    let root = DocScope::new(Document::new());
    root.descend("meta").text("lang", Some("en"))?;

    let shared = root.document();
    drop(root);

    let doc = std::rc::Rc::try_unwrap(shared)
        .expect("no scope left")
        .into_inner();
    let fields = doc.into_fields();
    assert_eq!(fields.len(), 1);
    assert_eq!(fields[0].name(), "meta.lang");

    Ok(())
}
