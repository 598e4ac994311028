use super::*;

fn decode_envelope(body: &str) -> Catalog {
    serde_json::from_str::<CatalogEnvelope>(body).unwrap().into_catalog()
}

// =============================================================
// ProductId
// =============================================================

#[test]
fn product_id_accepts_integer_and_string() {
    let from_int: ProductId = serde_json::from_str("17").unwrap();
    let from_str: ProductId = serde_json::from_str("\"17\"").unwrap();
    assert_eq!(from_int, from_str);
    assert_eq!(from_int.as_str(), "17");
}

#[test]
fn product_id_rejects_fractional_and_empty() {
    assert!(serde_json::from_str::<ProductId>("1.5").is_err());
    assert!(serde_json::from_str::<ProductId>("\"\"").is_err());
    assert!(serde_json::from_str::<ProductId>("null").is_err());
}

// =============================================================
// Catalog envelope
// =============================================================

#[test]
fn wrapped_catalog_normalizes_like_bare_array() {
    let wrapped = decode_envelope(r#"{"products":[{"id":1,"title":"Hair Oil"}]}"#);
    let bare = decode_envelope(r#"[{"id":1,"title":"Hair Oil"}]"#);
    assert_eq!(wrapped, bare);
    assert_eq!(bare, vec![Product::new("1", "Hair Oil")]);
}

#[test]
fn catalog_preserves_backend_order() {
    let catalog = decode_envelope(r#"[{"id":3,"title":"C"},{"id":1,"title":"A"},{"id":2,"title":"B"}]"#);
    let titles: Vec<&str> = catalog.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["C", "A", "B"]);
}

#[test]
fn product_optional_fields_accept_null() {
    let catalog = decode_envelope(
        r#"[{"id":1,"title":"Kit","price":null,"category":null,"description":null,"image_url":null,"features":null,"source_url":null}]"#,
    );
    assert_eq!(catalog[0], Product::new("1", "Kit"));
}

#[test]
fn product_without_title_is_rejected() {
    assert!(serde_json::from_str::<CatalogEnvelope>(r#"[{"id":1}]"#).is_err());
}

// =============================================================
// Product display helpers
// =============================================================

#[test]
fn price_label_falls_back_when_absent() {
    let mut product = Product::new("1", "Kit");
    assert_eq!(product.price_label(), "Price N/A");
    product.price = Some("₹499".to_owned());
    assert_eq!(product.price_label(), "₹499");
}

#[test]
fn feature_lines_from_list_render_non_strings_as_json() {
    let product: Product =
        serde_json::from_str(r#"{"id":1,"title":"Kit","features":["Sulfate free",{"volume":"200ml"},3]}"#).unwrap();
    assert_eq!(product.feature_lines(), vec!["Sulfate free", r#"{"volume":"200ml"}"#, "3"]);
}

#[test]
fn feature_lines_from_map_render_name_value_pairs() {
    let product: Product =
        serde_json::from_str(r#"{"id":1,"title":"Kit","features":{"Volume":"200ml","Count":2}}"#).unwrap();
    let mut lines = product.feature_lines();
    lines.sort();
    assert_eq!(lines, vec!["Count: 2", "Volume: 200ml"]);
}

#[test]
fn feature_lines_from_text_blob() {
    let product: Product = serde_json::from_str(r#"{"id":1,"title":"Kit","features":"Ayurvedic blend"}"#).unwrap();
    assert_eq!(product.feature_lines(), vec!["Ayurvedic blend"]);

    let blank: Product = serde_json::from_str(r#"{"id":1,"title":"Kit","features":"  "}"#).unwrap();
    assert!(blank.feature_lines().is_empty());
}

// =============================================================
// Chat payloads
// =============================================================

#[test]
fn chat_request_serializes_message_field() {
    let body = serde_json::to_value(ChatRequest { message: "dandruff" }).unwrap();
    assert_eq!(body, serde_json::json!({ "message": "dandruff" }));
}

#[test]
fn chat_reply_decodes_recommendations() {
    let reply: ChatReply =
        serde_json::from_str(r#"{"message":"Try X","recommendations":[{"product_id":7,"title":"Shampoo X"}]}"#)
            .unwrap();
    assert_eq!(reply.message.as_deref(), Some("Try X"));
    assert_eq!(reply.recommendations, vec![ProductRef::new("7", "Shampoo X")]);
}

#[test]
fn chat_reply_tolerates_missing_or_null_fields() {
    let empty: ChatReply = serde_json::from_str("{}").unwrap();
    assert_eq!(empty, ChatReply::default());

    let nulls: ChatReply = serde_json::from_str(r#"{"message":null,"recommendations":null}"#).unwrap();
    assert_eq!(nulls, ChatReply::default());
}

#[test]
fn product_ref_keeps_score_and_reason() {
    let reference: ProductRef =
        serde_json::from_str(r#"{"product_id":3,"title":"Oil","score":1.25,"reason":"mentions hair fall"}"#).unwrap();
    assert_eq!(reference.score, Some(1.25));
    assert_eq!(reference.reason.as_deref(), Some("mentions hair fall"));
    assert_eq!(reference.detail_path(), "/product/3");
}
