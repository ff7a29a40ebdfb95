use super::*;

#[test]
fn test_default_select_star() {
    let mut qb = QueryBuilder::new(false);
    qb.from("users");
    assert_eq!(qb.render(), "SELECT *\nFROM users");
}

#[test]
fn test_select_order_preserved() {
    let mut qb = QueryBuilder::new(false);
    qb.select("id").select("username").select("email").from("users");
    assert_eq!(qb.render(), "SELECT id, username, email\nFROM users");
}

#[test]
fn test_multiple_from_separator() {
    let mut qb = QueryBuilder::new(false);
    qb.from("users u").from("roles r");
    assert_eq!(qb.render(), "SELECT *\nFROM users u,\n roles r");
}

#[test]
fn test_where_wrapping() {
    let mut qb = QueryBuilder::new(false);
    qb.from("users").and_where("a=1").and_where("b=2");
    assert_eq!(qb.render(), "SELECT *\nFROM users\nWHERE (a=1) AND (b=2)");
}

#[test]
fn test_order_by() {
    let mut qb = QueryBuilder::new(false);
    qb.from("users").order_by("created_at DESC").order_by("id");
    assert_eq!(
        qb.render(),
        "SELECT *\nFROM users\nORDER BY created_at DESC, id"
    );
}

#[test]
fn test_render_idempotent() {
    let mut qb = QueryBuilder::new(false);
    qb.select("id").from("users").and_where("a=1").paged(3, 7);
    let first = qb.render();
    assert_eq!(first, qb.render());
}

#[test]
fn test_render_does_not_persist_default_select() {
    // Rendering with an empty SELECT list must not mutate the builder:
    // a select() added afterwards replaces the `*`, not joins it.
    let mut qb = QueryBuilder::new(false);
    qb.from("users");
    assert_eq!(qb.render(), "SELECT *\nFROM users");
    qb.select("id");
    assert_eq!(qb.render(), "SELECT id\nFROM users");
}

#[test]
fn test_paged_first_page_suppresses_offset() {
    // offset = (1 - 1) * 10 = 0, which must not render an OFFSET line
    let mut qb = QueryBuilder::new(false);
    qb.from("users").paged(1, 10);
    assert_eq!(qb.render(), "SELECT *\nFROM users\nLIMIT 10");
}

#[test]
fn test_paged_second_page() {
    let mut qb = QueryBuilder::new(false);
    qb.from("users").paged(2, 10);
    assert_eq!(qb.render(), "SELECT *\nFROM users\nLIMIT 10\nOFFSET 10");
}

#[test]
fn test_paged_negative_page_clamped() {
    let mut qb = QueryBuilder::new(false);
    qb.from("users").paged(-1, 10);
    assert_eq!(qb.render(), "SELECT *\nFROM users\nLIMIT 10");
}

#[test]
fn test_paged_page_zero_negative_offset() {
    // page 0 is not clamped; the negative offset passes straight through
    let mut qb = QueryBuilder::new(false);
    qb.from("users").paged(0, 10);
    assert_eq!(qb.render(), "SELECT *\nFROM users\nLIMIT 10\nOFFSET -10");
}

#[test]
fn test_paged_zero_per_page_disables_paging() {
    let mut qb = QueryBuilder::new(false);
    qb.from("users").paged(1, 0);
    assert_eq!(qb.render(), "SELECT *\nFROM users");
}

#[test]
fn test_paged_none_disables_paging() {
    let mut qb = QueryBuilder::new(false);
    qb.from("users").paged(1, None);
    assert_eq!(qb.render(), "SELECT *\nFROM users");
}

#[test]
fn test_end_to_end() {
    let mut qb = QueryBuilder::new(false);
    let sql = qb
        .select("id")
        .from("users")
        .and_where("age>18")
        .order_by("id")
        .paged(2, 5)
        .render();
    assert_eq!(
        sql,
        "SELECT id\nFROM users\nWHERE (age>18)\nORDER BY id\nLIMIT 5\nOFFSET 5"
    );
}

#[test]
fn test_debug_render_returns_same_statement() {
    // debug only adds a log side effect; the returned string is unchanged
    let mut plain = QueryBuilder::new(false);
    let mut debug = QueryBuilder::new(true);
    plain.select("id").from("users");
    debug.select("id").from("users");
    assert_eq!(plain.render(), debug.render());
}

#[test]
fn test_fragments_pass_through_verbatim() {
    // no validation, no escaping; whatever the caller hands in is rendered
    let mut qb = QueryBuilder::new(false);
    qb.select("COUNT(*) AS n")
        .from("(SELECT 1) AS t")
        .and_where("n > 0 OR 1=1");
    assert_eq!(
        qb.render(),
        "SELECT COUNT(*) AS n\nFROM (SELECT 1) AS t\nWHERE (n > 0 OR 1=1)"
    );
}
