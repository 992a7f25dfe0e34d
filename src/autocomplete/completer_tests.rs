use crate::testing::*;
use crate::*;
use itertools::Itertools;
use std::collections::HashSet;

fn completer(meta: Metadata) -> Completer {
    common_init();
    Completer::new(meta, true)
}

fn kinds(suggestions: &[Suggestion]) -> HashSet<SuggestionKind> {
    suggestions.iter().map(|s| s.kind).collect()
}

fn texts_of(suggestions: &[Suggestion], kind: SuggestionKind) -> Vec<&str> {
    suggestions
        .iter()
        .filter(|s| s.kind == kind)
        .map(|s| s.text.as_str())
        .collect()
}

mod smart_context {
    use super::*;

    #[rstest]
    fn select_offers_columns_functions_and_keywords(sample_metadata: Metadata) {
        let result = completer(sample_metadata).complete("SELECT ", 7);
        let kinds = kinds(&result);
        assert!(kinds.contains(&SuggestionKind::Column));
        assert!(kinds.contains(&SuggestionKind::Function));
        assert!(kinds.contains(&SuggestionKind::Keyword));
        assert!(kinds.contains(&SuggestionKind::Table));
    }

    #[rstest]
    fn select_category_order(sample_metadata: Metadata) {
        let result = completer(sample_metadata).complete("SELECT ", 7);
        let order: Vec<_> = result.iter().map(|s| s.kind).dedup().collect();
        assert_eq!(
            order,
            vec![
                SuggestionKind::Keyword,
                SuggestionKind::Function,
                SuggestionKind::Table,
                SuggestionKind::Column,
            ]
        );
    }

    #[rstest]
    fn select_without_tables_falls_back_to_every_column(sample_metadata: Metadata) {
        let total: usize = sample_metadata.columns.values().map(Vec::len).sum();
        let result = completer(sample_metadata).complete("SELECT ", 7);
        assert_eq!(texts_of(&result, SuggestionKind::Column).len(), total);
    }

    #[rstest]
    fn from_offers_tables_views_and_schemas(sample_metadata: Metadata) {
        let result = completer(sample_metadata).complete("SELECT * FROM ", 14);
        let kinds = kinds(&result);
        assert!(kinds.contains(&SuggestionKind::Table));
        assert!(kinds.contains(&SuggestionKind::View));
        assert!(kinds.contains(&SuggestionKind::Schema));
        assert!(!kinds.contains(&SuggestionKind::Column));
    }

    #[rstest]
    fn join_offers_tables(sample_metadata: Metadata) {
        let result = completer(sample_metadata).complete("SELECT * FROM users JOIN ", 25);
        assert!(kinds(&result).contains(&SuggestionKind::Table));
    }

    #[rstest]
    fn where_scopes_columns_to_referenced_tables(sample_metadata: Metadata) {
        let result = completer(sample_metadata).complete("SELECT * FROM users WHERE ", 26);
        assert_eq!(
            texts_of(&result, SuggestionKind::Column),
            vec!["id", "name", "email", "created_at", "is_active"]
        );
        assert!(kinds(&result).contains(&SuggestionKind::Keyword));
        assert!(kinds(&result).contains(&SuggestionKind::Function));
    }

    #[rstest]
    fn unknown_table_falls_back_to_every_column(sample_metadata: Metadata) {
        let total: usize = sample_metadata.columns.values().map(Vec::len).sum();
        let result = completer(sample_metadata).complete("SELECT * FROM nope WHERE ", 25);
        assert_eq!(texts_of(&result, SuggestionKind::Column).len(), total);
    }

    #[rstest]
    fn self_join_lists_columns_once(sample_metadata: Metadata) {
        let sql = "SELECT * FROM users a JOIN users b ON ";
        let result = completer(sample_metadata).complete(sql, sql.len());
        assert_eq!(texts_of(&result, SuggestionKind::Column).len(), 5);
    }

    #[rstest]
    #[case("SELECT * FROM users ORDER BY ")]
    #[case("SELECT * FROM users GROUP BY ")]
    #[case("UPDATE users SET ")]
    fn columns_only(sample_metadata: Metadata, #[case] sql: &str) {
        let result = completer(sample_metadata).complete(sql, sql.len());
        assert!(!result.is_empty());
        assert!(result.iter().all(|s| s.kind == SuggestionKind::Column));
        assert_eq!(
            texts_of(&result, SuggestionKind::Column),
            vec!["id", "name", "email", "created_at", "is_active"]
        );
    }

    #[rstest]
    fn insert_offers_tables(sample_metadata: Metadata) {
        let result = completer(sample_metadata).complete("INSERT INTO ", 12);
        let kinds = kinds(&result);
        assert!(kinds.contains(&SuggestionKind::Table));
        assert!(kinds.contains(&SuggestionKind::Column));
        assert!(!kinds.contains(&SuggestionKind::Keyword));
    }

    #[rstest]
    fn update_offers_tables_only(sample_metadata: Metadata) {
        let result = completer(sample_metadata).complete("UPDATE ", 7);
        assert_eq!(kinds(&result), HashSet::from([SuggestionKind::Table]));
    }

    #[rstest]
    #[case("CREATE TABLE ")]
    #[case("ALTER TABLE ")]
    #[case("DROP ")]
    fn ddl_offers_keywords_tables_and_types(sample_metadata: Metadata, #[case] sql: &str) {
        let result = completer(sample_metadata).complete(sql, sql.len());
        let kinds = kinds(&result);
        assert!(kinds.contains(&SuggestionKind::Keyword));
        assert!(kinds.contains(&SuggestionKind::Table));
        assert!(kinds.contains(&SuggestionKind::Datatype));
        assert!(texts_of(&result, SuggestionKind::Keyword).contains(&"TABLE"));
    }

    #[rstest]
    fn empty_input_offers_everything(sample_metadata: Metadata) {
        let result = completer(sample_metadata).complete("", 0);
        let kinds = kinds(&result);
        for kind in [
            SuggestionKind::Keyword,
            SuggestionKind::Table,
            SuggestionKind::View,
            SuggestionKind::Column,
            SuggestionKind::Function,
            SuggestionKind::Schema,
            SuggestionKind::Database,
            SuggestionKind::Datatype,
            SuggestionKind::Special,
            SuggestionKind::Favorite,
        ] {
            assert!(kinds.contains(&kind), "missing {kind}");
        }
    }

    #[rstest]
    fn backslash_offers_specials_only(sample_metadata: Metadata) {
        let result = completer(sample_metadata).complete(r"\d", 2);
        assert_eq!(
            texts_of(&result, SuggestionKind::Special),
            vec![r"\dt", r"\di", r"\dv", r"\df", r"\dn"]
        );
        assert_eq!(kinds(&result), HashSet::from([SuggestionKind::Special]));
        assert_eq!(result[0].description, "List tables");
    }

    #[rstest]
    fn quoted_keyword_does_not_switch_clause(sample_metadata: Metadata) {
        let sql = "SELECT * FROM users WHERE name = 'from' AND ";
        let result = completer(sample_metadata).complete(sql, sql.len());
        assert!(!kinds(&result).contains(&SuggestionKind::Table));
        assert!(kinds(&result).contains(&SuggestionKind::Column));
    }

    #[rstest]
    fn having_offers_keywords_columns_and_functions(sample_metadata: Metadata) {
        let sql = "SELECT count(*) FROM users GROUP BY id HAVING ";
        let result = completer(sample_metadata).complete(sql, sql.len());
        assert_eq!(
            kinds(&result),
            HashSet::from([
                SuggestionKind::Keyword,
                SuggestionKind::Column,
                SuggestionKind::Function,
            ])
        );
        assert_eq!(
            texts_of(&result, SuggestionKind::Column),
            vec!["id", "name", "email", "created_at", "is_active"]
        );
    }

    #[rstest]
    fn using_offers_everything(sample_metadata: Metadata) {
        let completer = completer(sample_metadata);
        let sql = "SELECT * FROM users JOIN orders USING (";
        let result = completer.complete(sql, sql.len());
        assert_eq!(kinds(&result), kinds(&completer.complete("", 0)));
        assert!(kinds(&result).contains(&SuggestionKind::Special));
        assert!(kinds(&result).contains(&SuggestionKind::Favorite));
    }

    #[rstest]
    fn filters_by_word(sample_metadata: Metadata) {
        let result = completer(sample_metadata).complete("SELECT * FROM us", 16);
        let tables = texts_of(&result, SuggestionKind::Table);
        assert_eq!(tables.first(), Some(&"users"));
        assert!(tables.iter().all(|t| fuzzy_match("us", t)));
        assert!(!tables.contains(&"orders"));
    }
}

mod dot_notation {
    use super::*;

    #[rstest]
    fn columns_of_named_table(sample_metadata: Metadata) {
        let result = completer(sample_metadata).complete("SELECT users.", 13);
        assert!(result.iter().all(|s| s.kind == SuggestionKind::Column));
        assert!(result.iter().all(|s| s.description == "users"));
        assert_eq!(
            texts_of(&result, SuggestionKind::Column),
            vec!["id", "name", "email", "created_at", "is_active"]
        );
    }

    #[rstest]
    #[case("SELECT * FROM users u JOIN orders o ON u.", vec!["id", "name", "email", "created_at", "is_active"])]
    #[case("SELECT * FROM users u JOIN orders o ON o.", vec!["id", "user_id", "product_id", "quantity", "total", "created_at"])]
    #[case("SELECT * FROM orders o WHERE o.to", vec!["total"])]
    #[case("SELECT * FROM orders AS o WHERE O.", vec!["id", "user_id", "product_id", "quantity", "total", "created_at"])]
    #[case("SELECT public.users.", vec!["id", "name", "email", "created_at", "is_active"])]
    #[case("SELECT missing.", vec![])]
    fn resolves_qualifier(
        sample_metadata: Metadata,
        #[case] sql: &str,
        #[case] expected: Vec<&str>,
    ) {
        let result = completer(sample_metadata).complete(sql, sql.len());
        assert_eq!(texts_of(&result, SuggestionKind::Column), expected);
        assert_eq!(result.len(), expected.len());
    }

    #[rstest]
    fn alias_defined_after_cursor(sample_metadata: Metadata) {
        let sql = "SELECT u. FROM users u";
        let result = completer(sample_metadata).complete(sql, 9);
        assert_eq!(
            texts_of(&result, SuggestionKind::Column),
            vec!["id", "name", "email", "created_at", "is_active"]
        );
    }
}

mod qualified_tables {
    use super::*;

    fn with_billing(mut meta: Metadata) -> Metadata {
        meta.tables.push("billing.invoices".into());
        meta.columns
            .insert("billing.invoices".into(), vec!["id".into(), "amount".into()]);
        meta
    }

    fn accept(sql: &str, completion: &Completion, text: &str) -> String {
        let mut out = sql.to_string();
        out.replace_range(completion.span.range(), text);
        out
    }

    #[rstest]
    #[case(true)]
    #[case(false)]
    fn schema_qualified_table_completes_whole_word(
        sample_metadata: Metadata,
        #[case] smart: bool,
    ) {
        let mut completer = completer(with_billing(sample_metadata));
        completer.set_smart(smart);
        let sql = "SELECT * FROM billing.inv";
        let completion = completer.complete_at(sql, sql.len());
        assert_eq!(
            texts_of(&completion.suggestions, SuggestionKind::Table),
            vec!["billing.invoices"]
        );
        assert_eq!(
            accept(sql, &completion, "billing.invoices"),
            "SELECT * FROM billing.invoices"
        );
    }

    #[rstest]
    fn qualified_table_alias_still_narrows(sample_metadata: Metadata) {
        let completer = completer(with_billing(sample_metadata));
        let sql = "SELECT * FROM billing.invoices i WHERE i.am";
        let completion = completer.complete_at(sql, sql.len());
        assert_eq!(
            texts_of(&completion.suggestions, SuggestionKind::Column),
            vec!["amount"]
        );
        assert_eq!(
            accept(sql, &completion, "amount"),
            "SELECT * FROM billing.invoices i WHERE i.amount"
        );
    }
}

mod settings {
    use super::*;

    #[rstest]
    fn keyword_casing_policies(sample_metadata: Metadata) {
        let mut completer = completer(sample_metadata);
        completer.set_smart(false);

        completer.set_keyword_casing(KeywordCasing::Upper);
        let result = completer.complete("sel", 3);
        assert!(texts_of(&result, SuggestionKind::Keyword).contains(&"SELECT"));

        completer.set_keyword_casing(KeywordCasing::Lower);
        let result = completer.complete("SEL", 3);
        assert!(texts_of(&result, SuggestionKind::Keyword).contains(&"select"));

        completer.set_keyword_casing(KeywordCasing::Auto);
        let result = completer.complete("sel", 3);
        assert!(texts_of(&result, SuggestionKind::Keyword).contains(&"select"));
        let result = completer.complete("SEL", 3);
        assert!(texts_of(&result, SuggestionKind::Keyword).contains(&"SELECT"));
    }

    #[rstest]
    fn smart_off_returns_every_category(sample_metadata: Metadata) {
        let mut completer = completer(sample_metadata);
        completer.set_smart(false);
        assert!(!completer.smart());
        let result = completer.complete("SELECT ", 7);
        assert!(kinds(&result).len() >= 3);
        assert!(kinds(&result).contains(&SuggestionKind::Special));
    }

    #[rstest]
    #[case("SELECT ")]
    #[case("sel")]
    #[case("SELECT * FROM ")]
    #[case("SELECT users.")]
    #[case("SELECT * FROM users u WHERE u.na")]
    #[case("SELECT * FROM users WHERE na")]
    #[case("SELECT * FROM users ORDER BY cr")]
    #[case(r"\d")]
    #[case("CREATE TABLE ")]
    #[case("UPDATE users SET ")]
    #[case("INSERT INTO ")]
    #[case("")]
    fn smart_off_is_a_superset(sample_metadata: Metadata, #[case] sql: &str) {
        let mut completer = completer(sample_metadata);
        let smart = completer.complete(sql, sql.len());
        completer.set_smart(false);
        let all = completer.complete(sql, sql.len());
        assert!(all.len() >= smart.len());
        for s in &smart {
            assert!(all.contains(s), "{s:?} missing from non-smart result for {sql:?}");
        }
    }

    #[rstest]
    fn ranked_puts_best_matches_first(sample_metadata: Metadata) {
        let mut completer = completer(sample_metadata);
        let sql = "SELECT * FROM orders WHERE t";

        let unranked = completer.complete(sql, sql.len());
        assert_eq!(unranked[0].text, "not");

        completer.set_ranked(true);
        let ranked = completer.complete(sql, sql.len());
        assert_eq!(ranked[0].text, "true");
        assert_eq!(ranked[1].text, "total");
        assert_eq!(ranked.len(), unranked.len());
    }

    #[rstest]
    fn from_settings(sample_metadata: Metadata) -> Result {
        let settings = Settings {
            smart_completion: false,
            keyword_casing: "lower".into(),
            ..Settings::default()
        };
        let completer = Completer::from_settings(&settings, MetadataHandle::new(sample_metadata))?;
        assert!(!completer.smart());
        assert_eq!(completer.keyword_casing(), KeywordCasing::Lower);
        Ok(())
    }
}

mod metadata_updates {
    use super::*;

    #[rstest]
    fn update_metadata_is_used_by_next_call(sample_metadata: Metadata) {
        let completer = completer(sample_metadata);
        completer.update_metadata(Metadata {
            tables: vec!["new_table".into()],
            ..Metadata::default()
        });
        let result = completer.complete("SELECT * FROM ", 14);
        assert_eq!(texts_of(&result, SuggestionKind::Table), vec!["new_table"]);
    }

    #[rstest]
    fn host_swaps_through_shared_handle(sample_metadata: Metadata) {
        let handle = MetadataHandle::default();
        let completer = Completer::with_handle(handle.clone(), true);
        assert!(texts_of(&completer.complete("UPDATE ", 7), SuggestionKind::Table).is_empty());
        handle.replace(sample_metadata);
        assert!(!texts_of(&completer.complete("UPDATE ", 7), SuggestionKind::Table).is_empty());
        assert_eq!(completer.metadata_handle().load().tables.len(), 5);
    }

    #[test]
    fn empty_snapshot_yields_keywords_only() {
        let completer = completer(Metadata::default());
        let result = completer.complete("SELECT ", 7);
        assert_eq!(kinds(&result), HashSet::from([SuggestionKind::Keyword]));
    }
}

mod spans_and_cursor {
    use super::*;

    #[rstest]
    #[case("SELECT * FROM us", 16, 14..16)]
    #[case("SELECT * FROM ", 14, 14..14)]
    #[case("SELECT u.na FROM users u", 11, 9..11)]
    #[case("SELECT u.na", 11, 7..11)]
    #[case("SELECT users.", 13, 13..13)]
    #[case("SELECT * FROM billing.inv", 25, 14..25)]
    #[case("SELECT na FROM users", 9, 7..9)]
    fn replacement_span(
        sample_metadata: Metadata,
        #[case] sql: &str,
        #[case] cursor: usize,
        #[case] expected: std::ops::Range<usize>,
    ) {
        let completion = completer(sample_metadata).complete_at(sql, cursor);
        assert_eq!(completion.span.range(), expected);
    }

    #[rstest]
    fn cursor_past_end_is_clamped(sample_metadata: Metadata) {
        let completer = completer(sample_metadata);
        assert_eq!(
            completer.complete("SELECT * FROM ", 100),
            completer.complete("SELECT * FROM ", 14)
        );
    }

    #[rstest]
    fn cursor_mid_text_ignores_the_rest(sample_metadata: Metadata) {
        let completer = completer(sample_metadata);
        let result = completer.complete("SELECT * FROM us WHERE id = 1", 16);
        assert!(kinds(&result).contains(&SuggestionKind::Table));
    }

    #[rstest]
    #[case("'")]
    #[case("\"")]
    #[case("\\")]
    #[case("((((")]
    #[case(".")]
    #[case("SELECT .")]
    #[case("grün.")]
    #[case("SELECT 'unterminated FROM ")]
    #[case("=<>!")]
    #[case(";;;")]
    fn malformed_input_never_panics(sample_metadata: Metadata, #[case] sql: &str) {
        let completer = completer(sample_metadata);
        for cursor in 0..=sql.len() + 1 {
            let _ = completer.complete(sql, cursor);
        }
    }
}
