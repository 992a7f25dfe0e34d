#![cfg(test)]
crate::reexport!(provider);
pub use rstest::*;

use crate::*;

pub(crate) fn common_init() {
    use std::sync::Once;
    use tracing_subscriber::EnvFilter;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        // Only initialize once for all tests
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env()) // <- reads RUST_LOG
            .with_test_writer() // ensures it integrates with `cargo test` output
            .init();
    });
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// A small but realistic schema shared by the completion tests.
#[fixture]
pub fn sample_metadata() -> Metadata {
    let mut meta = Metadata {
        tables: strings(&[
            "users",
            "orders",
            "products",
            "user_settings",
            "django_migrations",
        ]),
        views: strings(&["active_users", "order_summary"]),
        functions: strings(&["count", "sum", "avg", "max", "min", "now", "coalesce"]),
        schemas: strings(&["public", "auth", "billing"]),
        databases: strings(&["mydb", "testdb", "production"]),
        datatypes: strings(&["integer", "text", "boolean", "timestamp", "jsonb", "uuid"]),
        specials: [
            (r"\dt", "List tables"),
            (r"\di", "List indexes"),
            (r"\dv", "List views"),
            (r"\df", "List functions"),
            (r"\dn", "List schemas"),
            (r"\l", "List databases"),
            (r"\x", "Toggle expanded output"),
            (r"\q", "Quit"),
        ]
        .into_iter()
        .map(|(name, description)| SpecialCommand::new(name, description))
        .collect(),
        favorites: strings(&["active_users_query", "daily_report"]),
        ..Metadata::default()
    };
    for (table, columns) in [
        ("users", &["id", "name", "email", "created_at", "is_active"][..]),
        ("orders", &["id", "user_id", "product_id", "quantity", "total", "created_at"]),
        ("products", &["id", "name", "price", "description", "category"]),
        ("user_settings", &["id", "user_id", "setting_key", "setting_value"]),
    ] {
        meta.columns.insert(table.to_string(), strings(columns));
    }
    meta
}
