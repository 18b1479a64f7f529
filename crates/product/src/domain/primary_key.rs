use std::fmt;

/// Used whenever the schema cannot be inspected.
pub const FALLBACK_PRIMARY_KEY: &str = "product_id";

const PREFERRED_COLUMNS: [(&str, PrimaryKeySource); 2] = [
    ("id", PrimaryKeySource::Id),
    ("product_id", PrimaryKeySource::ProductId),
];

/// Which rule picked the column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimaryKeySource {
    Id,
    ProductId,
    /// Neither known name exists; the first introspected column was taken.
    FirstColumn,
}

/// One column of `products` as reported by `information_schema.columns`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnInfo {
    pub name: String,
    /// `udt_name`, e.g. `int4`, `text`, `varchar`.
    pub udt_name: String,
}

impl ColumnInfo {
    pub fn new(name: impl Into<String>, udt_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            udt_name: udt_name.into(),
        }
    }
}

/// Name of the physical column that identifies a product row, plus its SQL
/// type when introspection reported one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PrimaryKeyColumn {
    name: String,
    sql_type: Option<String>,
}

impl PrimaryKeyColumn {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sql_type: None,
        }
    }

    pub fn with_type(name: impl Into<String>, sql_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sql_type: Some(sql_type.into()),
        }
    }

    pub fn fallback() -> Self {
        Self::new(FALLBACK_PRIMARY_KEY)
    }

    /// Picks `id`, then `product_id`, then the first column in `columns`.
    /// Returns `None` only when `columns` is empty.
    pub fn resolve(columns: &[ColumnInfo]) -> Option<(Self, PrimaryKeySource)> {
        PREFERRED_COLUMNS
            .iter()
            .find_map(|(name, source)| {
                columns
                    .iter()
                    .find(|c| c.name == *name)
                    .map(|column| (column, *source))
            })
            .or_else(|| {
                columns
                    .first()
                    .map(|first| (first, PrimaryKeySource::FirstColumn))
            })
            .map(|(column, source)| {
                (
                    Self::with_type(column.name.clone(), column.udt_name.clone()),
                    source,
                )
            })
    }

    pub fn as_str(&self) -> &str {
        &self.name
    }

    pub fn sql_type(&self) -> Option<&str> {
        self.sql_type.as_deref()
    }

    /// The name as a double-quoted SQL identifier.
    pub fn quoted(&self) -> String {
        quote_ident(&self.name)
    }

    /// `{alias}.{column} = ${param}` with the text parameter cast to the
    /// column type, so Postgres parses the raw path segment. Without a known
    /// type the column is compared as text.
    pub fn equals_param(&self, alias: &str, param: usize) -> String {
        match &self.sql_type {
            Some(sql_type) => format!(
                "{alias}.{} = ${param}::{}",
                self.quoted(),
                quote_ident(sql_type)
            ),
            None => format!("{alias}.{}::TEXT = ${param}", self.quoted()),
        }
    }
}

fn quote_ident(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}

impl fmt::Display for PrimaryKeyColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
