use sqlx::PgPool;

/// Postgres-backed entity store. One pool, shared by every entity
/// repository implementation.
#[derive(Clone)]
pub struct SqlxRepo {
    pub pool: PgPool,
}

impl SqlxRepo {
    pub fn new(pool: PgPool) -> Self {
        SqlxRepo { pool }
    }
}

/// Appends `, col = NULL` or `, col = $n` for an explicitly-set
/// tri-state patch slot; `Unchanged` slots leave the column alone.
macro_rules! push_patch_slot {
    ($qb:ident, $col:literal, $slot:expr) => {
        match $slot {
            crate::domain::entities::option_fields::OptionField::Unchanged => {}
            crate::domain::entities::option_fields::OptionField::SetToNull => {
                $qb.push(concat!(", ", $col, " = NULL"));
            }
            crate::domain::entities::option_fields::OptionField::SetToValue(value) => {
                $qb.push(concat!(", ", $col, " = "));
                $qb.push_bind(value);
            }
        }
    };
}

/// Appends `, col = $n` when a non-nullable patch field is present.
macro_rules! push_patch_field {
    ($qb:ident, $col:literal, $opt:expr) => {
        if let Some(value) = $opt {
            $qb.push(concat!(", ", $col, " = "));
            $qb.push_bind(value);
        }
    };
}

pub(crate) use push_patch_field;
pub(crate) use push_patch_slot;
