//! Query-handle adapter for sea-orm selects.
//!
//! Field names arrive as strings from the request, so constraints are built
//! from dynamically named columns rather than the entity's `Column` enum.

use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::sea_query::{Alias, Condition, Expr, SimpleExpr};
use sea_orm::{EntityTrait, Order, QueryFilter, QueryOrder, QuerySelect, Select};

use crate::domain::query::ports::QueryHandle;
use crate::domain::query::value_objects::Predicate;

/// Escape LIKE metacharacters so the search term only matches literally.
fn escape_like(term: &str) -> String {
    term.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

fn column(name: &str) -> SimpleExpr {
    Expr::col(Alias::new(name)).into()
}

impl<E: EntityTrait> QueryHandle for Select<E> {
    fn constrain(self, predicate: Predicate) -> Self {
        match predicate {
            Predicate::Eq { field, value } => {
                self.filter(Expr::col(Alias::new(field.as_str())).eq(value))
            }
            Predicate::AnyContains { fields, term } => {
                if fields.is_empty() {
                    return self;
                }

                let pattern = format!("%{}%", escape_like(&term));
                let mut any = Condition::any();
                for field in &fields {
                    any = any.add(Expr::col(Alias::new(field.as_str())).ilike(pattern.clone()));
                }

                self.filter(any)
            }
        }
    }

    fn project(self, field_list: &str) -> Self {
        if field_list.split_whitespace().next().is_none() {
            return self;
        }

        let mut query = self.select_only();
        for field in field_list.split_whitespace() {
            query = query.expr_as(column(field), field);
        }

        query
    }

    fn order(self, sort_spec: &str) -> Self {
        let mut query = self;
        for part in sort_spec.split([',', ' ']) {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }

            let (field, order) = match part.strip_prefix('-') {
                Some(stripped) => (stripped, Order::Desc),
                None => (part, Order::Asc),
            };
            query = QueryOrder::order_by(query, column(field), order);
        }

        query
    }

    fn window(self, skip: u64, limit: u64) -> Self {
        self.offset(skip).limit(limit)
    }
}
