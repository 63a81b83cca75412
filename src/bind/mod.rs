//! Placeholder and binding support for parameterized SQL.
//!
//! Every field's SQL conversion produces a [`FieldValue`]: a value marker to
//! drop into the statement text plus the bindings that marker references.
//!
//! | Field | Value marker | Bindings |
//! |-------|--------------|----------|
//! | scalar types | `:_k_` | one |
//! | point | `point(:_k1_, :_k2_)` | two |

mod bind_value;
mod field_value;
mod key;

pub use bind_value::{BindValue, Bindings};
pub use field_value::FieldValue;
pub use key::bind_key;
