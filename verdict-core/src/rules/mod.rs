//! Built-in rules
//!
//! | Expression        | Accepts                                             |
//! |-------------------|-----------------------------------------------------|
//! | `string`          | non-blank string                                    |
//! | `min:n` / `max:n` | string of at least / at most `n` bytes              |
//! | `numeric`         | any integer or float                                |
//! | `int`             | integer only (`5.0` fails)                          |
//! | `float64`         | float only (`5` fails)                              |
//! | `boolean`         | `true`/`false`, `"true"`/`"false"`/`"1"`/`"0"`, `0`/`1` |
//! | `gt:x` / `lt:x`   | number strictly above / below `x`                   |
//! | `between:a,b`     | number strictly between `a` and `b`                 |
//! | `email[:rfc,dns]` | email address, optionally RFC-parsed and MX-checked |

mod boolean;
mod compare;
mod email;
mod numeric;
mod string;

pub use boolean::BooleanRule;
pub use compare::{BetweenRule, GtRule, LtRule};
pub use email::{EmailMode, EmailRule};
pub use numeric::{Float64Rule, IntRule, NumericRule};
pub use string::{MaxRule, MinRule, StringRule};

use crate::dns::{MxResolver, default_resolver};
use crate::registry::{Result, RuleRegistry};
use std::sync::Arc;

/// Install every built-in rule, using the default MX resolver for `email`.
pub fn register_builtin(registry: &mut RuleRegistry) -> Result<()> {
    register_builtin_with(registry, default_resolver())
}

/// Install every built-in rule, with `resolver` behind `email:dns`.
pub fn register_builtin_with(
    registry: &mut RuleRegistry,
    resolver: Arc<dyn MxResolver>,
) -> Result<()> {
    string::register(registry)?;
    numeric::register(registry)?;
    boolean::register(registry)?;
    compare::register(registry)?;
    registry.register(EmailRule::new(resolver))?;
    Ok(())
}
