//! Call rendering.
//!
//! Two renderings of the same located call:
//!
//! - single-line: the canonical print from the node's `Codegen`
//! - multi-line: one argument per line, one indent unit, every argument
//!   line terminated with a comma (the trailing comma keeps future diffs
//!   to one line), closing `)` on its own line
//!
//! Both prefix `<target> = ` when the call is the right-hand side of an
//! assignment. Indentation here is relative; the splice engine applies
//! the document's base indent.

use callswap_python_cst::Codegen;

use crate::config::SwapConfig;
use crate::locate::Located;

/// Render the located call (and any wrapping assignment) on one line.
pub fn render_single_line(located: &Located<'_, '_>) -> String {
    match located.assignment {
        Some(assign) => assign.to_code(),
        None => located.call.to_code(),
    }
}

/// Render the located call (and any wrapping assignment) with one
/// argument per line.
///
/// Zero-argument calls and calls whose plain callee name is in the
/// configured exception set stay single-line regardless of the request.
pub fn render_multi_line(located: &Located<'_, '_>, config: &SwapConfig) -> String {
    let call = located.call;
    let exempt = call
        .callee_name()
        .is_some_and(|name| config.is_single_line_exception(name));
    if exempt || call.args.is_empty() {
        return render_single_line(located);
    }

    let mut out = String::new();
    if let Some(assign) = located.assignment {
        out.push_str(&assign.target.to_code());
        out.push_str(" = ");
    }
    out.push_str(&call.func.to_code());
    out.push_str("(\n");
    for arg in call.positional_args().chain(call.keyword_args()) {
        out.push_str(&config.indent_unit);
        out.push_str(&arg.to_code());
        out.push_str(",\n");
    }
    out.push(')');
    out
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use callswap_core::text::split_lines;
    use callswap_python_cst::parse_module;

    fn rendered(source: &str, config: &SwapConfig, multi: bool) -> String {
        let module = parse_module(source).expect("parse error");
        let lines = split_lines(source);
        let located = crate::locate::find_nearest_call(&module, &lines, 1)
            .expect("locate error")
            .expect("no call found");
        if multi {
            render_multi_line(&located, config)
        } else {
            render_single_line(&located)
        }
    }

    mod multi_line {
        use super::*;

        #[test]
        fn one_argument_per_line_with_trailing_comma() {
            let out = rendered(
                "foo(bar, thing=None, another={'a': [1, 2]})",
                &SwapConfig::default(),
                true,
            );
            assert_eq!(
                out,
                "foo(\n    bar,\n    thing=None,\n    another={'a': [1, 2]},\n)"
            );
        }

        #[test]
        fn assignment_target_is_prefixed() {
            let out = rendered("obj = foo(bar, thing=None)", &SwapConfig::default(), true);
            assert_eq!(out, "obj = foo(\n    bar,\n    thing=None,\n)");
        }

        #[test]
        fn zero_argument_call_stays_single_line() {
            let out = rendered("foo()", &SwapConfig::default(), true);
            assert_eq!(out, "foo()");
        }

        #[test]
        fn configured_indent_unit_is_used() {
            let config = SwapConfig::default().with_indent_unit("\t");
            let out = rendered("foo(bar, fizz)", &config, true);
            assert_eq!(out, "foo(\n\tbar,\n\tfizz,\n)");
        }

        #[test]
        fn positional_args_print_before_keywords() {
            let out = rendered("foo(key=1, bar)", &SwapConfig::default(), true);
            assert_eq!(out, "foo(\n    bar,\n    key=1,\n)");
        }

        #[test]
        fn attribute_callee_renders_dotted() {
            let out = rendered("obj.method(bar)", &SwapConfig::default(), true);
            assert_eq!(out, "obj.method(\n    bar,\n)");
        }
    }

    mod exceptions {
        use super::*;

        #[test]
        fn super_stays_single_line() {
            let out = rendered("super(Base, self)", &SwapConfig::default(), true);
            assert_eq!(out, "super(Base, self)");
        }

        #[test]
        fn exception_set_is_configurable() {
            let config = SwapConfig::default().with_single_line_exceptions(["frozenset"]);
            let out = rendered("frozenset(items, extras)", &config, true);
            assert_eq!(out, "frozenset(items, extras)");
            // With the default set the same call expands.
            let out = rendered("frozenset(items, extras)", &SwapConfig::default(), true);
            assert_eq!(out, "frozenset(\n    items,\n    extras,\n)");
        }

        #[test]
        fn attribute_callees_are_never_exempt() {
            // Exception lookup is by plain name only.
            let out = rendered("obj.super(bar)", &SwapConfig::default(), true);
            assert_eq!(out, "obj.super(\n    bar,\n)");
        }
    }

    mod single_line {
        use super::*;

        #[test]
        fn canonical_form() {
            let source = "foo(\n    thing,\n    bar,\n    fizz,\n    another,\n)";
            let module = parse_module(source).expect("parse error");
            let lines = split_lines(source);
            let located = crate::locate::find_nearest_call(&module, &lines, 3)
                .expect("locate error")
                .expect("no call found");
            assert_eq!(
                render_single_line(&located),
                "foo(thing, bar, fizz, another)"
            );
        }

        #[test]
        fn assignment_form() {
            let out = rendered("obj = foo(bar)", &SwapConfig::default(), false);
            assert_eq!(out, "obj = foo(bar)");
        }
    }
}
