//! Dispatch templates: route a generic rdata operation to its per-type (and per-class) implementation.
//!
//! Every operation in [`DISPATCH_OPS`] becomes one `#define <NAME>SWITCH` wrapping a `switch` on the type number.
//! A type implemented by class-specific modules gets a nested `switch` on the class number; a type with only a
//! generic module gets a flat arm.
//!
//! ## Shape
//!
//! ```text
//! #define FROMTEXTSWITCH \
//! 	switch (type) { \
//! 	case 1: switch (rdclass) { \
//! 		case 1: result = fromtext_in_a(...); break; \
//! 		default: result = DNS_R_UNKNOWN; break; \
//! 		} \
//! 		break; \
//! 	case 2: result = fromtext_ns(...); break; \
//! 	default: result = DNS_R_UNKNOWN; break; \
//! 	}
//! ```
//!
//! ## Notes
//! - When a type has both a generic module and class-specific ones, there is no separate flat arm: a flat arm and
//!   a class switch under the same `case` label would not compile. The generic call becomes the default of the
//!   nested class switch instead, so classes without their own module still reach it. Such a switch has no
//!   unknown-type fallback arm.
//! - An empty registry yields `#define NAME FALLBACK;` (or a bare `#define NAME`) instead of an empty switch.

use rdatagen_core::{Registry, TypeRecord, funname};

use super::writer::CodeWriter;

/// One abstract rdata operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchOp {
    /// Name of the generated macro
    pub macro_name: &'static str,
    /// Implementation function prefix (`fromtext` → `fromtext_ns`, `fromtext_in_a`)
    pub function: &'static str,
    /// Argument list passed through unchanged
    pub args: &'static str,
    /// Expression holding the type number
    pub type_selector: &'static str,
    /// Expression holding the class number
    pub class_selector: &'static str,
    /// Statement for unmatched types; `None` means the call's value is discarded and nothing happens
    pub fallback: Option<&'static str>,
}

impl DispatchOp {
    /// `" result ="` when the call's value is kept, empty otherwise.
    fn assignment(&self) -> &'static str {
        if self.fallback.is_some() { " result =" } else { "" }
    }

    fn default_arm(&self) -> String {
        match self.fallback {
            Some(fallback) => format!("default: {fallback}; break;"),
            None => "default: break;".to_string(),
        }
    }

    fn generic_call(&self, record: &TypeRecord) -> String {
        format!(
            "{}_{}({})",
            self.function,
            funname(&record.type_mnemonic),
            self.args
        )
    }

    fn class_call(&self, record: &TypeRecord) -> String {
        format!(
            "{}_{}_{}({})",
            self.function,
            funname(&record.class_mnemonic),
            funname(&record.type_mnemonic),
            self.args
        )
    }
}

const USE_DEFAULT: Option<&str> = Some("use_default = true");

/// Every dispatched operation, in emission order.
pub const DISPATCH_OPS: &[DispatchOp] = &[
    DispatchOp {
        macro_name: "FROMTEXTSWITCH",
        function: "fromtext",
        args: "rdclass, type, lexer, origin, options, target, callbacks",
        type_selector: "type",
        class_selector: "rdclass",
        fallback: Some("result = DNS_R_UNKNOWN"),
    },
    DispatchOp {
        macro_name: "TOTEXTSWITCH",
        function: "totext",
        args: "rdata, tctx, target",
        type_selector: "rdata->type",
        class_selector: "rdata->rdclass",
        fallback: USE_DEFAULT,
    },
    DispatchOp {
        macro_name: "FROMWIRESWITCH",
        function: "fromwire",
        args: "rdclass, type, source, dctx, options, target",
        type_selector: "type",
        class_selector: "rdclass",
        fallback: USE_DEFAULT,
    },
    DispatchOp {
        macro_name: "TOWIRESWITCH",
        function: "towire",
        args: "rdata, cctx, target",
        type_selector: "rdata->type",
        class_selector: "rdata->rdclass",
        fallback: USE_DEFAULT,
    },
    DispatchOp {
        macro_name: "COMPARESWITCH",
        function: "compare",
        args: "rdata1, rdata2",
        type_selector: "rdata1->type",
        class_selector: "rdata1->rdclass",
        fallback: USE_DEFAULT,
    },
    DispatchOp {
        macro_name: "CASECOMPARESWITCH",
        function: "casecompare",
        args: "rdata1, rdata2",
        type_selector: "rdata1->type",
        class_selector: "rdata1->rdclass",
        fallback: USE_DEFAULT,
    },
    DispatchOp {
        macro_name: "FROMSTRUCTSWITCH",
        function: "fromstruct",
        args: "rdclass, type, source, target",
        type_selector: "type",
        class_selector: "rdclass",
        fallback: USE_DEFAULT,
    },
    DispatchOp {
        macro_name: "TOSTRUCTSWITCH",
        function: "tostruct",
        args: "rdata, target, mctx",
        type_selector: "rdata->type",
        class_selector: "rdata->rdclass",
        fallback: USE_DEFAULT,
    },
    DispatchOp {
        macro_name: "FREESTRUCTSWITCH",
        function: "freestruct",
        args: "source",
        type_selector: "common->rdtype",
        class_selector: "common->rdclass",
        fallback: None,
    },
    DispatchOp {
        macro_name: "ADDITIONALDATASWITCH",
        function: "additionaldata",
        args: "rdata, add, arg",
        type_selector: "rdata->type",
        class_selector: "rdata->rdclass",
        fallback: USE_DEFAULT,
    },
    DispatchOp {
        macro_name: "DIGESTSWITCH",
        function: "digest",
        args: "rdata, digest, arg",
        type_selector: "rdata->type",
        class_selector: "rdata->rdclass",
        fallback: USE_DEFAULT,
    },
    DispatchOp {
        macro_name: "CHECKOWNERSWITCH",
        function: "checkowner",
        args: "name, rdclass, type, wildcard",
        type_selector: "type",
        class_selector: "rdclass",
        fallback: Some("result = true"),
    },
    DispatchOp {
        macro_name: "CHECKNAMESSWITCH",
        function: "checknames",
        args: "rdata, owner, bad",
        type_selector: "rdata->type",
        class_selector: "rdata->rdclass",
        fallback: Some("result = true"),
    },
];

/// Emit the dispatch template for one operation, preceded by a blank line.
pub fn emit_dispatch(out: &mut CodeWriter, op: &DispatchOp, registry: &Registry) {
    out.blank_line();

    let groups = registry.type_groups();
    if groups.is_empty() {
        match op.fallback {
            Some(fallback) => out.raw(&format!("#define {} {fallback};\n", op.macro_name)),
            None => out.raw(&format!("#define {}\n", op.macro_name)),
        }
        return;
    }

    let assign = op.assignment();
    out.begin_macro(op.macro_name);
    out.indent();
    out.line(&format!("switch ({}) {{", op.type_selector));

    for group in groups {
        let type_number = group[0].type_number;
        let generic = group.iter().find(|r| r.is_generic());
        let class_specific: Vec<&&TypeRecord> = group.iter().filter(|r| !r.is_generic()).collect();

        if class_specific.is_empty() {
            if let Some(record) = generic {
                out.line(&format!("case {type_number}:{assign} {}; break;", op.generic_call(record)));
            }
            continue;
        }

        out.line(&format!("case {type_number}: switch ({}) {{", op.class_selector));
        out.indent();
        for record in class_specific {
            out.line(&format!(
                "case {}:{assign} {}; break;",
                record.class_number,
                op.class_call(record)
            ));
        }
        match generic {
            Some(record) => out.line(&format!("default:{assign} {}; break;", op.generic_call(record))),
            None => out.line(&op.default_arm()),
        }
        out.line("}");
        out.line("break;");
        out.dedent();
    }

    out.line(&op.default_arm());
    out.end_macro("}");
}

/// Emit every template in [`DISPATCH_OPS`].
pub fn emit_all(out: &mut CodeWriter, registry: &Registry) {
    for op in DISPATCH_OPS {
        emit_dispatch(out, op, registry);
    }
}
