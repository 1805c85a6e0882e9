//! Signature table of the foreign function boundary.
//!
//! The table is the single source for symbol names used by the run-time
//! loader and for the C header shipped in `include/`. Bump `ABI_VERSION`
//! whenever an entry changes.

/// Version of the exported signature table.
pub const ABI_VERSION: u32 = 1;

pub const DOUBLE_INPUT: &str = "double_input";
pub const THIRD_INPUT: &str = "third_input";
pub const ABI_VERSION_SYMBOL: &str = "numeric_bridge_abi_version";

/// Scalar types that may cross the boundary.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum CType {
    Int32,
    UInt32,
}

impl CType {
    /// Spelling of the type in C, using `<stdint.h>` names.
    pub fn c_name(self) -> &'static str {
        match self {
            CType::Int32 => "int32_t",
            CType::UInt32 => "uint32_t",
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Param {
    pub name: &'static str,
    pub ty: CType,
}

/// One exported function. The calling convention is always `C`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Signature {
    pub symbol: &'static str,
    pub params: &'static [Param],
    pub ret: CType,
    pub summary: &'static str,
}

const INPUT: &[Param] = &[Param {
    name: "input",
    ty: CType::Int32,
}];

pub const SIGNATURES: &[Signature] = &[
    Signature {
        symbol: DOUBLE_INPUT,
        params: INPUT,
        ret: CType::Int32,
        summary: "multiply by 2, wrapping on overflow",
    },
    Signature {
        symbol: THIRD_INPUT,
        params: INPUT,
        ret: CType::Int32,
        summary: "multiply by 3, wrapping on overflow",
    },
    Signature {
        symbol: ABI_VERSION_SYMBOL,
        params: &[],
        ret: CType::UInt32,
        summary: "version of this signature table",
    },
];

impl Signature {
    /// C prototype, e.g. `int32_t double_input(int32_t input);`
    pub fn c_prototype(&self) -> String {
        let params = if self.params.is_empty() {
            "void".to_owned()
        } else {
            self.params
                .iter()
                .map(|p| format!("{} {}", p.ty.c_name(), p.name))
                .collect::<Vec<_>>()
                .join(", ")
        };
        format!("{} {}({});", self.ret.c_name(), self.symbol, params)
    }
}

/// Render the C header for foreign callers.
///
/// `include/numeric_bridge.h` is this output verbatim.
pub fn render_c_header() -> String {
    let mut out = String::new();
    out.push_str("/* numeric_bridge.h: C interface of the numeric-bridge provider. */\n");
    out.push_str("#ifndef NUMERIC_BRIDGE_H\n");
    out.push_str("#define NUMERIC_BRIDGE_H\n\n");
    out.push_str("#include <stdint.h>\n\n");
    out.push_str(&format!("#define NUMERIC_BRIDGE_ABI_VERSION {}\n\n", ABI_VERSION));
    out.push_str("#ifdef __cplusplus\nextern \"C\" {\n#endif\n");
    for sig in SIGNATURES {
        out.push_str(&format!("\n/* {} */\n{}\n", sig.summary, sig.c_prototype()));
    }
    out.push_str("\n#ifdef __cplusplus\n}\n#endif\n\n");
    out.push_str("#endif /* NUMERIC_BRIDGE_H */\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn lookup(symbol: &str) -> Option<&'static Signature> {
        SIGNATURES.iter().find(|sig| sig.symbol == symbol)
    }

    #[test]
    fn test_shipped_header_is_current() {
        let shipped = include_str!("../include/numeric_bridge.h");
        assert_eq!(shipped, render_c_header());
    }

    #[test]
    fn test_symbols_are_unique() {
        let symbols: HashSet<_> = SIGNATURES.iter().map(|s| s.symbol).collect();
        assert_eq!(symbols.len(), SIGNATURES.len());
    }

    #[test]
    fn test_prototypes() {
        assert_eq!(
            lookup(DOUBLE_INPUT).map(Signature::c_prototype).as_deref(),
            Some("int32_t double_input(int32_t input);")
        );
        assert_eq!(
            lookup(THIRD_INPUT).map(Signature::c_prototype).as_deref(),
            Some("int32_t third_input(int32_t input);")
        );
        assert_eq!(
            lookup(ABI_VERSION_SYMBOL).map(Signature::c_prototype).as_deref(),
            Some("uint32_t numeric_bridge_abi_version(void);")
        );
    }
}
