// Mon Oct 12 2026 - Alex

use crate::declarator::{Declarator, Derivation};

impl Declarator {
    /// Declaration of `name` with this type. Keyword and namespace are kept.
    pub fn show(&self, name: &str) -> String {
        self.show_with(name, true, true)
    }

    pub fn show_with(&self, name: &str, kw: bool, ns: bool) -> String {
        self.declare(&self.show_base(kw, ns), name)
    }

    /// Declaration of `name` with `definition` (a record body) written in
    /// place of the base type.
    pub fn show_inline(&self, definition: &str, name: &str) -> String {
        let mut words = self.qualifiers().keywords();
        words.push(definition);
        self.declare(&words.join(" "), name)
    }

    fn declare(&self, base: &str, name: &str) -> String {
        let decl = format!("{} {}", base, self.show_ptr(name));
        let decl = decl.trim();
        match self.bitfield() {
            Some(width) => format!("{} : {}", decl, width),
            None => decl.to_string(),
        }
    }

    /// Qualified base type, optionally without its `struct`/`class` keyword
    /// and namespace prefix.
    pub fn show_base(&self, kw: bool, ns: bool) -> String {
        let mut base = String::new();
        if kw {
            if let Some(k) = self.keyword() {
                base.push_str(k);
                base.push(' ');
            }
        }
        let symbol = self.symbol();
        if ns {
            base.push_str(symbol);
        } else {
            base.push_str(&symbol[self.namespace().len()..]);
        }

        let mut words = self.qualifiers().keywords();
        words.push(base.trim());
        words.join(" ")
    }

    /// Derivations applied to `name`, parenthesized where a pointer wraps an
    /// array or function.
    pub fn show_ptr(&self, name: &str) -> String {
        let mut s = name.to_string();
        let mut after_pointer = false;
        for d in self.derivations().iter().rev() {
            match d {
                Derivation::Pointer {
                    indirection,
                    trailing,
                } => {
                    let sep = if trailing.is_empty() || s.is_empty() { "" } else { " " };
                    s = format!("{}{}{}{}", indirection, trailing, sep, s);
                    after_pointer = true;
                }
                _ => {
                    if after_pointer {
                        s = format!("({})", s);
                    }
                    s = format!("{}{}", s, d);
                    after_pointer = false;
                }
            }
        }
        s
    }
}

#[cfg(test)]
mod tests {
    use crate::declarator::{ArrayLength, Declarator, Derivation, Indirection, Qualifiers};

    fn c(s: &str) -> Declarator {
        Declarator::parse(s).unwrap()
    }

    fn cxx(s: &str) -> Declarator {
        Declarator::parse_cxx(s).unwrap()
    }

    #[test]
    fn test_show_primitives() {
        assert_eq!(c("int").show("x"), "int x");
        assert_eq!(c("unsigned int").show("x"), "unsigned int x");
        assert_eq!(c("unsigned").show("x"), "unsigned int x");
        assert_eq!(c("long long").show(""), "long long");
        assert_eq!(c("int const").show("x"), "const int x");
    }

    #[test]
    fn test_trailing_const_pointer() {
        let d = c("const unsigned char * const");
        assert_eq!(d.show("x"), "const unsigned char *const x");
        assert_eq!(d.derivations().len(), 1);
        assert!(d.derivations()[0].trailing_const());
        assert_eq!(d.show(""), "const unsigned char *const");

        let pp = c("char *const *");
        assert_eq!(pp.show("argv"), "char *const *argv");
    }

    #[test]
    fn test_pointer_to_array_of_pointers() {
        let d = c("int * (*[2]) [3]");
        assert_eq!(d.show("x"), "int *(*x[2])[3]");
        assert_eq!(d.dim(), 2);
        assert!(d.is_ptr());
        assert_eq!(
            d.derivations(),
            &[
                Derivation::pointer(1),
                Derivation::array(3),
                Derivation::pointer(1),
                Derivation::array(2),
            ]
        );
    }

    #[test]
    fn test_bitfield() {
        let d = c("int #3");
        assert_eq!(d.show("x"), "int x : 3");
        assert_eq!(d.bitfield(), Some(3));
        assert_eq!(c("unsigned char #0").bitfield(), None);
    }

    #[test]
    fn test_cxx_reference_base() {
        let d = cxx("class X::Y &");
        assert_eq!(d.show_base(true, true), "class X::Y");
        assert_eq!(d.show_base(false, false), "Y");
        assert_eq!(d.show_base(false, true), "X::Y");
        assert!(d.is_ptr());
        assert_eq!(d.show("r"), "class X::Y &r");
    }

    #[test]
    fn test_cxx_method_signatures() {
        let d = cxx("struct X &(int, int)");
        assert_eq!(d.show("f"), "struct X &f(int, int)");
        assert!(d.is_function());

        let r = cxx("short () &&");
        assert_eq!(r.show("f"), "short f() &&");
        match r.derivations().last() {
            Some(Derivation::FunctionSignature { args, qualifier }) => {
                assert!(args.is_empty());
                assert_eq!(qualifier.as_deref(), Some("&&"));
            }
            other => panic!("unexpected {:?}", other),
        }

        assert_eq!(cxx("void () noexcept").show("f"), "void f() noexcept");

        let v = cxx("void () volatile");
        assert_eq!(
            v.derivations(),
            &[Derivation::FunctionSignature {
                args: Vec::new(),
                qualifier: Some("volatile".into()),
            }]
        );
    }

    #[test]
    fn test_function_pointer_table() {
        let d = c("char * (**[4]) (int, struct X*, void (*)(int))");
        assert_eq!(d.dim(), 4);
        assert_eq!(d.derivations().len(), 4);
        match &d.derivations()[1] {
            Derivation::FunctionSignature { args, .. } => {
                assert_eq!(args.len(), 3);
                assert_eq!(args[1], "struct X*");
                assert_eq!(args[2], "void (*)(int)");
            }
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(
            d.show("t"),
            "char *(**t[4])(int, struct X*, void (*)(int))"
        );
    }

    #[test]
    fn test_array_of_functions_order() {
        let d = c("void (int, char) [2]");
        assert_eq!(d.derivations().len(), 2);
        assert!(d.derivations()[0].is_array());
        assert!(d.derivations()[1].is_signature());
        assert_eq!(d.show("f"), "void f(int, char)[2]");
    }

    #[test]
    fn test_struct_bases() {
        let d = c("struct _mystruct**");
        assert_eq!(d.base(), "struct _mystruct");
        assert_eq!(
            d.derivations(),
            &[Derivation::Pointer {
                indirection: Indirection::Pointer(2),
                trailing: Qualifiers::empty(),
            }]
        );
        assert_eq!(d.show("p"), "struct _mystruct **p");

        let a = c("struct ?_1a2b3c4d");
        assert_eq!(a.show("x"), "struct ?_1a2b3c4d x");
        assert_eq!(c("union u [8]").show("v"), "union u v[8]");
    }

    #[test]
    fn test_show_inline() {
        let d = c("const struct ?_1a2b3c4d *[2]");
        assert_eq!(
            d.show_inline("struct {\n  int a;\n}", "p"),
            "const struct {\n  int a;\n} *p[2]"
        );
        assert_eq!(c("union ?_1a2b3c4d").show_inline("union { int i; }", "u"), "union { int i; } u");
    }

    #[test]
    fn test_incomplete_array_is_pointer() {
        let d = c("char *[]");
        assert_eq!(d.show("argv"), "char **argv");
    }

    #[test]
    fn test_empty_signature() {
        let d = c("void ()");
        assert!(d.is_function());
        assert_eq!(d.show("f"), "void f()");
        assert_eq!(c("int (*)()").show("cb"), "int (*cb)()");
    }

    #[test]
    fn test_symbolic_dimension() {
        let d = cxx("T [N]");
        assert_eq!(
            d.derivations(),
            &[Derivation::Array {
                length: ArrayLength::Symbolic("N".into())
            }]
        );
        assert_eq!(d.dim(), 0);
        assert!(Declarator::parse("int [N]").is_err());
    }

    #[test]
    fn test_round_trip() {
        for s in [
            "int",
            "unsigned char *",
            "const char *const",
            "int *(*)[3]",
            "void (*)(int, char *)",
            "struct X *[4]",
            "char *(**[4])(int, struct X*, void (*)(int))",
        ] {
            let first = c(s).show("");
            assert_eq!(c(&first).show(""), first, "unstable for {}", s);
        }
    }

    #[test]
    fn test_parse_errors() {
        let err = Declarator::parse("int (*x").unwrap_err();
        assert_eq!(err.input(), "int (*x");
        assert!(Declarator::parse("* int").is_err());
        assert!(Declarator::parse("int ()[").is_err());
    }
}
