use std::collections::HashMap;

/// One entry of the built-in function table.
#[derive(Debug, Copy, Clone)]
pub struct BuiltinFunction {
    name: &'static str,
    arity: usize,
    body: fn(&[f64]) -> f64,
}

impl BuiltinFunction {
    fn new(name: &'static str, arity: usize, body: fn(&[f64]) -> f64) -> BuiltinFunction {
        BuiltinFunction { name, arity, body }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The fixed number of arguments the function requires.
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Invokes the function body. The caller has already checked that
    /// `arguments.len()` equals the declared arity.
    pub fn apply(&self, arguments: &[f64]) -> f64 {
        (self.body)(arguments)
    }
}

/// The fixed table of built-in functions.
///
/// An explicit, immutable value owned by the evaluator at construction; there
/// is no process-wide registry.
#[derive(Debug, Clone)]
pub struct Builtins {
    functions: HashMap<&'static str, BuiltinFunction>,
}

impl Builtins {
    /// The standard table: trigonometric, logarithmic, and root operations
    /// plus a handful of numeric conveniences. `log` is the base-10
    /// logarithm; `ln` is the natural one.
    pub fn standard() -> Builtins {
        let table = [
            BuiltinFunction::new("sin", 1, |arguments| arguments[0].sin()),
            BuiltinFunction::new("cos", 1, |arguments| arguments[0].cos()),
            BuiltinFunction::new("tan", 1, |arguments| arguments[0].tan()),
            BuiltinFunction::new("asin", 1, |arguments| arguments[0].asin()),
            BuiltinFunction::new("acos", 1, |arguments| arguments[0].acos()),
            BuiltinFunction::new("atan", 1, |arguments| arguments[0].atan()),
            BuiltinFunction::new("sqrt", 1, |arguments| arguments[0].sqrt()),
            BuiltinFunction::new("cbrt", 1, |arguments| arguments[0].cbrt()),
            BuiltinFunction::new("ln", 1, |arguments| arguments[0].ln()),
            BuiltinFunction::new("log", 1, |arguments| arguments[0].log10()),
            BuiltinFunction::new("exp", 1, |arguments| arguments[0].exp()),
            BuiltinFunction::new("abs", 1, |arguments| arguments[0].abs()),
            BuiltinFunction::new("floor", 1, |arguments| arguments[0].floor()),
            BuiltinFunction::new("ceil", 1, |arguments| arguments[0].ceil()),
            BuiltinFunction::new("round", 1, |arguments| arguments[0].round()),
            BuiltinFunction::new("min", 2, |arguments| arguments[0].min(arguments[1])),
            BuiltinFunction::new("max", 2, |arguments| arguments[0].max(arguments[1])),
            BuiltinFunction::new("pow", 2, |arguments| arguments[0].powf(arguments[1])),
        ];
        Builtins {
            functions: table
                .into_iter()
                .map(|function| (function.name, function))
                .collect(),
        }
    }

    pub fn lookup(&self, name: &str) -> Option<&BuiltinFunction> {
        self.functions.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_table_resolves_known_names() {
        let builtins = Builtins::standard();
        assert!(builtins.lookup("cos").is_some());
        assert!(builtins.lookup("sqrt").is_some());
        assert!(builtins.lookup("max").is_some());
    }

    #[test]
    fn unknown_names_resolve_to_nothing() {
        let builtins = Builtins::standard();
        assert!(builtins.lookup("summon").is_none());
    }

    #[test]
    fn arity_matches_the_declared_argument_count() {
        let builtins = Builtins::standard();
        assert_eq!(builtins.lookup("cos").unwrap().arity(), 1);
        assert_eq!(builtins.lookup("min").unwrap().arity(), 2);
    }

    #[test]
    fn bodies_compute_their_operation() {
        let builtins = Builtins::standard();
        assert_eq!(builtins.lookup("cos").unwrap().apply(&[0.0]), 1.0);
        assert_eq!(builtins.lookup("max").unwrap().apply(&[2.0, 3.0]), 3.0);
        assert_eq!(builtins.lookup("sqrt").unwrap().apply(&[9.0]), 3.0);
    }
}
