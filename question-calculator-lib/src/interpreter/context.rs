use std::collections::HashMap;

/// The variable environment of exactly one question.
///
/// Created when a question's processing starts and destroyed when it ends;
/// mutated only by evaluating an assignment.
#[derive(Debug, Clone)]
pub struct Context {
    variables: HashMap<String, f64>,
    /// The question's numeral-base hint. Carried through from the question
    /// but not consulted anywhere during evaluation.
    pub base: u32,
}

impl Default for Context {
    fn default() -> Context {
        Context::new()
    }
}

impl Context {
    pub fn new() -> Context {
        Context::with_base(10)
    }

    pub fn with_base(base: u32) -> Context {
        Context {
            variables: HashMap::new(),
            base,
        }
    }

    /// Looks up the last value assigned to `name`, if any.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.variables.get(name).copied()
    }

    /// Binds `name` to `value`, creating or overwriting the binding.
    pub fn set(&mut self, name: impl Into<String>, value: f64) {
        self.variables.insert(name.into(), value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unassigned_names_have_no_value() {
        let context = Context::new();
        assert_eq!(context.get("x"), None);
    }

    #[test]
    fn assignment_overwrites_the_previous_binding() {
        let mut context = Context::new();
        context.set("x", 1.0);
        context.set("x", 2.0);
        assert_eq!(context.get("x"), Some(2.0));
    }

    #[test]
    fn base_hint_defaults_to_ten() {
        assert_eq!(Context::new().base, 10);
        assert_eq!(Context::with_base(16).base, 16);
    }
}
