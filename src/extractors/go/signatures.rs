use super::stringify::format_results;

/// Function, method and value signature building utilities
impl super::GoExtractor {
    /// `func [(receiver)] name[type params](params) [results]`
    pub(super) fn build_function_signature_with_return_types(
        &self,
        receiver: Option<&str>,
        name: &str,
        type_params: &str,
        parameters: &[String],
        return_types: &[String],
    ) -> String {
        let receiver_part = receiver.map_or(String::new(), |r| format!("({}) ", r));

        format!(
            "func {}{}{}({}){}",
            receiver_part,
            name,
            type_params,
            parameters.join(", "),
            format_results(return_types)
        )
    }

    /// Interface method element: `Name(params) [results]`
    pub(super) fn build_method_elem_signature(
        &self,
        name: &str,
        parameters: &[String],
        return_types: &[String],
    ) -> String {
        format!(
            "{}({}){}",
            name,
            parameters.join(", "),
            format_results(return_types)
        )
    }

    /// `const Name = value`, else `const Name Type`, else `const Name`
    pub(super) fn build_const_signature(
        &self,
        name: &str,
        const_type: Option<&str>,
        value: Option<&str>,
    ) -> String {
        match (value, const_type) {
            (Some(val), _) => format!("const {} = {}", name, val),
            (None, Some(typ)) => format!("const {} {}", name, typ),
            (None, None) => format!("const {}", name),
        }
    }

    /// Prefers `var Name Type = value`, falling back to the parts that exist
    pub(super) fn build_var_signature(
        &self,
        name: &str,
        var_type: Option<&str>,
        value: Option<&str>,
    ) -> String {
        match (var_type, value) {
            (Some(typ), Some(val)) => format!("var {} {} = {}", name, typ, val),
            (Some(typ), None) => format!("var {} {}", name, typ),
            (None, Some(val)) => format!("var {} = {}", name, val),
            (None, None) => format!("var {}", name),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::extractors::go::GoExtractor;

    fn extractor() -> GoExtractor {
        GoExtractor::new("a.go".to_string(), String::new())
    }

    #[test]
    fn test_function_signature_result_formatting() {
        let ex = extractor();
        let params = vec!["ctx context.Context".to_string(), "id int".to_string()];
        assert_eq!(
            ex.build_function_signature_with_return_types(None, "Load", "", &params, &[]),
            "func Load(ctx context.Context, id int)"
        );
        assert_eq!(
            ex.build_function_signature_with_return_types(
                Some("s *Store"),
                "Load",
                "",
                &params,
                &["error".to_string()]
            ),
            "func (s *Store) Load(ctx context.Context, id int) error"
        );
        assert_eq!(
            ex.build_function_signature_with_return_types(
                None,
                "Map",
                "[T any]",
                &[],
                &["T".to_string(), "error".to_string()]
            ),
            "func Map[T any]() (T, error)"
        );
    }

    #[test]
    fn test_value_signature_fallbacks() {
        let ex = extractor();
        assert_eq!(
            ex.build_const_signature("Max", Some("int"), Some("10")),
            "const Max = 10"
        );
        assert_eq!(ex.build_const_signature("B", Some("Mode"), None), "const B Mode");
        assert_eq!(ex.build_const_signature("C", None, None), "const C");

        assert_eq!(
            ex.build_var_signature("x", Some("int"), Some("1")),
            "var x int = 1"
        );
        assert_eq!(ex.build_var_signature("x", Some("int"), None), "var x int");
        assert_eq!(ex.build_var_signature("x", None, Some("1")), "var x = 1");
        assert_eq!(ex.build_var_signature("x", None, None), "var x");
    }
}
